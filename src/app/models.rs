//! Data models for catalog processing
//!
//! This module contains the core data structures for representing one catalog
//! title as read from the dataset export, and the in-memory catalog that every
//! aggregator consumes.

use crate::constants::{self, columns};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One raw dataset row: column name to unparsed text value
pub type RawRow = HashMap<String, String>;

// =============================================================================
// Title Type
// =============================================================================

/// Kinds of title recognised by the type-specific aggregators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TitleType {
    Movie,
    TvShow,
}

impl TitleType {
    /// Parse the exact literal used by the dataset ("Movie" or "TV Show")
    ///
    /// Matching is case sensitive and does not trim; anything else is not a
    /// recognised type.
    pub fn from_literal(value: &str) -> Option<Self> {
        match value {
            constants::TYPE_MOVIE => Some(TitleType::Movie),
            constants::TYPE_TV_SHOW => Some(TitleType::TvShow),
            _ => None,
        }
    }

    /// Dataset literal for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            TitleType::Movie => constants::TYPE_MOVIE,
            TitleType::TvShow => constants::TYPE_TV_SHOW,
        }
    }
}

impl fmt::Display for TitleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Record
// =============================================================================

/// One catalog title
///
/// Fields are stored exactly as provided by the source row. The only
/// transformation applied at construction is splitting `cast` into actor
/// names; dates and durations stay as text and are parsed by the aggregators
/// that need them. Records are never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Dataset identifier (e.g., "s1")
    pub show_id: String,

    /// Raw type text, expected to be "Movie" or "TV Show"
    #[serde(rename = "type")]
    pub kind: String,

    /// Title of the movie or show
    pub title: String,

    /// Director name, possibly empty
    pub director: String,

    /// Actor names in source order
    pub cast: Vec<String>,

    /// Comma-delimited list of countries
    pub country: String,

    /// Date the title was added, e.g. "September 9, 2019"
    pub date_added: String,

    /// Original release year as text
    pub release_year: String,

    /// Classification code (e.g., "TV-MA"), possibly empty
    pub rating: String,

    /// "<N> min" for movies, "<N> Season(s)" for series
    pub duration: String,

    /// Comma-delimited genre list
    pub listed_in: String,

    /// Free-text synopsis
    pub description: String,
}

impl Record {
    /// Start building a record with every field empty
    pub fn builder() -> RecordBuilder {
        RecordBuilder::new()
    }

    /// Build a record from a raw dataset row
    ///
    /// Missing columns become empty values and unknown columns are ignored.
    /// Construction never fails.
    pub fn from_raw(row: &RawRow) -> Self {
        let field = |name: &str| row.get(name).cloned();

        RecordBuilder::new()
            .maybe_show_id(field(columns::SHOW_ID))
            .maybe_kind(field(columns::TYPE))
            .maybe_title(field(columns::TITLE))
            .maybe_director(field(columns::DIRECTOR))
            .maybe_cast(field(columns::CAST))
            .maybe_country(field(columns::COUNTRY))
            .maybe_date_added(field(columns::DATE_ADDED))
            .maybe_release_year(field(columns::RELEASE_YEAR))
            .maybe_rating(field(columns::RATING))
            .maybe_duration(field(columns::DURATION))
            .maybe_listed_in(field(columns::LISTED_IN))
            .maybe_description(field(columns::DESCRIPTION))
            .build()
    }

    /// Recognised title type, if the raw `type` text is an exact match
    pub fn title_type(&self) -> Option<TitleType> {
        TitleType::from_literal(&self.kind)
    }

    /// Check whether the director is also listed in the cast
    pub fn director_in_cast(&self) -> bool {
        !self.director.is_empty() && self.cast.iter().any(|actor| actor == &self.director)
    }
}

/// Split a raw cast field into actor names
///
/// An empty field yields no actors; otherwise the field is split on ", "
/// without further trimming.
pub fn split_cast(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        Vec::new()
    } else {
        raw.split(constants::CAST_SEPARATOR)
            .map(str::to_string)
            .collect()
    }
}

// =============================================================================
// Record Builder
// =============================================================================

/// Builder for [`Record`] with one optional setter per field
///
/// Fields that are never set default to the empty string (or an empty cast).
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    show_id: Option<String>,
    kind: Option<String>,
    title: Option<String>,
    director: Option<String>,
    cast: Option<String>,
    country: Option<String>,
    date_added: Option<String>,
    release_year: Option<String>,
    rating: Option<String>,
    duration: Option<String>,
    listed_in: Option<String>,
    description: Option<String>,
}

macro_rules! builder_setters {
    ($($field:ident => $maybe:ident),* $(,)?) => {
        $(
            #[doc = concat!("Set the raw `", stringify!($field), "` value")]
            pub fn $field(mut self, value: impl Into<String>) -> Self {
                self.$field = Some(value.into());
                self
            }

            #[doc = concat!("Set the raw `", stringify!($field), "` value when present")]
            pub fn $maybe(mut self, value: Option<String>) -> Self {
                if value.is_some() {
                    self.$field = value;
                }
                self
            }
        )*
    };
}

impl RecordBuilder {
    /// Create a builder with no fields set
    pub fn new() -> Self {
        Self::default()
    }

    builder_setters! {
        show_id => maybe_show_id,
        kind => maybe_kind,
        title => maybe_title,
        director => maybe_director,
        cast => maybe_cast,
        country => maybe_country,
        date_added => maybe_date_added,
        release_year => maybe_release_year,
        rating => maybe_rating,
        duration => maybe_duration,
        listed_in => maybe_listed_in,
        description => maybe_description,
    }

    /// Set the cast from already separated actor names
    pub fn actors<I, S>(mut self, actors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = actors
            .into_iter()
            .map(|actor| actor.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(constants::CAST_SEPARATOR);
        self.cast = Some(joined);
        self
    }

    /// Finish building the record
    pub fn build(self) -> Record {
        Record {
            show_id: self.show_id.unwrap_or_default(),
            kind: self.kind.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            director: self.director.unwrap_or_default(),
            cast: split_cast(self.cast.as_deref().unwrap_or_default()),
            country: self.country.unwrap_or_default(),
            date_added: self.date_added.unwrap_or_default(),
            release_year: self.release_year.unwrap_or_default(),
            rating: self.rating.unwrap_or_default(),
            duration: self.duration.unwrap_or_default(),
            listed_in: self.listed_in.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The full in-memory dataset for one run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Column names from the dataset header, in source order
    pub columns: Vec<String>,

    /// All records, in source order
    pub records: Vec<Record>,
}

impl Catalog {
    /// Create a catalog from header columns and records
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Self { columns, records }
    }

    /// Create a catalog from raw rows, keeping the given column order
    pub fn from_raw_rows(columns: Vec<String>, rows: &[RawRow]) -> Self {
        let records = rows.iter().map(Record::from_raw).collect();
        Self { columns, records }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the catalog has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
