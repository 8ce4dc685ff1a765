//! Aggregate output structures
//!
//! Each aggregator returns one of the types defined here. They are plain data
//! and derive `Serialize` so report writers can consume them directly.

use super::field_parsers::FieldParseError;
use serde::Serialize;

/// Count of titles of one type with its share of the whole catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TypeCount {
    pub count: usize,
    pub percentage: f64,
}

/// Titles added in one year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
    /// Share of all records whose `date_added` parsed
    pub percentage: f64,
}

/// Titles sharing one rating
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingGroup {
    pub rating: String,
    pub total: usize,
    pub titles: Vec<String>,
}

/// Number of titles credited to one director
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectorCount {
    pub director: String,
    pub count: usize,
}

/// Titles associated with one country
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryGroup {
    pub country: String,
    pub total: usize,
    /// Share of all country mentions, not of records
    pub percentage: f64,
    pub titles: Vec<String>,
}

/// Movie with its parsed running time in minutes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieDuration {
    pub title: String,
    pub duration: u32,
}

/// Series with its parsed season count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesSeasons {
    pub title: String,
    pub seasons: u32,
}

/// Director who also appears in the cast of their own titles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectorActor {
    pub director: String,
    pub count: usize,
    pub titles: Vec<String>,
}

/// A record excluded from one aggregation, with the reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    /// Position of the record in the input slice
    pub index: usize,
    pub title: String,
    pub reason: FieldParseError,
}

/// Aggregator result paired with the records it had to skip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregation<T> {
    pub value: T,
    pub skipped: Vec<SkippedRecord>,
}

impl<T> Aggregation<T> {
    /// Create an aggregation result
    pub fn new(value: T, skipped: Vec<SkippedRecord>) -> Self {
        Self { value, skipped }
    }

    /// Number of records excluded from this aggregation
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Discard diagnostics and keep the value
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `part` as a percentage of `whole`, rounded to two decimals
///
/// A zero `whole` yields 0.0.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        round2(part as f64 / whole as f64 * 100.0)
    }
}
