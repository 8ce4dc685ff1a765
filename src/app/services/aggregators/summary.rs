//! Whole-catalog summary
//!
//! Runs every aggregator once over the same record slice and gathers their
//! outputs together with the skipped-record diagnostics. Logging those
//! diagnostics is left to the caller.

use super::counting::{count_movies, count_series, count_titles_by_year, list_columns, top_directors};
use super::field_parsers::FieldParseError;
use super::grouping::{count_titles_by_country, count_titles_by_rating, directors_as_actors};
use super::outputs::{
    CountryGroup, DirectorActor, DirectorCount, MovieDuration, RatingGroup, SeriesSeasons,
    SkippedRecord, TypeCount, YearCount,
};
use super::ranking::{list_longest_movies, list_longest_series};
use crate::app::models::Catalog;
use crate::config::AnalysisConfig;
use serde::Serialize;
use std::fmt;

/// Aggregators that can skip records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregatorName {
    TitlesByYear,
    LongestMovies,
    LongestSeries,
}

impl AggregatorName {
    /// Every aggregator that can skip records, in summary order
    pub const ALL: [AggregatorName; 3] = [
        AggregatorName::TitlesByYear,
        AggregatorName::LongestMovies,
        AggregatorName::LongestSeries,
    ];
}

impl fmt::Display for AggregatorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AggregatorName::TitlesByYear => "titles by year",
            AggregatorName::LongestMovies => "longest movies",
            AggregatorName::LongestSeries => "longest series",
        };
        f.write_str(name)
    }
}

/// A record one aggregator excluded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub aggregator: AggregatorName,
    pub record: SkippedRecord,
}

impl Diagnostic {
    /// Duration is in another unit, e.g. a single-season show ("1 Season")
    pub fn is_unit_mismatch(&self) -> bool {
        matches!(self.record.reason, FieldParseError::MissingUnit { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: skipped record {} ('{}'): {}",
            self.aggregator, self.record.index, self.record.title, self.record.reason
        )
    }
}

/// Every aggregate computed for one catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogSummary {
    pub total_records: usize,
    pub columns: Vec<String>,
    pub movies: TypeCount,
    pub series: TypeCount,
    pub top_directors: Vec<DirectorCount>,
    pub directors_as_actors: Vec<DirectorActor>,
    pub titles_by_year: Vec<YearCount>,
    pub titles_by_rating: Vec<RatingGroup>,
    pub longest_movies: Vec<MovieDuration>,
    pub longest_series: Vec<SeriesSeasons>,
    pub titles_by_country: Vec<CountryGroup>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CatalogSummary {
    /// Run all aggregators over the catalog
    pub fn compute(catalog: &Catalog, config: &AnalysisConfig) -> Self {
        let records = catalog.records.as_slice();
        let mut diagnostics = Vec::new();

        let by_year = count_titles_by_year(records);
        let movies = list_longest_movies(records, config.top_movies);
        let series = list_longest_series(records, config.top_series);

        let mut collect = |aggregator: AggregatorName, skipped: Vec<SkippedRecord>| {
            diagnostics.extend(
                skipped
                    .into_iter()
                    .map(|record| Diagnostic { aggregator, record }),
            );
        };
        collect(AggregatorName::TitlesByYear, by_year.skipped);
        collect(AggregatorName::LongestMovies, movies.skipped);
        collect(AggregatorName::LongestSeries, series.skipped);

        Self {
            total_records: records.len(),
            columns: list_columns(catalog),
            movies: count_movies(records),
            series: count_series(records),
            top_directors: top_directors(records, config.top_directors),
            directors_as_actors: directors_as_actors(records),
            titles_by_year: by_year.value,
            titles_by_rating: count_titles_by_rating(records),
            longest_movies: movies.value,
            longest_series: series.value,
            titles_by_country: count_titles_by_country(records),
            diagnostics,
        }
    }

    /// Number of diagnostics raised by one aggregator
    pub fn skipped_by(&self, aggregator: AggregatorName) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.aggregator == aggregator)
            .count()
    }
}
