//! Catalog aggregators
//!
//! This module turns the full in-memory record collection into the fixed set
//! of summaries the reports and dashboard are built from. Every aggregator is
//! a pure function over `&[Record]`: none performs I/O, logs, or depends on
//! another aggregator's output, so they can run in any order.
//!
//! # Architecture
//!
//! - [`field_parsers`] - Best-effort parsing of dates and durations
//! - [`counting`] - Type totals, titles per year, top directors
//! - [`grouping`] - Titles by rating and country, directors who act
//! - [`ranking`] - Longest movies and series
//! - [`outputs`] - Result structures and percentage helpers
//! - [`summary`] - Runs every aggregator and collects diagnostics
//!
//! # Malformed data
//!
//! A record whose date or duration cannot be parsed is excluded from that one
//! aggregation and reported as a [`SkippedRecord`]; it still counts everywhere
//! else. An empty record collection produces empty lists and zero counts.
//!
//! # Example Usage
//!
//! ```rust
//! use catalog_stats::Record;
//! use catalog_stats::app::services::aggregators::{count_movies, list_longest_movies};
//!
//! let records = vec![
//!     Record::builder().kind("Movie").title("A").duration("90 min").build(),
//!     Record::builder().kind("Movie").title("B").duration("120 min").build(),
//! ];
//!
//! assert_eq!(count_movies(&records).count, 2);
//! let longest = list_longest_movies(&records, 5).into_value();
//! assert_eq!(longest[0].title, "B");
//! ```

pub mod counting;
pub mod field_parsers;
pub mod grouping;
pub mod outputs;
pub mod ranking;
pub mod summary;

#[cfg(test)]
pub mod tests;

// Re-export main types and functions for easy access
pub use counting::{count_movies, count_series, count_titles_by_year, list_columns, top_directors};
pub use field_parsers::{FieldParseError, parse_date_added, parse_movie_minutes, parse_series_seasons};
pub use grouping::{count_titles_by_country, count_titles_by_rating, directors_as_actors};
pub use outputs::{
    Aggregation, CountryGroup, DirectorActor, DirectorCount, MovieDuration, RatingGroup,
    SeriesSeasons, SkippedRecord, TypeCount, YearCount,
};
pub use ranking::{list_longest_movies, list_longest_series};
pub use summary::{AggregatorName, CatalogSummary, Diagnostic};
