//! Counting aggregators
//!
//! Type totals, titles added per year, and the top directors ranking. Tallies
//! are kept in an [`IndexMap`] so entries come out in the order their key was
//! first seen, which is also the tie-break order for rankings.

use super::field_parsers::parse_date_added;
use super::outputs::{Aggregation, DirectorCount, SkippedRecord, TypeCount, YearCount, percentage};
use crate::app::models::{Catalog, Record, TitleType};
use chrono::Datelike;
use indexmap::IndexMap;

/// Count movies and their share of all records
pub fn count_movies(records: &[Record]) -> TypeCount {
    count_type(records, TitleType::Movie)
}

/// Count TV shows and their share of all records
pub fn count_series(records: &[Record]) -> TypeCount {
    count_type(records, TitleType::TvShow)
}

/// Count records of one exact type
///
/// Records with any other or unrecognised type are ignored. The percentage is
/// relative to the full record count.
pub fn count_type(records: &[Record], title_type: TitleType) -> TypeCount {
    let count = records
        .iter()
        .filter(|record| record.title_type() == Some(title_type))
        .count();

    TypeCount {
        count,
        percentage: percentage(count, records.len()),
    }
}

/// Count titles per year of `date_added`
///
/// Records with an empty or unparsable date are skipped and reported. The
/// percentage of each year is relative to the number of records that parsed,
/// and years appear in first-seen order.
pub fn count_titles_by_year(records: &[Record]) -> Aggregation<Vec<YearCount>> {
    let mut year_counts: IndexMap<i32, usize> = IndexMap::new();
    let mut skipped = Vec::new();

    for (index, record) in records.iter().enumerate() {
        match parse_date_added(&record.date_added) {
            Ok(date) => *year_counts.entry(date.year()).or_insert(0) += 1,
            Err(reason) => skipped.push(SkippedRecord {
                index,
                title: record.title.clone(),
                reason,
            }),
        }
    }

    let parsed_total: usize = year_counts.values().sum();
    let years = year_counts
        .into_iter()
        .map(|(year, count)| YearCount {
            year,
            count,
            percentage: percentage(count, parsed_total),
        })
        .collect();

    Aggregation::new(years, skipped)
}

/// Rank directors by number of titles
///
/// Empty directors are ignored. Ties keep the order in which directors were
/// first seen. At most `top_n` entries are returned.
pub fn top_directors(records: &[Record], top_n: usize) -> Vec<DirectorCount> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for record in records.iter().filter(|r| !r.director.is_empty()) {
        *counts.entry(record.director.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<DirectorCount> = counts
        .into_iter()
        .map(|(director, count)| DirectorCount {
            director: director.to_string(),
            count,
        })
        .collect();

    // sort_by is stable, preserving first-seen order among equal counts
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(top_n);
    ranked
}

/// Columns present in the dataset
///
/// Empty when the catalog has no records.
pub fn list_columns(catalog: &Catalog) -> Vec<String> {
    if catalog.is_empty() {
        return Vec::new();
    }
    catalog.columns.clone()
}
