//! Grouping aggregators
//!
//! Partition records by rating, by country, and by directors who act in their
//! own titles. Each group keeps its member titles in scan order.

use super::outputs::{CountryGroup, DirectorActor, RatingGroup, percentage};
use crate::app::models::Record;
use crate::constants::COUNTRY_SEPARATOR;
use indexmap::IndexMap;

/// Group titles by rating
///
/// Records with an empty rating are excluded. Groups appear in first-seen
/// order.
pub fn count_titles_by_rating(records: &[Record]) -> Vec<RatingGroup> {
    let mut groups: IndexMap<&str, RatingGroup> = IndexMap::new();

    for record in records.iter().filter(|r| !r.rating.is_empty()) {
        let group = groups
            .entry(record.rating.as_str())
            .or_insert_with(|| RatingGroup {
                rating: record.rating.clone(),
                total: 0,
                titles: Vec::new(),
            });
        group.total += 1;
        group.titles.push(record.title.clone());
    }

    groups.into_values().collect()
}

/// Group titles by country
///
/// Records whose `country` is blank are excluded. Otherwise the field is split
/// on commas and each name trimmed; a record counts once towards every name it
/// lists, including an empty name left by a stray comma ("Japan,"). Percentages are relative to the
/// total number of country mentions, so a title listing three countries adds
/// three to the denominator. Output is sorted by total, descending, with ties
/// in first-seen order.
pub fn count_titles_by_country(records: &[Record]) -> Vec<CountryGroup> {
    let mut tallies: IndexMap<&str, (usize, Vec<String>)> = IndexMap::new();

    for record in records.iter().filter(|r| !r.country.trim().is_empty()) {
        let countries = record.country.split(COUNTRY_SEPARATOR).map(str::trim);

        for country in countries {
            let (count, titles) = tallies.entry(country).or_default();
            *count += 1;
            titles.push(record.title.clone());
        }
    }

    let mentions: usize = tallies.values().map(|(count, _)| count).sum();

    let mut groups: Vec<CountryGroup> = tallies
        .into_iter()
        .map(|(country, (total, titles))| CountryGroup {
            country: country.to_string(),
            total,
            percentage: percentage(total, mentions),
            titles,
        })
        .collect();

    groups.sort_by(|a, b| b.total.cmp(&a.total));
    groups
}

/// Directors who also appear in the cast of their own titles
///
/// A record qualifies when its director is non-empty and is an exact element
/// of its cast. Directors appear in first-seen order.
pub fn directors_as_actors(records: &[Record]) -> Vec<DirectorActor> {
    let mut directors: IndexMap<&str, DirectorActor> = IndexMap::new();

    for record in records.iter().filter(|r| r.director_in_cast()) {
        let entry = directors
            .entry(record.director.as_str())
            .or_insert_with(|| DirectorActor {
                director: record.director.clone(),
                count: 0,
                titles: Vec::new(),
            });
        entry.count += 1;
        entry.titles.push(record.title.clone());
    }

    directors.into_values().collect()
}
