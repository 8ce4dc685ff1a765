//! Duration rankings for movies and series

use super::field_parsers::{FieldParseError, parse_movie_minutes, parse_series_seasons};
use super::outputs::{Aggregation, MovieDuration, SeriesSeasons, SkippedRecord};
use crate::app::models::{Record, TitleType};

/// Longest movies by running time
///
/// Only records of type "Movie" are considered. Durations that are not
/// "<N> min" are skipped and reported. Ties keep scan order.
pub fn list_longest_movies(records: &[Record], top_n: usize) -> Aggregation<Vec<MovieDuration>> {
    let (mut movies, skipped) =
        collect_parsed(records, TitleType::Movie, parse_movie_minutes, |title, duration| {
            MovieDuration { title, duration }
        });

    movies.sort_by(|a, b| b.duration.cmp(&a.duration));
    movies.truncate(top_n);
    Aggregation::new(movies, skipped)
}

/// Longest series by number of seasons
///
/// Only records of type "TV Show" whose duration reads "<N> Seasons" are
/// ranked; anything else of that type is skipped and reported. Ties keep scan
/// order.
pub fn list_longest_series(records: &[Record], top_n: usize) -> Aggregation<Vec<SeriesSeasons>> {
    let (mut series, skipped) =
        collect_parsed(records, TitleType::TvShow, parse_series_seasons, |title, seasons| {
            SeriesSeasons { title, seasons }
        });

    series.sort_by(|a, b| b.seasons.cmp(&a.seasons));
    series.truncate(top_n);
    Aggregation::new(series, skipped)
}

/// Parse the duration of every record of `title_type`, in scan order
fn collect_parsed<T>(
    records: &[Record],
    title_type: TitleType,
    parse: fn(&str) -> Result<u32, FieldParseError>,
    make: impl Fn(String, u32) -> T,
) -> (Vec<T>, Vec<SkippedRecord>) {
    let mut parsed = Vec::new();
    let mut skipped = Vec::new();

    for (index, record) in records.iter().enumerate() {
        if record.title_type() != Some(title_type) {
            continue;
        }
        match parse(&record.duration) {
            Ok(value) => parsed.push(make(record.title.clone(), value)),
            Err(reason) => skipped.push(SkippedRecord {
                index,
                title: record.title.clone(),
                reason,
            }),
        }
    }

    (parsed, skipped)
}
