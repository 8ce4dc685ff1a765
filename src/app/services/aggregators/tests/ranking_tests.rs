//! Tests for duration rankings

use super::*;
use crate::app::models::Record;
use crate::app::services::aggregators::field_parsers::FieldParseError;
use crate::app::services::aggregators::outputs::{MovieDuration, SeriesSeasons};
use crate::app::services::aggregators::ranking::{list_longest_movies, list_longest_series};

#[test]
fn test_list_longest_movies_basic() {
    let records = vec![movie("A", "90 min"), movie("B", "120 min")];

    let result = list_longest_movies(&records, 5);

    assert_eq!(
        result.value,
        vec![
            MovieDuration {
                title: "B".to_string(),
                duration: 120
            },
            MovieDuration {
                title: "A".to_string(),
                duration: 90
            },
        ]
    );
    assert!(result.skipped.is_empty());
}

#[test]
fn test_list_longest_movies_ties_keep_scan_order() {
    let records = vec![
        movie("First", "100 min"),
        movie("Long", "200 min"),
        movie("Second", "100 min"),
        movie("Third", "100 min"),
    ];

    let titles: Vec<String> = list_longest_movies(&records, 3)
        .into_value()
        .into_iter()
        .map(|m| m.title)
        .collect();

    assert_eq!(titles, vec!["Long", "First", "Second"]);
}

#[test]
fn test_list_longest_movies_skips_malformed() {
    let records = vec![
        movie("Good", "95 min"),
        movie("Words", "ninety min"),
        movie("Seasons", "2 Seasons"),
        movie("Blank", ""),
        series("Show", "3 Seasons"),
        Record::builder().kind("Documentary").title("Doc").duration("500 min").build(),
    ];

    let result = list_longest_movies(&records, 5);

    assert_eq!(result.value.len(), 1);
    assert_eq!(result.value[0].title, "Good");

    // Non-movies are filtered, not reported
    let skipped: Vec<(usize, &str)> = result
        .skipped
        .iter()
        .map(|s| (s.index, s.title.as_str()))
        .collect();
    assert_eq!(skipped, vec![(1, "Words"), (2, "Seasons"), (3, "Blank")]);
    assert!(matches!(
        result.skipped[0].reason,
        FieldParseError::InvalidNumber { .. }
    ));
    assert!(matches!(
        result.skipped[1].reason,
        FieldParseError::MissingUnit { .. }
    ));
}

#[test]
fn test_list_longest_movies_truncates() {
    let records: Vec<Record> = (1..=8)
        .map(|i| movie(&format!("M{}", i), &format!("{} min", i * 10)))
        .collect();

    let result = list_longest_movies(&records, 5).into_value();
    assert_eq!(result.len(), 5);
    assert_eq!(result[0].duration, 80);
    assert_eq!(result[4].duration, 40);

    assert!(list_longest_movies(&records, 0).value.is_empty());
    assert!(list_longest_movies(&[], 5).value.is_empty());
}

#[test]
fn test_list_longest_series() {
    let records = sample_records();

    let result = list_longest_series(&records, 5);

    assert_eq!(
        result.value,
        vec![
            SeriesSeasons {
                title: "Kota Factory".to_string(),
                seasons: 3
            },
            SeriesSeasons {
                title: "Blood & Water".to_string(),
                seasons: 2
            },
        ]
    );

    // "1 Season" lacks the plural unit
    assert_eq!(result.skipped.len(), 1);
    assert_eq!(result.skipped[0].title, "Ganglands");
    assert_eq!(result.skipped[0].index, 2);
}

#[test]
fn test_list_longest_series_ties_and_filtering() {
    let records = vec![
        series("A", "4 Seasons"),
        movie("Movie", "9 Seasons"),
        series("B", "4 Seasons"),
        series("C", "lots of Seasons"),
        series("D", "5 Seasons"),
    ];

    let result = list_longest_series(&records, 2);

    let titles: Vec<&str> = result.value.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["D", "A"]);
    assert_eq!(result.skipped_count(), 1);
    assert_eq!(result.skipped[0].title, "C");
}
