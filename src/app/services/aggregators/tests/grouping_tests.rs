//! Tests for grouping aggregators

use super::*;
use crate::app::models::Record;
use crate::app::services::aggregators::grouping::{
    count_titles_by_country, count_titles_by_rating, directors_as_actors,
};

#[test]
fn test_count_titles_by_rating() {
    let records = sample_records();
    let groups = count_titles_by_rating(&records);

    assert_eq!(groups.len(), 2);

    assert_eq!(groups[0].rating, "PG-13");
    assert_eq!(groups[0].total, 2);
    assert_eq!(groups[0].titles, vec!["Dick Johnson Is Dead", "The Starling"]);

    assert_eq!(groups[1].rating, "TV-MA");
    assert_eq!(groups[1].total, 3);
    assert_eq!(groups[1].titles, vec!["Blood & Water", "Ganglands", "Sankofa"]);
}

#[test]
fn test_count_titles_by_rating_excludes_empty() {
    let records = vec![
        Record::builder().title("A").rating("").build(),
        Record::builder().title("B").build(),
    ];
    assert!(count_titles_by_rating(&records).is_empty());
    assert!(count_titles_by_rating(&[]).is_empty());
}

#[test]
fn test_count_titles_by_country() {
    let records = sample_records();
    let groups = count_titles_by_country(&records);

    let countries: Vec<&str> = groups.iter().map(|g| g.country.as_str()).collect();
    assert_eq!(
        countries,
        vec![
            "United States",
            "South Africa",
            "Ghana",
            "Burkina Faso",
            "United Kingdom",
            "Germany",
            "Ethiopia",
            "India",
        ]
    );

    let us = &groups[0];
    assert_eq!(us.total, 3);
    // Ten country mentions across the catalog
    assert_eq!(us.percentage, 30.0);
    assert_eq!(
        us.titles,
        vec!["Dick Johnson Is Dead", "Sankofa", "The Starling"]
    );

    assert_eq!(groups[1].total, 1);
    assert_eq!(groups[1].percentage, 10.0);
}

#[test]
fn test_count_titles_by_country_denominator_counts_mentions() {
    let records = vec![
        from_countries("A", "France, Belgium, Canada"),
        from_countries("B", "France"),
    ];

    let groups = count_titles_by_country(&records);

    assert_eq!(groups[0].country, "France");
    assert_eq!(groups[0].total, 2);
    assert_eq!(groups[0].percentage, 50.0);
    assert_eq!(groups[1].percentage, 25.0);
    assert_eq!(groups[2].percentage, 25.0);
}

#[test]
fn test_count_titles_by_country_trims_names() {
    let records = vec![
        from_countries("A", "  Japan ,Korea  "),
        from_countries("B", "   "),
        from_countries("C", ""),
        from_countries("D", "Korea"),
    ];

    let groups = count_titles_by_country(&records);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].country, "Korea");
    assert_eq!(groups[0].titles, vec!["A", "D"]);
    assert_eq!(groups[1].country, "Japan");
}

#[test]
fn test_count_titles_by_country_counts_empty_segment() {
    let records = vec![from_countries("A", "Japan,"), from_countries("B", "Japan")];

    let groups = count_titles_by_country(&records);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].country, "Japan");
    assert_eq!(groups[0].total, 2);
    assert_eq!(groups[0].percentage, 66.67);
    assert_eq!(groups[1].country, "");
    assert_eq!(groups[1].total, 1);
    assert_eq!(groups[1].percentage, 33.33);
    assert_eq!(groups[1].titles, vec!["A"]);
}

#[test]
fn test_count_titles_by_country_percentages_sum_to_100() {
    let records = vec![
        from_countries("A", "Spain, Mexico"),
        from_countries("B", "Spain"),
        from_countries("C", "Argentina"),
        from_countries("D", "Chile, Peru, Mexico"),
        from_countries("E", "Spain"),
    ];

    let total: f64 = count_titles_by_country(&records)
        .iter()
        .map(|g| g.percentage)
        .sum();
    assert!((total - 100.0).abs() < 0.1, "sum was {}", total);
}

#[test]
fn test_count_titles_by_country_stable_sort() {
    let records = vec![
        from_countries("A", "Brazil"),
        from_countries("B", "Chile"),
        from_countries("C", "Peru"),
        from_countries("D", "Peru"),
    ];

    let countries: Vec<String> = count_titles_by_country(&records)
        .into_iter()
        .map(|g| g.country)
        .collect();
    assert_eq!(countries, vec!["Peru", "Brazil", "Chile"]);
    assert!(count_titles_by_country(&[]).is_empty());
}

#[test]
fn test_directors_as_actors() {
    let records = vec![
        Record::builder().title("T1").director("X").cast("X, Y").build(),
        Record::builder().title("T2").director("X").cast("Y").build(),
        Record::builder().title("T3").director("Z").cast("Q, Z").build(),
        Record::builder().title("T4").director("X").cast("W, X").build(),
        Record::builder().title("T5").director("").cast("").build(),
    ];

    let result = directors_as_actors(&records);

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].director, "X");
    assert_eq!(result[0].count, 2);
    assert_eq!(result[0].titles, vec!["T1", "T4"]);
    assert_eq!(result[1].director, "Z");
    assert_eq!(result[1].count, 1);
}

#[test]
fn test_directors_as_actors_requires_exact_match() {
    let records = vec![
        Record::builder().title("A").director("Ann Lee").cast("Ann Lee Jr.").build(),
        Record::builder().title("B").director("Bob").cast("bob").build(),
    ];
    assert!(directors_as_actors(&records).is_empty());

    let records = sample_records();
    let result = directors_as_actors(&records);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].director, "Haile Gerima");
    assert_eq!(result[0].titles, vec!["Sankofa"]);
}
