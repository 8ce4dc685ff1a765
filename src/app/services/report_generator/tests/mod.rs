//! Tests for report generation

pub mod generator_tests;

// Test helper functions and fixtures
use crate::app::models::{Catalog, Record};
use crate::app::services::aggregators::CatalogSummary;
use crate::config::AnalysisConfig;

/// Build a summary from a small fixed catalog
pub fn sample_summary() -> CatalogSummary {
    let records = vec![
        Record::builder()
            .kind("Movie")
            .title("Sankofa")
            .director("Haile Gerima")
            .cast("Kofi Ghanaba, Haile Gerima")
            .country("United States, Ghana")
            .date_added("September 24, 2021")
            .rating("TV-MA")
            .duration("125 min")
            .build(),
        Record::builder()
            .kind("TV Show")
            .title("Kota Factory")
            .country("India")
            .date_added("August 4, 2020")
            .rating("TV-MA")
            .duration("2 Seasons")
            .build(),
    ];
    let columns = vec!["type".to_string(), "title".to_string()];

    CatalogSummary::compute(&Catalog::new(columns, records), &AnalysisConfig::default())
}

/// Build the summary of an empty catalog
pub fn empty_summary() -> CatalogSummary {
    CatalogSummary::compute(&Catalog::default(), &AnalysisConfig::default())
}
