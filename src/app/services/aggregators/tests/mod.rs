//! Tests for the catalog aggregators
//!
//! Unit tests for each aggregator family plus the whole-catalog summary.

pub mod grouping_tests;
pub mod ranking_tests;

// Test helper functions and fixtures
use crate::app::models::Record;

/// Create a movie record with a title and duration
pub fn movie(title: &str, duration: &str) -> Record {
    Record::builder()
        .kind("Movie")
        .title(title)
        .duration(duration)
        .build()
}

/// Create a TV show record with a title and duration
pub fn series(title: &str, duration: &str) -> Record {
    Record::builder()
        .kind("TV Show")
        .title(title)
        .duration(duration)
        .build()
}

/// Create a record with only a title and date added
pub fn added_on(title: &str, date_added: &str) -> Record {
    Record::builder()
        .kind("Movie")
        .title(title)
        .date_added(date_added)
        .build()
}

/// Create a record with a title and director
pub fn directed_by(title: &str, director: &str) -> Record {
    Record::builder().title(title).director(director).build()
}

/// Create a record with a title and raw country list
pub fn from_countries(title: &str, country: &str) -> Record {
    Record::builder().title(title).country(country).build()
}

/// Create a small catalog resembling the real export
pub fn sample_records() -> Vec<Record> {
    vec![
        Record::builder()
            .show_id("s1")
            .kind("Movie")
            .title("Dick Johnson Is Dead")
            .director("Kirsten Johnson")
            .country("United States")
            .date_added("September 25, 2021")
            .rating("PG-13")
            .duration("90 min")
            .build(),
        Record::builder()
            .show_id("s2")
            .kind("TV Show")
            .title("Blood & Water")
            .cast("Ama Qamata, Khosi Ngema, Gail Mabalane")
            .country("South Africa")
            .date_added("September 24, 2021")
            .rating("TV-MA")
            .duration("2 Seasons")
            .build(),
        Record::builder()
            .show_id("s3")
            .kind("TV Show")
            .title("Ganglands")
            .director("Julien Leclercq")
            .cast("Sami Bouajila, Tracy Gotoas")
            .date_added("September 24, 2021")
            .rating("TV-MA")
            .duration("1 Season")
            .build(),
        Record::builder()
            .show_id("s4")
            .kind("Movie")
            .title("Sankofa")
            .director("Haile Gerima")
            .cast("Kofi Ghanaba, Oyafunmike Ogunlano, Haile Gerima")
            .country("United States, Ghana, Burkina Faso, United Kingdom, Germany, Ethiopia")
            .date_added("September 24, 2021")
            .rating("TV-MA")
            .duration("125 min")
            .build(),
        Record::builder()
            .show_id("s5")
            .kind("Movie")
            .title("The Starling")
            .director("Theodore Melfi")
            .cast("Melissa McCarthy, Chris O'Dowd")
            .country("United States")
            .date_added("")
            .rating("PG-13")
            .duration("104 min")
            .build(),
        Record::builder()
            .show_id("s6")
            .kind("TV Show")
            .title("Kota Factory")
            .country("India")
            .date_added("August 4, 2020")
            .rating("")
            .duration("3 Seasons")
            .build(),
    ]
}
