//! Field parsing utilities for catalog records
//!
//! Records keep dates and durations as raw text. The parsers in this module
//! convert them on demand and return an explicit [`FieldParseError`] instead of
//! failing the aggregation, so each aggregator can skip the offending record
//! and report why.

use crate::constants::{
    DATE_ADDED_FORMAT, MOVIE_DURATION_UNIT, SERIES_DURATION_UNIT, columns,
};
use chrono::NaiveDate;
use serde::Serialize;

/// Reason a single record field could not be parsed
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldParseError {
    /// Field has no value
    #[error("empty {field}")]
    Empty { field: &'static str },

    /// Date text does not match "Month DD, YYYY"
    #[error("invalid date '{value}': {message}")]
    InvalidDate { value: String, message: String },

    /// Duration text lacks the expected unit marker
    #[error("duration '{value}' does not contain '{unit}'")]
    MissingUnit { value: String, unit: &'static str },

    /// Leading duration token is not a whole number
    #[error("duration '{value}' does not start with a whole number")]
    InvalidNumber { value: String },
}

/// Full English month names accepted at the start of a `date_added` value
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Parse a `date_added` value such as "September 9, 2019"
///
/// The value is parsed exactly as stored. Surrounding whitespace and
/// abbreviated month names ("Sep 25, 2021") are rejected as
/// [`FieldParseError::InvalidDate`]; only a truly empty value is
/// [`FieldParseError::Empty`].
pub fn parse_date_added(value: &str) -> Result<NaiveDate, FieldParseError> {
    if value.is_empty() {
        return Err(FieldParseError::Empty {
            field: columns::DATE_ADDED,
        });
    }

    let invalid = |message: String| FieldParseError::InvalidDate {
        value: value.to_string(),
        message,
    };

    if value.trim() != value {
        return Err(invalid("unexpected surrounding whitespace".to_string()));
    }

    let month = value.split(' ').next().unwrap_or_default();
    if !MONTH_NAMES.iter().any(|name| name.eq_ignore_ascii_case(month)) {
        return Err(invalid(format!("'{}' is not a full month name", month)));
    }

    NaiveDate::parse_from_str(value, DATE_ADDED_FORMAT).map_err(|e| invalid(e.to_string()))
}

/// Parse a movie duration such as "90 min" into minutes
pub fn parse_movie_minutes(value: &str) -> Result<u32, FieldParseError> {
    parse_leading_count(value, MOVIE_DURATION_UNIT)
}

/// Parse a series duration such as "3 Seasons" into a season count
///
/// Only the plural unit is accepted, so single-season shows ("1 Season") are
/// rejected with [`FieldParseError::MissingUnit`].
pub fn parse_series_seasons(value: &str) -> Result<u32, FieldParseError> {
    parse_leading_count(value, SERIES_DURATION_UNIT)
}

/// Require `unit` somewhere in `value`, then parse its first token as a count
fn parse_leading_count(value: &str, unit: &'static str) -> Result<u32, FieldParseError> {
    if value.trim().is_empty() {
        return Err(FieldParseError::Empty {
            field: columns::DURATION,
        });
    }

    if !value.contains(unit) {
        return Err(FieldParseError::MissingUnit {
            value: value.to_string(),
            unit,
        });
    }

    value
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<u32>().ok())
        .ok_or_else(|| FieldParseError::InvalidNumber {
            value: value.to_string(),
        })
}
