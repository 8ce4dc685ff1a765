//! Application constants for the catalog statistics tool
//!
//! This module contains the dataset column names, literal field values,
//! parse formats and default settings used throughout the application.

// =============================================================================
// Dataset Columns
// =============================================================================

/// Column names of the catalog CSV export
pub mod columns {
    pub const SHOW_ID: &str = "show_id";
    pub const TYPE: &str = "type";
    pub const TITLE: &str = "title";
    pub const DIRECTOR: &str = "director";
    pub const CAST: &str = "cast";
    pub const COUNTRY: &str = "country";
    pub const DATE_ADDED: &str = "date_added";
    pub const RELEASE_YEAR: &str = "release_year";
    pub const RATING: &str = "rating";
    pub const DURATION: &str = "duration";
    pub const LISTED_IN: &str = "listed_in";
    pub const DESCRIPTION: &str = "description";
}

// =============================================================================
// Field Values and Formats
// =============================================================================

/// Literal `type` value for movies
pub const TYPE_MOVIE: &str = "Movie";

/// Literal `type` value for series
pub const TYPE_TV_SHOW: &str = "TV Show";

/// Separator between actor names in the raw `cast` field
pub const CAST_SEPARATOR: &str = ", ";

/// Separator between country names in the raw `country` field
pub const COUNTRY_SEPARATOR: char = ',';

/// chrono format of the `date_added` field, e.g. "September 9, 2019"
pub const DATE_ADDED_FORMAT: &str = "%B %d, %Y";

/// Unit marker required in movie durations ("90 min")
pub const MOVIE_DURATION_UNIT: &str = "min";

/// Unit marker required in series durations ("3 Seasons")
pub const SERIES_DURATION_UNIT: &str = "Seasons";

// =============================================================================
// Defaults
// =============================================================================

/// Default number of entries in the top directors ranking
pub const DEFAULT_TOP_DIRECTORS: usize = 5;

/// Default number of entries in the longest movies ranking
pub const DEFAULT_TOP_MOVIES: usize = 5;

/// Default number of entries in the longest series ranking
pub const DEFAULT_TOP_SERIES: usize = 5;

/// Default directory for generated reports
pub const DEFAULT_OUTPUT_DIR: &str = "./data/processed";

/// Prefix of generated report file names
pub const REPORT_FILE_PREFIX: &str = "catalog_report";

/// Timestamp format used in report file names
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Default width of dashboard bars in characters
pub const DEFAULT_BAR_WIDTH: usize = 40;

/// Default number of countries shown on the dashboard
pub const DEFAULT_DASHBOARD_COUNTRY_LIMIT: usize = 10;

/// Environment variable holding the dataset path
pub const DATASET_ENV_VAR: &str = "CATALOG_DATASET";
