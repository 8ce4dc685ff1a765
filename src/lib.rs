//! Catalog Statistics Library
//!
//! A Rust library for turning a streaming-catalog CSV export (movies and TV
//! shows with director, cast, country, rating, duration and date added) into a
//! fixed set of aggregate statistics, terminal charts and report files.
//!
//! This library provides tools for:
//! - Loading catalog CSV files into immutable [`Record`]s
//! - Best-effort parsing of dates and durations with per-record diagnostics
//! - Counting, ranking and grouping aggregators over the full record set
//! - Rendering the aggregates as terminal bar charts
//! - Exporting the aggregates as text, CSV, JSON and Excel reports

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregators;
        pub mod catalog_loader;
        pub mod dashboard;
        pub mod report_generator;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Catalog, Record, RecordBuilder, TitleType};
pub use app::services::aggregators::CatalogSummary;
pub use config::AnalysisConfig;

/// Result type alias for catalog processing
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for catalog loading, configuration and report output
///
/// Data-quality problems inside individual records are never reported through
/// this type; aggregators exclude such records and return diagnostics instead.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Dataset file does not exist
    #[error("Dataset not found: {path}")]
    DatasetNotFound { path: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Excel workbook could not be built
    #[error("Report writing error: {message}")]
    ReportWriting {
        message: String,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    /// JSON serialization or deserialization failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a dataset not found error
    pub fn dataset_not_found(path: impl Into<String>) -> Self {
        Self::DatasetNotFound { path: path.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a report writing error
    pub fn report_writing(message: impl Into<String>, source: rust_xlsxwriter::XlsxError) -> Self {
        Self::ReportWriting {
            message: message.into(),
            source,
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for Error {
    fn from(error: rust_xlsxwriter::XlsxError) -> Self {
        Self::ReportWriting {
            message: "Excel workbook generation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
