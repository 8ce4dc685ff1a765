//! Loading statistics and result structures for catalog CSV files

use crate::app::models::Catalog;
use serde::Serialize;

/// Loading result with the catalog and basic statistics
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Header columns and records read from the source
    pub catalog: Catalog,

    /// Basic loading statistics
    pub stats: LoadStats,
}

/// Simple loading statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadStats {
    /// Total number of data rows encountered
    pub total_rows: usize,

    /// Number of rows turned into records
    pub records_loaded: usize,

    /// Number of rows the CSV reader could not decode
    pub records_skipped: usize,

    /// List of row errors for debugging
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a row that could not be decoded
    pub fn add_error(&mut self, message: String) {
        self.records_skipped += 1;
        self.errors.push(message);
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            100.0
        } else {
            (self.records_loaded as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "Loaded {} of {} rows ({:.1}% success) | Skipped: {}",
            self.records_loaded,
            self.total_rows,
            self.success_rate(),
            self.records_skipped
        )
    }
}
