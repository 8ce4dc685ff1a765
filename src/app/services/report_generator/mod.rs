//! Report generation for catalog summaries
//!
//! Writes a [`CatalogSummary`] in any of four formats. Each format module
//! exposes `generate(summary, writer)` over any [`Write`] target, and
//! [`ReportGenerator`] places the results on disk as
//! `<output>/<ext>/catalog_report_<timestamp>.<ext>`.
//!
//! - [`text`] - Aligned plain-text tables
//! - [`csv_report`] - Section blocks in a single CSV file
//! - [`json`] - The full summary as pretty-printed JSON
//! - [`excel`] - One worksheet per section
//! - [`sections`] - Shared tabular layout used by text, CSV and Excel

pub mod csv_report;
pub mod excel;
pub mod json;
pub mod sections;
pub mod text;

#[cfg(test)]
pub mod tests;

use crate::app::services::aggregators::CatalogSummary;
use crate::constants::{REPORT_FILE_PREFIX, REPORT_TIMESTAMP_FORMAT};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

pub use sections::{Cell, ReportSection, build_sections};

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Txt,
    Csv,
    Json,
    Xlsx,
}

impl ReportFormat {
    /// Every format, in the order reports are written
    pub fn all() -> &'static [ReportFormat] {
        &[
            ReportFormat::Txt,
            ReportFormat::Csv,
            ReportFormat::Json,
            ReportFormat::Xlsx,
        ]
    }

    /// File extension, also used as the sub-directory name
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Txt => "txt",
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
            ReportFormat::Xlsx => "xlsx",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "txt" | "text" => Ok(ReportFormat::Txt),
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            "xlsx" | "excel" => Ok(ReportFormat::Xlsx),
            other => Err(format!(
                "Unknown report format '{}'. Valid formats: txt, csv, json, xlsx",
                other
            )),
        }
    }
}

/// Write a summary in one format to any writer
pub fn write_report<W: Write>(
    format: ReportFormat,
    summary: &CatalogSummary,
    writer: &mut W,
) -> Result<()> {
    match format {
        ReportFormat::Txt => text::generate(summary, writer),
        ReportFormat::Csv => csv_report::generate(summary, writer),
        ReportFormat::Json => json::generate(summary, writer),
        ReportFormat::Xlsx => excel::generate(summary, writer),
    }
}

/// Writes report files for one run
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    output_dir: PathBuf,
    timestamp: String,
}

impl ReportGenerator {
    /// Create a generator stamped with the current local time
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        let timestamp = chrono::Local::now()
            .format(REPORT_TIMESTAMP_FORMAT)
            .to_string();
        Self::with_timestamp(output_dir, timestamp)
    }

    /// Create a generator with a fixed timestamp
    pub fn with_timestamp(output_dir: impl Into<PathBuf>, timestamp: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Root directory reports are written under
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Destination path for one format
    pub fn report_path(&self, format: ReportFormat) -> PathBuf {
        self.output_dir.join(format.extension()).join(format!(
            "{}_{}.{}",
            REPORT_FILE_PREFIX,
            self.timestamp,
            format.extension()
        ))
    }

    /// Write one report file and return its path
    pub fn write(&self, summary: &CatalogSummary, format: ReportFormat) -> Result<PathBuf> {
        let path = self.report_path(format);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::io(format!("Failed to create directory {}", parent.display()), e)
            })?;
        }

        let file = File::create(&path)
            .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;
        let mut writer = BufWriter::new(file);
        write_report(format, summary, &mut writer)?;
        writer
            .flush()
            .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;

        info!("Report saved to: {}", path.display());
        Ok(path)
    }

    /// Write every requested format, returning the paths in the same order
    pub fn generate(
        &self,
        summary: &CatalogSummary,
        formats: &[ReportFormat],
    ) -> Result<Vec<PathBuf>> {
        debug!("Generating {} reports in {}", formats.len(), self.output_dir.display());
        formats
            .iter()
            .map(|format| self.write(summary, *format))
            .collect()
    }
}
