//! CSV loading for catalog exports
//!
//! Reads the header row for field names, zips each data row into a
//! [`RawRow`], and builds a [`Record`] from it. Rows the CSV reader cannot
//! decode are counted and skipped; only a missing or unreadable file is an
//! error.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use super::stats::{LoadResult, LoadStats};
use crate::app::models::{Catalog, RawRow, Record};
use crate::{Error, Result};

const UTF8_BOM: char = '\u{feff}';

/// Loader for catalog CSV files
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogLoader;

impl CatalogLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self
    }

    /// Load a catalog CSV file
    pub fn load_file(&self, file_path: &Path) -> Result<LoadResult> {
        info!("Loading catalog file: {}", file_path.display());

        if !file_path.exists() {
            return Err(Error::dataset_not_found(file_path.display().to_string()));
        }

        let file = File::open(file_path).map_err(|e| {
            Error::io(format!("Failed to open {}", file_path.display()), e)
        })?;

        self.load_reader(file, &file_path.display().to_string())
    }

    /// Load catalog CSV data from any reader
    ///
    /// `source_name` is only used in error messages.
    pub fn load_reader<R: Read>(&self, reader: R, source_name: &str) -> Result<LoadResult> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns: Vec<String> = csv_reader
            .headers()
            .map_err(|e| Error::csv_parsing(source_name, "Failed to read CSV headers", Some(e)))?
            .iter()
            .enumerate()
            .map(|(i, name)| {
                if i == 0 {
                    name.trim_start_matches(UTF8_BOM).to_string()
                } else {
                    name.to_string()
                }
            })
            .collect();
        debug!("Dataset columns: {:?}", columns);

        let mut stats = LoadStats::new();
        let mut records = Vec::new();

        for result in csv_reader.records() {
            stats.total_rows += 1;

            match result {
                Ok(row) => {
                    let raw: RawRow = columns
                        .iter()
                        .cloned()
                        .zip(row.iter().map(str::to_string))
                        .collect();
                    records.push(Record::from_raw(&raw));
                    stats.records_loaded += 1;
                }
                Err(e) => {
                    let message = format!("CSV parse error at row {}: {}", stats.total_rows, e);
                    debug!("{}", message);
                    stats.add_error(message);
                }
            }
        }

        if stats.records_skipped > 0 {
            warn!(
                "Skipped {} unreadable rows in {}",
                stats.records_skipped, source_name
            );
        }
        info!("{}", stats.summary());

        Ok(LoadResult {
            catalog: Catalog::new(columns, records),
            stats,
        })
    }
}
