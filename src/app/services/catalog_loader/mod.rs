//! Catalog CSV loader
//!
//! This module reads a catalog export into an in-memory [`Catalog`]. It is the
//! only place that touches the dataset file; the aggregators work purely on
//! the loaded records.
//!
//! - [`loader`] - CSV reading and record construction
//! - [`stats`] - Loading statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use catalog_stats::app::services::catalog_loader::CatalogLoader;
//!
//! let data = "show_id,type,title\ns1,Movie,Dick Johnson Is Dead\n";
//! let result = CatalogLoader::new().load_reader(data.as_bytes(), "inline").unwrap();
//!
//! assert_eq!(result.catalog.records.len(), 1);
//! assert_eq!(result.stats.records_loaded, 1);
//! ```
//!
//! [`Catalog`]: crate::app::models::Catalog

pub mod loader;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use loader::CatalogLoader;
pub use stats::{LoadResult, LoadStats};
