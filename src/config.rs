//! Configuration management and validation.
//!
//! Provides the analysis settings (ranking sizes, report output, dashboard
//! layout) with defaults, builder-style overrides, optional loading from a
//! JSON file, and validation.

use crate::app::services::report_generator::ReportFormat;
use crate::constants::{
    DEFAULT_BAR_WIDTH, DEFAULT_DASHBOARD_COUNTRY_LIMIT, DEFAULT_OUTPUT_DIR, DEFAULT_TOP_DIRECTORS,
    DEFAULT_TOP_MOVIES, DEFAULT_TOP_SERIES,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Terminal dashboard layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Width of the longest bar in characters
    pub bar_width: usize,

    /// Number of countries shown on the countries chart
    pub country_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bar_width: DEFAULT_BAR_WIDTH,
            country_limit: DEFAULT_DASHBOARD_COUNTRY_LIMIT,
        }
    }
}

/// Global configuration for one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Entries in the top directors ranking
    pub top_directors: usize,

    /// Entries in the longest movies ranking
    pub top_movies: usize,

    /// Entries in the longest series ranking
    pub top_series: usize,

    /// Root directory for report files
    pub output_dir: PathBuf,

    /// Report formats to write
    pub formats: Vec<ReportFormat>,

    /// Print the terminal dashboard after analysis
    pub show_dashboard: bool,

    /// Dashboard layout
    pub dashboard: DashboardConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_directors: DEFAULT_TOP_DIRECTORS,
            top_movies: DEFAULT_TOP_MOVIES,
            top_series: DEFAULT_TOP_SERIES,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            formats: ReportFormat::all().to_vec(),
            show_dashboard: true,
            dashboard: DashboardConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from a JSON file
    ///
    /// Keys missing from the file keep their default values.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;

        let config: Self = serde_json::from_str(&contents).map_err(|e| {
            Error::serialization(format!("Invalid config file {}", path.display()), e)
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Set the number of top directors
    pub fn with_top_directors(mut self, top_n: usize) -> Self {
        self.top_directors = top_n;
        self
    }

    /// Set the number of longest movies
    pub fn with_top_movies(mut self, top_n: usize) -> Self {
        self.top_movies = top_n;
        self
    }

    /// Set the number of longest series
    pub fn with_top_series(mut self, top_n: usize) -> Self {
        self.top_series = top_n;
        self
    }

    /// Set the report output directory
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Set the report formats
    pub fn with_formats(mut self, formats: Vec<ReportFormat>) -> Self {
        self.formats = formats;
        self
    }

    /// Disable the terminal dashboard
    pub fn without_dashboard(mut self) -> Self {
        self.show_dashboard = false;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.formats.is_empty() {
            return Err(Error::configuration(
                "At least one report format must be selected",
            ));
        }

        if self.dashboard.bar_width == 0 {
            return Err(Error::configuration("Dashboard bar width must be at least 1"));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(Error::configuration("Output directory must not be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();

        assert_eq!(config.top_directors, 5);
        assert_eq!(config.top_movies, 5);
        assert_eq!(config.top_series, 5);
        assert_eq!(config.output_dir, PathBuf::from("./data/processed"));
        assert_eq!(config.formats.len(), 4);
        assert!(config.show_dashboard);
        assert_eq!(config.dashboard.country_limit, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = AnalysisConfig::default()
            .with_top_directors(10)
            .with_top_movies(3)
            .with_top_series(1)
            .with_output_dir("/tmp/reports")
            .with_formats(vec![ReportFormat::Json])
            .without_dashboard();

        assert_eq!(config.top_directors, 10);
        assert_eq!(config.top_movies, 3);
        assert_eq!(config.top_series, 1);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/reports"));
        assert_eq!(config.formats, vec![ReportFormat::Json]);
        assert!(!config.show_dashboard);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = AnalysisConfig::default().with_formats(Vec::new());
        assert!(matches!(
            config.validate(),
            Err(Error::Configuration { .. })
        ));

        let mut config = AnalysisConfig::default();
        config.dashboard.bar_width = 0;
        assert!(config.validate().is_err());

        let config = AnalysisConfig::default().with_output_dir("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_top_n_is_valid() {
        let config = AnalysisConfig::default().with_top_directors(0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_partial_overrides() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"top_directors": 7, "formats": ["txt", "csv"], "dashboard": {{"bar_width": 20}}}}"#
        )
        .unwrap();

        let config = AnalysisConfig::from_file(file.path()).unwrap();

        assert_eq!(config.top_directors, 7);
        assert_eq!(config.top_movies, 5);
        assert_eq!(config.formats, vec![ReportFormat::Txt, ReportFormat::Csv]);
        assert_eq!(config.dashboard.bar_width, 20);
        assert_eq!(config.dashboard.country_limit, 10);
    }

    #[test]
    fn test_from_file_errors() {
        let missing = AnalysisConfig::from_file(Path::new("/nonexistent/config.json"));
        assert!(matches!(missing, Err(Error::Io { .. })));

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let invalid = AnalysisConfig::from_file(file.path());
        assert!(matches!(invalid, Err(Error::Serialization { .. })));
    }
}
