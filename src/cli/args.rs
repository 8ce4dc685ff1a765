//! Command-line argument definitions for the catalog statistics tool
//!
//! Every option that maps onto [`AnalysisConfig`] is optional here so that
//! values from a config file are only overridden when a flag is given.

use crate::app::services::report_generator::ReportFormat;
use crate::config::AnalysisConfig;
use crate::constants::DATASET_ENV_VAR;
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the catalog statistics tool
///
/// Loads a streaming-catalog CSV export, computes aggregate statistics,
/// prints a terminal dashboard and writes report files.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "catalog-stats",
    version,
    about = "Compute statistics and reports for a streaming catalog CSV export",
    long_about = "Loads a catalog export of movies and TV shows, computes type totals, \
                  titles per year, rating and country breakdowns, top directors and the \
                  longest titles, then prints a terminal dashboard and writes text, CSV, \
                  JSON and Excel reports."
)]
pub struct Args {
    /// Path to the catalog CSV file
    #[arg(
        value_name = "DATASET",
        env = DATASET_ENV_VAR,
        help = "Path to the catalog CSV file"
    )]
    pub dataset: PathBuf,

    /// Root directory for report files
    ///
    /// Reports are written to <output>/<format>/catalog_report_<timestamp>.<format>.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Root directory for report files"
    )]
    pub output_dir: Option<PathBuf>,

    /// Report formats to write (comma-separated list)
    #[arg(
        short = 'f',
        long = "formats",
        value_name = "LIST",
        help = "Comma-separated report formats (txt, csv, json, xlsx)"
    )]
    pub formats: Option<FormatList>,

    /// Entries in the top directors ranking
    #[arg(long = "top-directors", value_name = "N")]
    pub top_directors: Option<usize>,

    /// Entries in the longest movies ranking
    #[arg(long = "top-movies", value_name = "N")]
    pub top_movies: Option<usize>,

    /// Entries in the longest series ranking
    #[arg(long = "top-series", value_name = "N")]
    pub top_series: Option<usize>,

    /// Path to a JSON configuration file
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Skip the terminal dashboard
    #[arg(long = "no-dashboard", help = "Do not print the terminal dashboard")]
    pub no_dashboard: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Suppress console output
    ///
    /// Only warnings and errors are logged, and neither the summary nor the
    /// dashboard is printed.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except warnings and errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Wrapper for parsing comma-separated format lists
#[derive(Debug, Clone, PartialEq)]
pub struct FormatList {
    pub formats: Vec<ReportFormat>,
}

impl FromStr for FormatList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut formats = Vec::new();
        for name in s.split(',').map(str::trim).filter(|name| !name.is_empty()) {
            let format = ReportFormat::from_str(name)?;
            if !formats.contains(&format) {
                formats.push(format);
            }
        }

        if formats.is_empty() {
            return Err("Format list cannot be empty".to_string());
        }

        Ok(FormatList { formats })
    }
}

impl Args {
    /// Get the log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should print the summary and progress bars
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Apply explicitly given flags on top of a loaded configuration
    pub fn apply_overrides(&self, mut config: AnalysisConfig) -> AnalysisConfig {
        if let Some(output_dir) = &self.output_dir {
            config = config.with_output_dir(output_dir.clone());
        }
        if let Some(list) = &self.formats {
            config = config.with_formats(list.formats.clone());
        }
        if let Some(top_n) = self.top_directors {
            config = config.with_top_directors(top_n);
        }
        if let Some(top_n) = self.top_movies {
            config = config.with_top_movies(top_n);
        }
        if let Some(top_n) = self.top_series {
            config = config.with_top_series(top_n);
        }
        if self.no_dashboard || self.quiet {
            config = config.without_dashboard();
        }
        config
    }
}
