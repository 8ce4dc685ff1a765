//! Command implementations for the catalog statistics CLI
//!
//! This module contains the run logic, console output and progress reporting
//! for the CLI. The analysis workflow lives in [`analyze`]; logging,
//! configuration layering and progress bars shared by it live in [`shared`].

pub mod analyze;
pub mod shared;

pub use analyze::AnalysisOutcome;

use crate::cli::args::Args;

/// Main command runner
///
/// Sets up logging, then loads the dataset, computes the summary, prints the
/// dashboard and writes the requested reports.
pub fn run(args: Args) -> anyhow::Result<AnalysisOutcome> {
    shared::setup_logging(&args)?;
    analyze::run_analysis(&args)
}
