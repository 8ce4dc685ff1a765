//! Catalog analysis workflow
//!
//! Loads the dataset, runs every aggregator, reports diagnostics, prints the
//! console summary and dashboard, and writes the report files.

use crate::app::services::aggregators::{AggregatorName, CatalogSummary};
use crate::app::services::catalog_loader::{CatalogLoader, LoadResult, LoadStats};
use crate::app::services::dashboard::render_dashboard;
use crate::app::services::report_generator::ReportGenerator;
use crate::cli::args::Args;
use crate::cli::commands::shared::{create_progress_bar, load_configuration};
use crate::config::AnalysisConfig;
use anyhow::Context;
use colored::*;
use indicatif::HumanDuration;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Everything produced by one analysis run
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub load_stats: LoadStats,
    pub summary: CatalogSummary,
    pub report_paths: Vec<PathBuf>,
    pub elapsed: Duration,
}

/// Run the full analysis for the parsed arguments
pub fn run_analysis(args: &Args) -> anyhow::Result<AnalysisOutcome> {
    let start = Instant::now();
    let config = load_configuration(args)?;

    let LoadResult { catalog, stats } = CatalogLoader::new()
        .load_file(&args.dataset)
        .with_context(|| format!("Failed to load dataset {}", args.dataset.display()))?;

    let summary = CatalogSummary::compute(&catalog, &config);
    log_diagnostics(&summary);
    info!(
        "Computed summary for {} records ({} skipped by aggregators)",
        summary.total_records,
        summary.diagnostics.len()
    );

    if config.show_dashboard {
        println!("{}", render_dashboard(&summary, &config.dashboard));
    }

    let report_paths = write_reports(&summary, &config, args.show_progress())?;

    let outcome = AnalysisOutcome {
        load_stats: stats,
        summary,
        report_paths,
        elapsed: start.elapsed(),
    };

    if args.show_progress() {
        print_summary(&outcome);
    }

    Ok(outcome)
}

/// Log skipped records
///
/// Unit mismatches such as single-season shows are routine and go to debug;
/// other skips are warnings. Each aggregator also gets one total.
fn log_diagnostics(summary: &CatalogSummary) {
    for diagnostic in &summary.diagnostics {
        if diagnostic.is_unit_mismatch() {
            debug!("{}", diagnostic);
        } else {
            warn!("{}", diagnostic);
        }
    }

    for aggregator in AggregatorName::ALL {
        let skipped = summary.skipped_by(aggregator);
        if skipped > 0 {
            warn!("{}: skipped {} records", aggregator, skipped);
        }
    }
}

/// Write every configured report format with a progress bar
pub fn write_reports(
    summary: &CatalogSummary,
    config: &AnalysisConfig,
    show_progress: bool,
) -> anyhow::Result<Vec<PathBuf>> {
    let generator = ReportGenerator::new(&config.output_dir);
    info!(
        "Writing {} reports to {}",
        config.formats.len(),
        generator.output_dir().display()
    );

    let pb = show_progress.then(|| create_progress_bar(config.formats.len() as u64, "Writing reports"));

    let mut paths = Vec::with_capacity(config.formats.len());
    for format in &config.formats {
        if let Some(pb) = &pb {
            pb.set_message(format!("Writing {} report", format));
        }

        let path = generator
            .write(summary, *format)
            .with_context(|| format!("Failed to write {} report", format))?;
        paths.push(path);

        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message(format!("Wrote {} reports", paths.len()));
    }

    Ok(paths)
}

/// Print the human-readable run summary
fn print_summary(outcome: &AnalysisOutcome) {
    let summary = &outcome.summary;

    println!("\n{}", "Catalog Analysis Complete".bright_green().bold());
    println!("{}", "━".repeat(40));
    println!("  {}", outcome.load_stats.summary());
    println!(
        "  Movies: {} ({:.2}%) | Series: {} ({:.2}%)",
        summary.movies.count.to_string().bright_white().bold(),
        summary.movies.percentage,
        summary.series.count.to_string().bright_white().bold(),
        summary.series.percentage
    );
    println!(
        "  Ratings: {} | Countries: {} | Years: {}",
        summary.titles_by_rating.len(),
        summary.titles_by_country.len(),
        summary.titles_by_year.len()
    );
    println!("  Processing time: {}", HumanDuration(outcome.elapsed));

    if !summary.diagnostics.is_empty() {
        println!(
            "  {} {}",
            "Records skipped by aggregators:".bright_yellow(),
            summary.diagnostics.len().to_string().bright_red().bold()
        );
    }

    if !outcome.report_paths.is_empty() {
        println!("\n{}", "Reports:".bright_green().bold());
        for path in &outcome.report_paths {
            println!("  • {}", path.display());
        }
    }
    println!();
}
