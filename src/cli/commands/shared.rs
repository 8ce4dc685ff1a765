//! Shared components for CLI commands

use crate::cli::args::Args;
use crate::config::AnalysisConfig;
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

/// Set up structured logging
///
/// `RUST_LOG` takes precedence over the level chosen by `--verbose` and
/// `--quiet`. Logs go to stderr so they never mix with report output.
pub fn setup_logging(args: &Args) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("catalog_stats={}", log_level)));

    let result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    result.context("Failed to initialize logging")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using a layered approach (defaults -> file -> args)
pub fn load_configuration(args: &Args) -> anyhow::Result<AnalysisConfig> {
    let base = match &args.config_file {
        Some(path) => {
            info!("Using config file: {}", path.display());
            AnalysisConfig::from_file(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => {
            debug!("No config file given, using defaults");
            AnalysisConfig::default()
        }
    };

    let config = args.apply_overrides(base);
    config.validate().context("Invalid configuration")?;

    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}
