//! Sentiment correlation command.

use anyhow::{Context, Result};
use nova_config::AppConfig;
use nova_pipeline::run_correlation;
use tracing::info;

use crate::cli::{CorrelateArgs, ReportFormat};

pub fn run(args: CorrelateArgs, mut config: AppConfig, format: ReportFormat) -> Result<()> {
    if let Some(path) = args.headlines {
        config.paths.headlines = path;
    }
    if let Some(path) = args.prices_dir {
        config.paths.prices_dir = path;
    }
    if let Some(path) = args.output {
        config.paths.sentiment_output = path;
    }

    info!(
        min_samples = config.correlation.min_samples,
        "Correlating headline sentiment with returns"
    );
    let report = run_correlation(&config).context("Sentiment correlation failed")?;

    match format {
        ReportFormat::Json => println!("{}", report.to_json()?),
        ReportFormat::Text => println!("{}", report.summary()),
    }
    Ok(())
}
