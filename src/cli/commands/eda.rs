//! Exploratory analysis command.

use anyhow::{Context, Result};
use nova_config::AppConfig;
use nova_pipeline::run_eda;
use tracing::info;

use crate::cli::{EdaArgs, ReportFormat};

pub fn run(args: EdaArgs, mut config: AppConfig, format: ReportFormat) -> Result<()> {
    if let Some(path) = args.headlines {
        config.paths.headlines = path;
    }
    if let Some(path) = args.output {
        config.paths.eda_output = path;
    }

    info!(output = %config.paths.eda_output.display(), "Starting exploratory analysis");
    let report = run_eda(&config).context("Exploratory analysis failed")?;

    match format {
        ReportFormat::Json => println!("{}", report.to_json()?),
        ReportFormat::Text => println!("{}", report.summary()),
    }
    Ok(())
}
