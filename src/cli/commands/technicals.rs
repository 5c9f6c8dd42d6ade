//! Technical indicators command.

use anyhow::{Context, Result};
use nova_config::AppConfig;
use nova_pipeline::run_technicals;
use tracing::info;

use crate::cli::{TechnicalsArgs, ReportFormat};

pub fn run(args: TechnicalsArgs, mut config: AppConfig, format: ReportFormat) -> Result<()> {
    if let Some(path) = args.prices_dir {
        config.paths.prices_dir = path;
    }
    if let Some(path) = args.output {
        config.paths.technicals_output = path;
    }

    info!(
        prices = %config.paths.prices_dir.display(),
        "Computing technical indicators"
    );
    let report = run_technicals(&config).context("Technical indicator run failed")?;

    match format {
        ReportFormat::Json => println!("{}", report.to_json()?),
        ReportFormat::Text => println!("{}", report.summary()),
    }
    Ok(())
}
