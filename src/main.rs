//! News and price analytics CLI application.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use nova_config::{load_config, LogFormat};
use nova_monitor::setup_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;

    // Command-line flags win over the logging section
    let log_level = cli
        .log_level
        .map(|level| level.as_str().to_string())
        .unwrap_or_else(|| config.logging.level.clone());
    let json = cli.json_logs || config.logging.format == LogFormat::Json;
    let _guard = setup_logging(&log_level, json, config.logging.file.as_deref())
        .context("Failed to open log file")?;

    match cli.command {
        Commands::Eda(args) => cli::commands::eda::run(args, config, cli.format),
        Commands::Technicals(args) => cli::commands::technicals::run(args, config, cli.format),
        Commands::Correlate(args) => cli::commands::correlate::run(args, config, cli.format),
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config, &config),
    }
}
