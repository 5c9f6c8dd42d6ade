//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nova")]
#[command(author, version, about = "Financial news and stock price analytics")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level (defaults to `logging.level` from the configuration)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    /// Report format printed to stdout
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Exploratory analysis of the headline dataset
    Eda(EdaArgs),
    /// Technical indicators for every ticker in the price directory
    Technicals(TechnicalsArgs),
    /// Correlate daily headline sentiment with daily returns
    Correlate(CorrelateArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct EdaArgs {
    /// Headline CSV (overrides `paths.headlines`)
    #[arg(long)]
    pub headlines: Option<PathBuf>,

    /// Output directory (overrides `paths.eda_output`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct TechnicalsArgs {
    /// Directory of `<ticker>.csv` files (overrides `paths.prices_dir`)
    #[arg(long)]
    pub prices_dir: Option<PathBuf>,

    /// Output directory (overrides `paths.technicals_output`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct CorrelateArgs {
    /// Headline CSV (overrides `paths.headlines`)
    #[arg(long)]
    pub headlines: Option<PathBuf>,

    /// Directory of `<ticker>.csv` files (overrides `paths.prices_dir`)
    #[arg(long)]
    pub prices_dir: Option<PathBuf>,

    /// Output directory (overrides `paths.sentiment_output`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
