//! Configuration structures.

use nova_core::error::{NovaError, NovaResult};
use nova_correlation::CorrelationParams;
use nova_indicators::IndicatorParams;
use nova_text::{TextParams, TopicParams};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub paths: PathSettings,
    #[serde(default)]
    pub indicators: IndicatorParams,
    #[serde(default)]
    pub text: TextParams,
    #[serde(default)]
    pub topics: TopicParams,
    #[serde(default)]
    pub correlation: CorrelationParams,
}

impl AppConfig {
    /// Check cross-field constraints that deserialization cannot express.
    pub fn validate(&self) -> NovaResult<()> {
        self.indicators.validate()?;
        self.text.validate()?;
        self.topics.validate()?;
        self.correlation.validate()?;
        if self.logging.level.trim().is_empty() {
            return Err(NovaError::Config("logging.level must not be empty".to_string()));
        }
        Ok(())
    }

    /// Effective configuration rendered as TOML.
    pub fn to_toml(&self) -> NovaResult<String> {
        toml::to_string_pretty(self).map_err(|e| NovaError::Serialization(e.to_string()))
    }
}

/// General app settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "nova".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file: None,
        }
    }
}

/// Input and output locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Headline dataset
    pub headlines: PathBuf,
    /// Directory of `<ticker>.csv` price files
    pub prices_dir: PathBuf,
    pub eda_output: PathBuf,
    pub technicals_output: PathBuf,
    pub sentiment_output: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            headlines: PathBuf::from("data/raw/raw_analyst_ratings.csv"),
            prices_dir: PathBuf::from("data/processed/prices"),
            eda_output: PathBuf::from("data/processed/eda"),
            technicals_output: PathBuf::from("data/processed/technical_metrics"),
            sentiment_output: PathBuf::from("data/processed/sentiment"),
        }
    }
}
