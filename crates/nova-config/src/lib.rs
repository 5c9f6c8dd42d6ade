//! Configuration management.

mod settings;

pub use settings::{AppConfig, AppSettings, LogFormat, LoggingConfig, PathSettings};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Prefix of environment overrides, e.g. `NOVA__TOPICS__N_TOPICS=8`.
pub const ENV_PREFIX: &str = "NOVA";

/// Load configuration from file and environment.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}
