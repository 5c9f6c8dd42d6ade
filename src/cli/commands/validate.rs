//! Validate configuration command.

use anyhow::Result;
use nova_config::AppConfig;
use std::path::Path;

pub fn run(config_path: &Path, config: &AppConfig) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    if let Err(e) = config.validate() {
        println!("Configuration error: {}", e);
        return Err(e.into());
    }

    println!("Configuration is valid!");
    println!();
    println!("App: {}", config.app.name);
    println!("Environment: {}", config.app.environment);
    println!("Log level: {}", config.logging.level);
    println!("Topics: {}", config.topics.n_topics);
    println!("Correlation min samples: {}", config.correlation.min_samples);
    println!();
    println!("Effective configuration:");
    println!("{}", config.to_toml()?);

    Ok(())
}
