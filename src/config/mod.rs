mod types;

pub use types::*;

use crate::Result;
use std::{env, path::Path};
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    let mut config = load_from(&config_path).await?;

    if let Ok(base_url) = env::var("ANALYSIS_BASE_URL") {
        debug!("Overriding analysis base URL from environment: {}", base_url);
        config.analysis.base_url = base_url;
        validate(&config)?;
    }

    Ok(config)
}

/// Reads a YAML config file. A missing file yields the default configuration.
pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    if !tokio::fs::try_exists(path).await? {
        debug!("No configuration file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    validate(&config)?;

    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.analysis.base_url.trim().is_empty() {
        return Err(crate::Error::config("analysis.base_url must not be empty"));
    }
    Ok(())
}
