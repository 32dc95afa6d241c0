mod types;

pub use types::*;

use crate::{Error, Result};
use tracing::debug;

/// Parses a YAML document into a validated [`Config`]. Missing sections fall back to defaults.
pub fn from_yaml_str(yaml: &str) -> Result<Config> {
    let config: Config = if yaml.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml::from_str(yaml)?
    };
    validate(&config)?;
    Ok(config)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn load() -> Result<Config> {
    let config_path =
        std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(&config_path).await?;
    from_yaml_str(&config_str)
}

pub fn validate(config: &Config) -> Result<()> {
    validate_log_level(&config.logs.level)?;

    if config.endpoint.predict_path.trim().is_empty() {
        return Err(Error::config("endpoint.predict_path must not be empty"));
    }

    if let Some(base_url) = &config.endpoint.base_url {
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::config(format!(
                "endpoint.base_url must be an http(s) URL, got '{}'",
                base_url
            )));
        }
    }

    debug!("Configuration validated");
    Ok(())
}

/// Validates that a log level string is valid
pub fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            Error::config(format!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            ))
        })?;
    Ok(())
}
