//! Configuration management for the guardgate workspace
//!
//! This module provides configuration loading from multiple sources:
//! - Default values
//! - Configuration files (TOML, JSON, YAML)
//! - Environment variables

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration for the workspace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Model provider settings
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Use JSON format
    #[serde(default)]
    pub json: bool,
}

/// Settings for the backing model provider
///
/// The API key is never stored in config files; only the name of the
/// environment variable holding it is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider name: "openai" or "gemini"
    #[serde(default = "default_provider_name")]
    pub name: String,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Override for the provider's API base URL
    #[serde(default)]
    pub base_url: Option<String>,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_provider_name() -> String {
    "gemini".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            name: default_provider_name(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            base_url: None,
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            provider: ProviderConfig::default(),
        }
    }
}

impl ProviderConfig {
    /// Read the API key from the configured environment variable
    pub fn api_key(&self) -> Result<String> {
        std::env::var(&self.api_key_env).map_err(|_| {
            CoreError::config(format!(
                "API key environment variable {} is not set",
                self.api_key_env
            ))
        })
    }
}

/// Load configuration from a file
///
/// Supports TOML, JSON, and YAML formats based on file extension.
/// Environment variables prefixed with `GATE__` override file values.
///
/// # Example
///
/// ```no_run
/// use gate_core::config::load_config;
///
/// let config = load_config("config.toml").unwrap();
/// println!("Provider: {}", config.provider.name);
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GateConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CoreError::config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(config::Environment::with_prefix("GATE").separator("__"))
        .build()?;

    let config: GateConfig = settings.try_deserialize()?;

    tracing::info!("Configuration loaded from {}", path.display());

    Ok(config)
}

/// Load configuration with defaults if file doesn't exist
///
/// This is useful for optional configuration files.
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> GateConfig {
    match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            GateConfig::default()
        }
    }
}
