use std::path::Path;
use std::str::FromStr;

use config::Config;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;
use serde::Serialize;
use tracing::Level;

use crate::errors::AppError;

/// Environment variables with this prefix override the file, e.g.
/// `MQ_DEFAULTGEN_FORMAT=json`.
pub const ENV_PREFIX: &str = "MQ_DEFAULTGEN";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Rust source with one byte-image constant per default
    #[default]
    Rust,
    /// Offset-annotated hex dump
    Hex,
    /// One JSON summary record per default
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub output_path: String,
    pub format: OutputFormat,
    pub log_dir: String,
    pub log_level: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_path: "generated/mq_defaults.rs".to_string(),
            format: OutputFormat::Rust,
            log_dir: "./logs".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn level(&self) -> Result<Level, AppError> {
        Level::from_str(&self.log_level).map_err(|_| AppError::InvalidLogLevel(self.log_level.clone()))
    }
}

pub fn load_generator_config<P: AsRef<Path>>(path: P) -> Result<GeneratorConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path.as_ref()))
        .add_source(Environment::with_prefix(ENV_PREFIX))
        .build()?;

    config.try_deserialize()
}

/// Result of [`load_generator_config_or_default`], kept until logging is up.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: GeneratorConfig,
    pub path: String,
    /// Set when the file could not be used and defaults were substituted
    pub error: Option<ConfigError>,
}

impl LoadedConfig {
    /// Reports where the config came from. Call after tracing is initialised.
    pub fn log_outcome(&self) {
        match &self.error {
            None => tracing::info!("Loaded generator config from {}", self.path),
            Some(err) => {
                tracing::warn!("Failed to load generator config from {}: {}. Using defaults.", self.path, err)
            }
        }
    }
}

/// Load generator config with fallback to default. Nothing is logged here:
/// the log settings come from the config itself.
pub fn load_generator_config_or_default(path: &str) -> LoadedConfig {
    match load_generator_config(path) {
        Ok(config) => LoadedConfig { config, path: path.to_string(), error: None },
        Err(err) => LoadedConfig { config: GeneratorConfig::default(), path: path.to_string(), error: Some(err) },
    }
}
