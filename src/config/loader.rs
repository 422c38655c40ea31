use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, SourceKind};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/cheesy-advice/config.toml` on Unix, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("cheesy-advice").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `joke_probability` lies in `[0, 1]`
    /// - no substitution rule has an empty pattern
    /// - an HTTP source has a URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        let probability = self.behavior.joke_probability;
        if !(0.0..=1.0).contains(&probability) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "joke_probability must be between 0 and 1, got {}",
                    probability
                ),
            });
        }

        if let Some(index) = self.content.rules.iter().position(|r| r.from.is_empty()) {
            return Err(ConfigError::ValidationError {
                message: format!("Substitution rule #{} has an empty 'from' pattern", index + 1),
            });
        }

        if self.source.kind == SourceKind::Http && self.source.url.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "HTTP source requires a non-empty url".to_string(),
            });
        }

        Ok(())
    }
}
