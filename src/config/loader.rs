use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::catalog;
use crate::config::types::{Config, Defaults};
use crate::settings::Settings;

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
    /// Uses `~/.config/region-selector/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("region-selector").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    ///
    /// `[defaults]` codes are not checked here: command-line overrides may
    /// still replace them, so they are checked by [`Defaults::resolve`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
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
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The tick rate is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

impl Defaults {
    /// Build the initial settings from the configured codes.
    pub fn resolve(&self) -> Result<Settings, ConfigError> {
        let country =
            catalog::find_country(&self.country).ok_or_else(|| ConfigError::ValidationError {
                message: format!("Unknown country code '{}'", self.country),
            })?;
        let currency =
            catalog::find_currency(&self.currency).ok_or_else(|| ConfigError::ValidationError {
                message: format!("Unknown currency '{}'", self.currency),
            })?;
        let language =
            catalog::find_language(&self.language).ok_or_else(|| ConfigError::ValidationError {
                message: format!("Unknown language code '{}'", self.language),
            })?;

        Ok(Settings {
            country,
            currency,
            language,
        })
    }
}
