//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `tellhub.toml` in the working directory. Every field has a
//! default so the file is optional. Environment variables take precedence
//! over file values.

use std::path::Path;

use serde::Deserialize;
use tellhub_domain::catalog::ValueMatch;

/// Default location of the configuration file.
pub const DEFAULT_PATH: &str = "tellhub.toml";

/// Environment variable overriding [`ValidationConfig::value_match`].
pub const VALUE_MATCH_VAR: &str = "TELLHUB_VALUE_MATCH";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Device validation settings.
    pub validation: ValidationConfig,
}

/// How registrations are checked against the catalog.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// `substring` (default) or `whole_value`.
    pub value_match: ValueMatch,
}

impl Config {
    /// Load configuration from `tellhub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is unreadable or malformed.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(DEFAULT_PATH)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Read `path`, falling back to defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but is unreadable or malformed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup(VALUE_MATCH_VAR) {
            match val.parse() {
                Ok(value_match) => self.validation.value_match = value_match,
                Err(err) => tracing::warn!(error = %err, "ignoring {VALUE_MATCH_VAR}"),
            }
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
}
