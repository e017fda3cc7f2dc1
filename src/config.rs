//! Configuration loading from TOML.
//!
//! Every section is optional; missing keys fall back to [`Default`].

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, Result};
use crate::logging::{level_filter, LoggingConfig};

/// File picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "tradebot.toml";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub client: ClientConfig,
}

/// Settings for the simulated execution client.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Simulated exchange round-trip, in milliseconds.
    pub latency_ms: u64,
}

impl ClientConfig {
    #[must_use]
    pub const fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { latency_ms: 500 }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&content)
    }

    /// Load `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists, else defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that parse as TOML but cannot be used.
    pub fn validate(&self) -> Result<()> {
        if self.logging.file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "logging.file",
                reason: "cannot be empty".into(),
            }
            .into());
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "logging.level",
                reason: "cannot be empty".into(),
            }
            .into());
        }
        if let Err(reason) = level_filter(&self.logging.level) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level",
                reason,
            }
            .into());
        }
        Ok(())
    }
}
