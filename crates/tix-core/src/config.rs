//! Client Configuration
//!
//! Storage key naming and log verbosity. Defaults work out of the box;
//! `<prefix>_log_level` in the durable tier overrides the level at startup.

use log::LevelFilter;
use thiserror::Error;

const DEFAULT_PREFIX: &str = "tix";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown log level {value:?}")]
    UnknownLogLevel { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every key this app writes to webview storage
    pub storage_prefix: String,
    pub log_level: LevelFilter,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            storage_prefix: DEFAULT_PREFIX.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl ClientConfig {
    /// Build from a key lookup (usually the durable storage tier).
    /// Runs before the logger is installed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(level) = lookup(&config.log_level_key()) {
            config.log_level = level
                .trim()
                .parse::<LevelFilter>()
                .map_err(|_| ConfigError::UnknownLogLevel { value: level })?;
        }
        Ok(config)
    }

    pub fn user_key(&self) -> String {
        format!("{}_user", self.storage_prefix)
    }

    pub fn remember_key(&self) -> String {
        format!("{}_remember_me", self.storage_prefix)
    }

    pub fn log_level_key(&self) -> String {
        format!("{}_log_level", self.storage_prefix)
    }
}
