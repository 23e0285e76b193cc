//! Wait configuration.
//!
//! There is no process-wide mutable setting: a [`KirkConfig`] is built once
//! (defaults, environment or YAML file), handed to an [`Element`], and can
//! still be overridden per call.
//!
//! ```yaml
//! # kirk.yaml
//! timeout_ms: 4000
//! poll_interval_ms: 100
//! ```
//!
//! [`Element`]: crate::Element

use crate::result::{KirkError, KirkResult};
use crate::wait::{WaitOptions, DEFAULT_POLL_INTERVAL_MS, DEFAULT_WAIT_TIMEOUT_MS};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding the timeout (milliseconds)
pub const ENV_TIMEOUT_MS: &str = "KIRK_TIMEOUT_MS";

/// Environment variable overriding the poll interval (milliseconds)
pub const ENV_POLL_INTERVAL_MS: &str = "KIRK_POLL_INTERVAL_MS";

/// Default wait settings for a test run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KirkConfig {
    /// Timeout in milliseconds
    pub timeout_ms: u64,
    /// Polling interval in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for KirkConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_WAIT_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl KirkConfig {
    /// Create a config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set timeout in milliseconds
    #[must_use]
    pub const fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set polling interval in milliseconds
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    /// Defaults overridden by `KIRK_TIMEOUT_MS` / `KIRK_POLL_INTERVAL_MS`
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but not a valid value
    pub fn from_env() -> KirkResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`KirkConfig::from_env`] with a custom variable source
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but not a valid value
    pub fn from_lookup<F>(lookup: F) -> KirkResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            config.timeout_ms = parse_ms(ENV_TIMEOUT_MS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_POLL_INTERVAL_MS) {
            config.poll_interval_ms = parse_ms(ENV_POLL_INTERVAL_MS, &raw)?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Parse YAML; missing keys keep their defaults
    ///
    /// # Errors
    ///
    /// Returns error on malformed YAML or invalid values
    pub fn from_yaml_str(yaml: &str) -> KirkResult<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML config file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed
    pub fn load(path: impl AsRef<Path>) -> KirkResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Check the settings are usable
    ///
    /// # Errors
    ///
    /// Returns error if the poll interval is zero
    pub fn validate(&self) -> KirkResult<()> {
        if self.poll_interval_ms == 0 {
            return Err(KirkError::config("poll_interval_ms must be greater than 0"));
        }
        Ok(())
    }

    /// Wait options for a poller
    #[must_use]
    pub const fn wait_options(&self) -> WaitOptions {
        WaitOptions {
            timeout_ms: self.timeout_ms,
            poll_interval_ms: self.poll_interval_ms,
        }
    }
}

fn parse_ms(key: &str, raw: &str) -> KirkResult<u64> {
    raw.trim()
        .parse()
        .map_err(|_| KirkError::config(format!("{key} must be milliseconds, got {raw:?}")))
}
