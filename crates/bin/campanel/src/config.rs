//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `campanel.toml` in the working directory. Every field has a
//! default so the file is optional. Environment variables take precedence
//! over file values.

use std::time::Duration;

use campanel_domain::poll::{INITIAL_DELAY, POLL_INTERVAL, PollTiming};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Camera device settings.
    pub device: DeviceConfig,
    /// Status poll timing.
    pub poll: PollConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Where the camera is reachable.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Base URL of the device (e.g. `http://192.168.4.1`).
    pub base_url: String,
}

/// Poll loop timing, in milliseconds.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Delay before the first poll.
    pub initial_delay_ms: u64,
    /// Delay between the end of one poll and the start of the next.
    pub interval_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `campanel.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("campanel.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("CAMPANEL_DEVICE_URL") {
            self.device.base_url = val;
        }
        if let Some(val) = var("CAMPANEL_INITIAL_DELAY_MS") {
            if let Ok(ms) = val.parse() {
                self.poll.initial_delay_ms = ms;
            }
        }
        if let Some(val) = var("CAMPANEL_POLL_INTERVAL_MS") {
            if let Ok(ms) = val.parse() {
                self.poll.interval_ms = ms;
            }
        }
        if let Some(val) = var("CAMPANEL_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.device.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "device base_url must start with http:// or https://, got {url:?}"
            )));
        }
        if self.poll.interval_ms == 0 {
            return Err(ConfigError::Validation(
                "poll interval_ms must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn timing(&self) -> PollTiming {
        PollTiming {
            initial_delay: Duration::from_millis(self.poll.initial_delay_ms),
            interval: Duration::from_millis(self.poll.interval_ms),
        }
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://192.168.4.1".to_string(),
        }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: u64::try_from(INITIAL_DELAY.as_millis()).unwrap_or(100),
            interval_ms: u64::try_from(POLL_INTERVAL.as_millis()).unwrap_or(5000),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "campanel=info".to_string(),
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
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
