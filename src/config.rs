//! System configuration parameters
//!
//! All tunable parameters for the dashboard.  Defaults match the wiring in
//! [`pins`](crate::pins); a JSON override can be supplied at start-up
//! through the `GASDASH_CONFIG` environment variable.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::pins;

/// Environment variable holding an optional JSON config override.
pub const CONFIG_ENV_VAR: &str = "GASDASH_CONFIG";

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    // --- Timing ---
    /// Period between sampling cycles (milliseconds)
    pub sample_interval_ms: u32,
    /// Slice used to dispatch user events while waiting for the next cycle
    /// (milliseconds)
    pub event_poll_interval_ms: u32,

    // --- Lines (BCM numbering) ---
    /// Buzzer output line
    pub buzzer_line: u8,
    /// MQ135 digital input line
    pub mq135_line: u8,
    /// MQ9 digital input line
    pub mq9_line: u8,
    /// DHT11 data line
    pub climate_line: u8,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Timing
            sample_interval_ms: 1000,  // 1 Hz
            event_poll_interval_ms: 50, // 20 Hz input dispatch

            // Lines
            buzzer_line: pins::BUZZER_GPIO,
            mq135_line: pins::MQ135_GPIO,
            mq9_line: pins::MQ9_GPIO,
            climate_line: pins::DHT11_GPIO,
        }
    }
}

impl SystemConfig {
    /// Parse a JSON document.  Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|_| ConfigError::Malformed)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from [`CONFIG_ENV_VAR`], or defaults if it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(json) => Self::from_json(&json),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Reject values that would stall the loop or alias two lines.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("sample_interval_ms must be > 0"));
        }
        if self.event_poll_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("event_poll_interval_ms must be > 0"));
        }
        if self.event_poll_interval_ms > self.sample_interval_ms {
            return Err(ConfigError::ValidationFailed(
                "event_poll_interval_ms must not exceed sample_interval_ms",
            ));
        }
        let lines = [self.buzzer_line, self.mq135_line, self.mq9_line, self.climate_line];
        for (i, a) in lines.iter().enumerate() {
            if lines[i + 1..].contains(a) {
                return Err(ConfigError::ValidationFailed("line ids must be distinct"));
            }
        }
        Ok(())
    }
}

/// Errors from loading or validating a [`SystemConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The override was not valid JSON for this schema.
    Malformed,
    /// A field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "config override is not valid JSON"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
