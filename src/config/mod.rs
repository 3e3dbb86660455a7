// ABOUTME: Runtime configuration for pacing delays and hydration tracking defaults
// ABOUTME: Loads defaults, applies FITCAL_* environment overrides, and validates ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCal Labs

//! Configuration module for the FitCal core engine
//!
//! Centralizes the tunable knobs of the engine:
//!
//! - **Pacing**: simulated typing and vision-scan delays
//! - **Hydration**: water goal, drink step, and reminder cadence
//!
//! Configuration is loaded with [`CoreConfig::from_env`], which starts
//! from defaults, applies `FITCAL_*` environment overrides, and validates
//! the result. Callers hold the config and pass it by reference; the
//! engine keeps no global configuration state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid range error
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Value out of range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

/// Result alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Pacing configuration for simulated latency
///
/// The chat reply and the mock vision scan both wait a little before
/// answering so the embedding UI can show a typing indicator or scan
/// animation. All delays are in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacingConfig {
    /// Fixed lower bound of the chat typing delay
    #[serde(default = "default_typing_delay_base_ms")]
    pub typing_delay_base_ms: u64,
    /// Width of the random jitter added on top of the base delay.
    /// The effective delay is `[base, base + jitter)`.
    #[serde(default = "default_typing_delay_jitter_ms")]
    pub typing_delay_jitter_ms: u64,
    /// Fixed delay of the mock food-photo analysis
    #[serde(default = "default_scan_delay_ms")]
    pub scan_delay_ms: u64,
}

fn default_typing_delay_base_ms() -> u64 {
    1000
}

fn default_typing_delay_jitter_ms() -> u64 {
    800
}

fn default_scan_delay_ms() -> u64 {
    2500
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            typing_delay_base_ms: default_typing_delay_base_ms(),
            typing_delay_jitter_ms: default_typing_delay_jitter_ms(),
            scan_delay_ms: default_scan_delay_ms(),
        }
    }
}

/// Hydration tracking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationConfig {
    /// Daily water goal in milliliters used when the user has not set one
    #[serde(default = "default_water_goal_ml")]
    pub default_goal_ml: u32,
    /// Milliliters added per logged drink
    #[serde(default = "default_drink_step_ml")]
    pub drink_step_ml: u32,
    /// Hard ceiling on daily logged intake in milliliters
    #[serde(default = "default_max_intake_ml")]
    pub max_intake_ml: u32,
    /// Seconds between hydration reminders
    #[serde(default = "default_reminder_interval_secs")]
    pub reminder_interval_secs: u64,
}

fn default_water_goal_ml() -> u32 {
    2500
}

fn default_drink_step_ml() -> u32 {
    250
}

fn default_max_intake_ml() -> u32 {
    5000
}

fn default_reminder_interval_secs() -> u64 {
    7200
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            default_goal_ml: default_water_goal_ml(),
            drink_step_ml: default_drink_step_ml(),
            max_intake_ml: default_max_intake_ml(),
            reminder_interval_secs: default_reminder_interval_secs(),
        }
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Simulated latency settings
    #[serde(default)]
    pub pacing: PacingConfig,
    /// Hydration tracking settings
    #[serde(default)]
    pub hydration: HydrationConfig,
}

impl CoreConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when an override fails to parse or the
    /// final configuration fails validation
    pub fn from_env() -> ConfigResult<Self> {
        let mut config = Self::default();

        // Apply environment variable overrides
        config = config.apply_env_overrides()?;

        // Validate the final configuration
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> ConfigResult<Self> {
        // Pacing overrides
        if let Ok(val) = std::env::var("FITCAL_TYPING_DELAY_BASE_MS") {
            self.pacing.typing_delay_base_ms = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid FITCAL_TYPING_DELAY_BASE_MS".into()))?;
        }

        if let Ok(val) = std::env::var("FITCAL_TYPING_DELAY_JITTER_MS") {
            self.pacing.typing_delay_jitter_ms = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid FITCAL_TYPING_DELAY_JITTER_MS".into()))?;
        }

        if let Ok(val) = std::env::var("FITCAL_SCAN_DELAY_MS") {
            self.pacing.scan_delay_ms = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid FITCAL_SCAN_DELAY_MS".into()))?;
        }

        // Hydration overrides
        if let Ok(val) = std::env::var("FITCAL_WATER_GOAL_ML") {
            self.hydration.default_goal_ml = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid FITCAL_WATER_GOAL_ML".into()))?;
        }

        if let Ok(val) = std::env::var("FITCAL_WATER_STEP_ML") {
            self.hydration.drink_step_ml = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid FITCAL_WATER_STEP_ML".into()))?;
        }

        if let Ok(val) = std::env::var("FITCAL_WATER_MAX_ML") {
            self.hydration.max_intake_ml = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid FITCAL_WATER_MAX_ML".into()))?;
        }

        if let Ok(val) = std::env::var("FITCAL_WATER_REMINDER_SECS") {
            self.hydration.reminder_interval_secs = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid FITCAL_WATER_REMINDER_SECS".into()))?;
        }

        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first field whose value falls
    /// outside its allowed range
    pub fn validate(&self) -> ConfigResult<()> {
        // gen_range(0..jitter) needs a non-empty range
        if self.pacing.typing_delay_jitter_ms == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "typing_delay_jitter_ms must be >= 1",
            ));
        }

        if self.hydration.drink_step_ml == 0 {
            return Err(ConfigError::ValueOutOfRange("drink_step_ml must be >= 1"));
        }

        if self.hydration.default_goal_ml == 0 {
            return Err(ConfigError::ValueOutOfRange("default_goal_ml must be >= 1"));
        }

        if self.hydration.default_goal_ml > self.hydration.max_intake_ml {
            return Err(ConfigError::InvalidRange(
                "default_goal_ml must be <= max_intake_ml",
            ));
        }

        Ok(())
    }
}
