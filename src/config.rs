//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables. Every variable is optional; defaults match the core behavior.

use crate::error::{ConfigError, ConfigResult};
use crate::scheduling::UPCOMING_WINDOW_DAYS;
use std::env;

/// Configuration for a contact book host.
#[derive(Debug, Clone)]
pub struct Config {
    /// How many days ahead a birthday counts as upcoming (default: 7)
    pub upcoming_window_days: i64,

    /// Log level the host should install its subscriber with (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `UPCOMING_WINDOW_DAYS`: reminder window in days (default: 7)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let upcoming_window_days =
            Self::parse_env_i64("UPCOMING_WINDOW_DAYS", UPCOMING_WINDOW_DAYS)?;

        if upcoming_window_days < 0 {
            return Err(ConfigError::InvalidValue {
                var: "UPCOMING_WINDOW_DAYS".to_string(),
                reason: "Must be a non-negative number".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            upcoming_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upcoming_window_days: UPCOMING_WINDOW_DAYS,
            log_level: "error".to_string(),
        }
    }
}
