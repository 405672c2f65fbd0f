//! Configuration management for the rolodex demonstration binary.
//!
//! This module handles loading and validating configuration from environment
//! variables. All variables are optional and fall back to defaults.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the rolodex demonstration binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (default: "error")
    pub log_level: String,

    /// Records per page for paginated output (default: 2)
    pub page_size: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `BOOK_PAGE_SIZE`: Records per page, at least 1 (default: 2)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        let page_size = Self::parse_env_usize("BOOK_PAGE_SIZE", 2)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "BOOK_PAGE_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        Ok(Config {
            log_level,
            page_size,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            page_size: 2,
        }
    }
}
