//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file in the working directory.

use crate::domain::EmptyInputPolicy;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for an address book session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Records per page for `show <page>` (default: 10)
    pub page_size: usize,

    /// How an empty birthday argument is treated (default: ignore)
    pub empty_input_policy: EmptyInputPolicy,

    /// Prompt printed before each command (default: "...")
    pub prompt: String,

    /// Log level when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PAGE_SIZE`: Records per page, greater than zero (default: 10)
    /// - `ADDRESS_BOOK_EMPTY_INPUT`: `ignore`, `clear` or `reject` (default: ignore)
    /// - `ADDRESS_BOOK_PROMPT`: Input prompt (default: "...")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let page_size = Self::parse_env_usize("ADDRESS_BOOK_PAGE_SIZE", defaults.page_size)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_PAGE_SIZE".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let empty_input_policy = match env::var("ADDRESS_BOOK_EMPTY_INPUT") {
            Ok(val) => val
                .parse::<EmptyInputPolicy>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_EMPTY_INPUT".to_string(),
                    reason,
                })?,
            Err(_) => defaults.empty_input_policy,
        };

        let prompt = env::var("ADDRESS_BOOK_PROMPT").unwrap_or(defaults.prompt);
        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            page_size,
            empty_input_policy,
            prompt,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
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
            page_size: 10,
            empty_input_policy: EmptyInputPolicy::Ignore,
            prompt: "...".to_string(),
            log_level: "error".to_string(),
        }
    }
}
