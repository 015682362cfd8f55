//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `STACKSENSE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use stacksense::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Recommendations from {}", config.client.base_url);
//! ```

mod client;
mod error;
mod log;

pub use client::ClientConfig;
pub use error::{ConfigError, ValidationError};
pub use log::{LogConfig, LogFormat};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment is a valid setup
/// pointing at a local service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Recommendation service client (base URL, timeout)
    #[serde(default)]
    pub client: ClientConfig,

    /// Logging (filter, format)
    #[serde(default)]
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `STACKSENSE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `STACKSENSE__CLIENT__BASE_URL=http://...` -> `client.base_url = ...`
    /// - `STACKSENSE__LOG__FORMAT=json` -> `log.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("STACKSENSE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.client.validate()?;
        self.log.validate()?;
        Ok(())
    }
}
