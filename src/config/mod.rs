//! Application configuration module.
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `GYMGATE`
//! prefix and nested sections use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use gymgate::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod checkin;
mod error;
mod security;
mod telemetry;

pub use checkin::CheckInConfig;
pub use error::{ConfigError, ValidationError};
pub use security::SecurityConfig;
pub use telemetry::TelemetryConfig;

use serde::Deserialize;

/// Root application configuration.
///
/// Every section has working defaults, so an empty environment yields a
/// usable development configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Check-in rules (validation window, distance limit)
    #[serde(default)]
    pub checkin: CheckInConfig,

    /// Credential hashing
    #[serde(default)]
    pub security: SecurityConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// 1. Loads `.env` if present (for development)
    /// 2. Reads environment variables with the `GYMGATE` prefix
    /// 3. Uses `__` to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `GYMGATE__CHECKIN__VALIDATION_WINDOW_MINUTES=20`
    /// - `GYMGATE__CHECKIN__MAX_DISTANCE_KM=0.1`
    /// - `GYMGATE__SECURITY__PASSWORD_HASH_COST=600`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its
    /// expected type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("GYMGATE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.checkin.validate()?;
        self.security.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }
}
