//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Check-in validation window must be between 1 and 1440 minutes")]
    InvalidValidationWindow,

    #[error("Max check-in distance must be positive and finite")]
    InvalidMaxDistance,

    #[error("Password hash cost must be positive")]
    InvalidHashCost,

    #[error("Log filter must not be empty")]
    EmptyLogFilter,
}
