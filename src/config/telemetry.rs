//! Telemetry configuration.

use serde::Deserialize;

use super::error::ValidationError;

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Tracing filter directive (overridden by `RUST_LOG`).
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl TelemetryConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.log_filter.trim().is_empty() {
            return Err(ValidationError::EmptyLogFilter);
        }
        Ok(())
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "gymgate=info".to_string()
}
