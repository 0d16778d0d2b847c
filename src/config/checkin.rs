//! Check-in rule configuration.

use chrono::Duration;
use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::geo::{MaxDistanceSpecification, DEFAULT_MAX_DISTANCE_KM};

/// Check-in eligibility and validation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckInConfig {
    /// Minutes after creation during which a check-in can be validated.
    #[serde(default = "default_validation_window_minutes")]
    pub validation_window_minutes: u64,

    /// Maximum distance in kilometers between member and gym.
    #[serde(default = "default_max_distance_km")]
    pub max_distance_km: f64,
}

impl CheckInConfig {
    /// Returns the validation window as a duration.
    pub fn validation_window(&self) -> Duration {
        Duration::minutes(self.validation_window_minutes as i64)
    }

    /// Builds the eligibility specification from the configured limit.
    pub fn eligibility(&self) -> MaxDistanceSpecification {
        MaxDistanceSpecification::new(self.max_distance_km)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.validation_window_minutes == 0 || self.validation_window_minutes > 1440 {
            return Err(ValidationError::InvalidValidationWindow);
        }
        if !self.max_distance_km.is_finite() || self.max_distance_km <= 0.0 {
            return Err(ValidationError::InvalidMaxDistance);
        }
        Ok(())
    }
}

impl Default for CheckInConfig {
    fn default() -> Self {
        Self {
            validation_window_minutes: default_validation_window_minutes(),
            max_distance_km: default_max_distance_km(),
        }
    }
}

fn default_validation_window_minutes() -> u64 {
    20
}

fn default_max_distance_km() -> f64 {
    DEFAULT_MAX_DISTANCE_KM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_business_rules() {
        let config = CheckInConfig::default();
        assert_eq!(config.validation_window_minutes, 20);
        assert_eq!(config.max_distance_km, 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_a_zero_window() {
        let config = CheckInConfig {
            validation_window_minutes: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidValidationWindow)
        ));
    }

    #[test]
    fn rejects_a_non_positive_distance() {
        let config = CheckInConfig {
            max_distance_km: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidMaxDistance)
        ));
    }
}
