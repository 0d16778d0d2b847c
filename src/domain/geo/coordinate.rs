//! Coordinate value object.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::Outcome;

/// Errors from constructing a coordinate out of range.
///
/// Each axis is validated independently; a bad latitude is reported as a
/// latitude error regardless of what the longitude looks like.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    #[error("latitude must be between -90 and 90 degrees, got {value}")]
    InvalidLatitude { value: f64 },

    #[error("longitude must be between -180 and 180 degrees, got {value}")]
    InvalidLongitude { value: f64 },
}

/// Validated geographic point.
///
/// Latitude is in [-90, 90], longitude in [-180, 180], both in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Validates and constructs a coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Outcome<CoordinateError, Self> {
        if !(-90.0..=90.0).contains(&latitude) || latitude.is_nan() {
            return Outcome::failure(CoordinateError::InvalidLatitude { value: latitude });
        }
        if !(-180.0..=180.0).contains(&longitude) || longitude.is_nan() {
            return Outcome::failure(CoordinateError::InvalidLongitude { value: longitude });
        }
        Outcome::success(Self {
            latitude,
            longitude,
        })
    }

    /// Reconstitutes a coordinate from storage that is assumed valid.
    pub fn reconstitute(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_coordinates_within_range() {
        let coord = Coordinate::new(-23.5505, -46.6333).force_success();
        assert_eq!(coord.latitude(), -23.5505);
        assert_eq!(coord.longitude(), -46.6333);
    }

    #[test]
    fn accepts_boundary_values() {
        assert!(Coordinate::new(90.0, 180.0).is_success());
        assert!(Coordinate::new(-90.0, -180.0).is_success());
        assert!(Coordinate::new(0.0, 0.0).is_success());
    }

    #[test]
    fn rejects_latitude_out_of_range() {
        let error = Coordinate::new(999.0, 0.0).force_failure();
        assert_eq!(error, CoordinateError::InvalidLatitude { value: 999.0 });
    }

    #[test]
    fn rejects_longitude_out_of_range() {
        let error = Coordinate::new(0.0, 999.0).force_failure();
        assert_eq!(error, CoordinateError::InvalidLongitude { value: 999.0 });
    }

    #[test]
    fn latitude_error_is_independent_of_longitude_validity() {
        // Both axes invalid: latitude is reported, checked first.
        let error = Coordinate::new(999.0, 999.0).force_failure();
        assert!(matches!(error, CoordinateError::InvalidLatitude { .. }));
    }

    #[test]
    fn longitude_error_is_independent_of_latitude_validity() {
        let error = Coordinate::new(45.0, 999.0).force_failure();
        assert!(matches!(error, CoordinateError::InvalidLongitude { .. }));
    }

    #[test]
    fn rejects_nan_axes() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_failure());
        assert!(Coordinate::new(0.0, f64::NAN).is_failure());
    }
}
