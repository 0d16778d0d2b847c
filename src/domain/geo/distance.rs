//! Geodesic distance between two coordinates.

use once_cell::sync::OnceCell;
use thiserror::Error;

use super::{Coordinate, CoordinateError};
use crate::domain::foundation::Outcome;

/// Error from constructing a distance out of unvalidated coordinate pairs.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("cannot measure distance between invalid coordinates: {source}")]
pub struct DistanceError {
    #[from]
    source: CoordinateError,
}

/// Distance between two validated coordinates.
///
/// The scalar is computed lazily on first access and is always
/// non-negative; it is never rounded internally.
#[derive(Debug, Clone)]
pub struct Distance {
    from: Coordinate,
    to: Coordinate,
    kilometers: OnceCell<f64>,
}

impl Distance {
    /// Builds a distance from two already-validated coordinates.
    pub fn between(from: Coordinate, to: Coordinate) -> Self {
        Self {
            from,
            to,
            kilometers: OnceCell::new(),
        }
    }

    /// Builds a distance from raw `(latitude, longitude)` pairs.
    ///
    /// Both endpoints are re-validated; any coordinate error is wrapped as
    /// a `DistanceError`.
    pub fn from_raw(from: (f64, f64), to: (f64, f64)) -> Outcome<DistanceError, Self> {
        let from = match Coordinate::new(from.0, from.1).into_result() {
            Ok(coord) => coord,
            Err(error) => return Outcome::failure(error.into()),
        };
        let to = match Coordinate::new(to.0, to.1).into_result() {
            Ok(coord) => coord,
            Err(error) => return Outcome::failure(error.into()),
        };
        Outcome::success(Self::between(from, to))
    }

    /// The reported (origin) endpoint.
    pub fn from(&self) -> &Coordinate {
        &self.from
    }

    /// The target endpoint.
    pub fn to(&self) -> &Coordinate {
        &self.to
    }

    /// Distance in kilometers, computed on first access.
    ///
    /// Uses the spherical law of cosines. The constant chain converts the
    /// central angle to nautical miles and then to kilometers; it matches
    /// the fixtures the eligibility thresholds were calibrated against, so
    /// the constants and their order are load-bearing.
    pub fn kilometers(&self) -> f64 {
        *self.kilometers.get_or_init(|| {
            // Equal endpoints would feed acos a value slightly above 1.
            if self.from == self.to {
                return 0.0;
            }

            let from_rad = self.from.latitude().to_radians();
            let to_rad = self.to.latitude().to_radians();
            let theta_rad = (self.from.longitude() - self.to.longitude()).to_radians();

            let x = from_rad.sin() * to_rad.sin()
                + from_rad.cos() * to_rad.cos() * theta_rad.cos();
            // Clamp against float rounding pushing acos out of its domain.
            let x = x.min(1.0);

            x.acos().to_degrees() * 60.0 * 1.1515 * 1.609344
        })
    }
}
