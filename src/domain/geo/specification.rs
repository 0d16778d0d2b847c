//! Accepted-distance policy for check-in eligibility.

use serde::{Deserialize, Serialize};

use super::Distance;

/// Default accepted distance between a member and the gym, in kilometers.
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 0.1;

/// Specification deciding whether a distance is close enough to check in.
///
/// Kept as a first-class object rather than an inline comparison so the
/// threshold policy can be swapped or unit-tested independently of the
/// check-in orchestration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaxDistanceSpecification {
    max_distance_km: f64,
}

impl MaxDistanceSpecification {
    /// Creates a specification with a custom threshold.
    pub fn new(max_distance_km: f64) -> Self {
        Self { max_distance_km }
    }

    /// The configured threshold in kilometers.
    pub fn max_distance_km(&self) -> f64 {
        self.max_distance_km
    }

    /// Returns true if the distance is within the accepted threshold.
    pub fn is_satisfied_by(&self, distance: &Distance) -> bool {
        distance.kilometers() <= self.max_distance_km
    }
}

impl Default for MaxDistanceSpecification {
    fn default() -> Self {
        Self {
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
        }
    }
}
