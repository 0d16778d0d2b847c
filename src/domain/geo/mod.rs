//! Geographic primitives for check-in eligibility.
//!
//! - `Coordinate` - self-validating latitude/longitude pair
//! - `Distance` - geodesic distance between two coordinates
//! - `MaxDistanceSpecification` - the accepted-distance policy

mod coordinate;
mod distance;
mod specification;

pub use coordinate::{Coordinate, CoordinateError};
pub use distance::{Distance, DistanceError};
pub use specification::{MaxDistanceSpecification, DEFAULT_MAX_DISTANCE_KM};
