//! Domain layer - entities, value objects, and business rules.
//!
//! Organized by aggregate:
//! - `foundation` - shared primitives (ids, timestamps, outcome algebra, events)
//! - `geo` - coordinates, geodesic distance, and the eligibility specification
//! - `user` - user aggregate with the activation/suspension state machine
//! - `gym` - gym entity
//! - `checkin` - check-in aggregate with the time-bounded validation lifecycle

pub mod checkin;
pub mod foundation;
pub mod geo;
pub mod gym;
pub mod user;
