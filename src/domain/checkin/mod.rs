//! Check-in domain: presence records with a bounded validation window.

mod aggregate;
mod errors;
mod events;

pub use aggregate::CheckIn;
pub use errors::CheckInError;
pub use events::{CheckInCreated, CheckInValidated};
