//! Foundation module - Shared domain primitives.
//!
//! Contains the outcome algebra, value objects, identifiers, event
//! infrastructure, and error types that form the vocabulary of the
//! Gymgate domain.

mod command;
mod errors;
mod events;
mod ids;
mod outcome;
mod state_machine;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata};
pub use ids::{CheckInId, GymId, UserId};
pub use outcome::Outcome;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
