//! Clock port - injectable source of the current time.
//!
//! Handlers never call `Timestamp::now()` directly; time comes in through
//! this port so the validation window and daily-duplicate rules can be
//! tested deterministically.

use crate::domain::foundation::Timestamp;

/// Port for reading the current time.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Timestamp;
}
