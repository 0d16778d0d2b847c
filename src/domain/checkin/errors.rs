//! Check-in domain errors.

use thiserror::Error;

/// Errors from the check-in validation lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckInError {
    /// The validation window elapsed before the attempt.
    ///
    /// The record stays pending; expiry is evaluated at validation time,
    /// never stored.
    #[error("check-in can no longer be validated: {elapsed_minutes} minutes elapsed, the window is {window_minutes} minutes")]
    TimeExceeded {
        elapsed_minutes: i64,
        window_minutes: i64,
    },

    /// The check-in was already validated; re-validation is rejected.
    #[error("check-in has already been validated")]
    AlreadyValidated,
}
