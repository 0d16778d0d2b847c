//! Check-in command handlers.

mod perform_check_in;
mod validate_check_in;

#[cfg(test)]
pub(crate) mod test_support;

pub use perform_check_in::{
    PerformCheckInCommand, PerformCheckInError, PerformCheckInHandler, PerformCheckInResult,
};
pub use validate_check_in::{
    ValidateCheckInCommand, ValidateCheckInError, ValidateCheckInHandler, ValidateCheckInResult,
};
