//! User domain errors.

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Errors from user aggregate operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UserError {
    /// One or more value objects failed validation.
    ///
    /// Carries every violation from the aggregated construction check,
    /// in field order (name, email, password).
    #[error("user validation failed: {0:?}")]
    Validation(Vec<ValidationError>),

    /// The new password is identical to the current one.
    #[error("new password must differ from the current password")]
    PasswordUnchanged,
}

impl From<Vec<ValidationError>> for UserError {
    fn from(errors: Vec<ValidationError>) -> Self {
        UserError::Validation(errors)
    }
}

impl From<ValidationError> for UserError {
    fn from(error: ValidationError) -> Self {
        UserError::Validation(vec![error])
    }
}
