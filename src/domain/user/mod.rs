//! User aggregate - accounts, credentials, and the activation lifecycle.

mod aggregate;
mod errors;
mod events;
mod status;
mod values;

pub use aggregate::{User, UserRole};
pub use errors::UserError;
pub use events::{
    BillingCustomerAssigned, UserActivated, UserPasswordChanged, UserRegistered, UserSuspended,
};
pub use status::UserStatus;
pub use values::{
    Email, Name, Password, PasswordHasher, NAME_MAX_LENGTH, NAME_MIN_LENGTH, PASSWORD_MIN_LENGTH,
};
