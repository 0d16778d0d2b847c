//! User command handlers.

mod activate_user;
mod assign_billing_customer;
mod change_password;
mod register_user;
mod suspend_user;

#[cfg(test)]
pub(crate) mod test_support;

pub use activate_user::{ActivateUserCommand, ActivateUserError, ActivateUserHandler, ActivateUserResult};
pub use assign_billing_customer::{
    AssignBillingCustomerCommand, AssignBillingCustomerError, AssignBillingCustomerHandler,
    AssignBillingCustomerResult,
};
pub use change_password::{ChangePasswordCommand, ChangePasswordError, ChangePasswordHandler};
pub use register_user::{
    RegisterUserCommand, RegisterUserError, RegisterUserHandler, RegisterUserResult,
};
pub use suspend_user::{SuspendUserCommand, SuspendUserError, SuspendUserHandler, SuspendUserResult};
