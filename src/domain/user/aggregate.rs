//! User aggregate entity.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use super::{Email, Name, Password, PasswordHasher, UserError, UserStatus};
use crate::domain::foundation::{Outcome, StateMachine, Timestamp, UserId, ValidationError};

/// Role of a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Member,
    Admin,
}

/// User aggregate.
///
/// # Invariants
///
/// - `name`, `email`, and `password` are always validated value objects
/// - `status` transitions only through [`UserStatus`]; a transition to the
///   current state is a silent no-op
/// - `updated_at` is set on every externally observable mutation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: Name,
    email: Email,
    password: Password,
    role: UserRole,
    status: UserStatus,
    created_at: Timestamp,
    updated_at: Option<Timestamp>,
    billing_customer_id: Option<String>,
}

impl User {
    /// Registers a new activated user from raw input.
    ///
    /// Validation is aggregated: every invalid field is reported, in
    /// name, email, password order - not just the first violation.
    /// Password hashing runs as part of this construction.
    pub fn register(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        password: &SecretString,
        role: UserRole,
        hasher: &dyn PasswordHasher,
        now: Timestamp,
    ) -> Outcome<Vec<ValidationError>, Self> {
        let name = Name::new(name);
        let email = Email::new(email);
        let password = Password::new(password, hasher);

        if let Outcome::Failure(errors) =
            Outcome::combine(vec![name.check(), email.check(), password.check()])
        {
            return Outcome::failure(errors);
        }

        Outcome::success(Self {
            id,
            name: name.force_success(),
            email: email.force_success(),
            password: password.force_success(),
            role,
            status: UserStatus::Activated,
            created_at: now,
            updated_at: None,
            billing_customer_id: None,
        })
    }

    /// Reconstitutes a user from persistence (no validation, no events).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: UserId,
        name: Name,
        email: Email,
        password: Password,
        role: UserRole,
        status: UserStatus,
        created_at: Timestamp,
        updated_at: Option<Timestamp>,
        billing_customer_id: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password,
            role,
            status,
            created_at,
            updated_at,
            billing_customer_id,
        }
    }

    // Accessors

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn status(&self) -> UserStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn is_suspended(&self) -> bool {
        self.status.is_suspended()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> Option<&Timestamp> {
        self.updated_at.as_ref()
    }

    pub fn billing_customer_id(&self) -> Option<&str> {
        self.billing_customer_id.as_deref()
    }

    // Mutations

    /// Suspends the account.
    ///
    /// Returns false when the account was already suspended - the
    /// self-transition is a no-op and the caller should not emit an event.
    pub fn suspend(&mut self, now: Timestamp) -> bool {
        if self.status == UserStatus::Suspended {
            return false;
        }
        // Always valid per the status machine; keep the validated path.
        self.status = self
            .status
            .transition_to(UserStatus::Suspended)
            .expect("suspend is always a valid transition");
        self.updated_at = Some(now);
        true
    }

    /// Reactivates the account.
    ///
    /// Returns false when the account was already activated.
    pub fn activate(&mut self, now: Timestamp) -> bool {
        if self.status == UserStatus::Activated {
            return false;
        }
        self.status = self
            .status
            .transition_to(UserStatus::Activated)
            .expect("activate is always a valid transition");
        self.updated_at = Some(now);
        true
    }

    /// Replaces the password with a new one.
    ///
    /// # Failures
    ///
    /// - `PasswordUnchanged` if the new password equals the current one
    /// - `Validation` if the new password fails its own rules
    pub fn change_password(
        &mut self,
        new_password: &SecretString,
        hasher: &dyn PasswordHasher,
        now: Timestamp,
    ) -> Outcome<UserError, ()> {
        if self.password.matches(new_password, hasher) {
            return Outcome::failure(UserError::PasswordUnchanged);
        }
        match Password::new(new_password, hasher).into_result() {
            Ok(password) => {
                self.password = password;
                self.updated_at = Some(now);
                Outcome::success(())
            }
            Err(error) => Outcome::failure(error.into()),
        }
    }

    /// Updates the profile with already-validated value objects.
    pub fn update_profile(&mut self, name: Name, email: Email, now: Timestamp) {
        self.name = name;
        self.email = email;
        self.updated_at = Some(now);
    }

    /// Assigns the billing provider's customer id, returning the previous one.
    pub fn assign_billing_customer_id(
        &mut self,
        customer_id: impl Into<String>,
        now: Timestamp,
    ) -> Option<String> {
        let old = std::mem::replace(&mut self.billing_customer_id, Some(customer_id.into()));
        self.updated_at = Some(now);
        old
    }
}
