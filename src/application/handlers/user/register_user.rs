//! RegisterUserHandler - command handler for creating new accounts.

use std::sync::Arc;

use secrecy::SecretString;
use thiserror::Error;
use tracing::info;

use crate::domain::foundation::{DomainError, EventEnvelope, EventId, UserId, ValidationError};
use crate::domain::user::{User, UserRegistered, UserRole};
use crate::ports::{Clock, EventPublisher, PasswordHasher, UserRepository};

/// Command to register a new user.
#[derive(Clone)]
pub struct RegisterUserCommand {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub role: UserRole,
}

/// Result of successful registration.
#[derive(Debug, Clone)]
pub struct RegisterUserResult {
    pub user: User,
    pub event: UserRegistered,
}

#[derive(Debug, Error)]
pub enum RegisterUserError {
    #[error("registration input is invalid")]
    Validation(Vec<ValidationError>),

    #[error("email is already registered")]
    EmailTaken,

    #[error(transparent)]
    Infrastructure(#[from] DomainError),
}

/// Handler for registering users.
pub struct RegisterUserHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    clock: Arc<dyn Clock>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl RegisterUserHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            users,
            hasher,
            clock,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: RegisterUserCommand,
    ) -> Result<RegisterUserResult, RegisterUserError> {
        // 1. Build the aggregate; all field violations are reported together
        let now = self.clock.now();
        let user = User::register(
            UserId::generate(),
            cmd.name,
            cmd.email,
            &cmd.password,
            cmd.role,
            self.hasher.as_ref(),
            now,
        )
        .into_result()
        .map_err(RegisterUserError::Validation)?;

        // 2. Reject duplicate emails before touching storage
        if self.users.find_by_email(user.email()).await?.is_some() {
            return Err(RegisterUserError::EmailTaken);
        }

        // 3. Persist
        self.users.save(&user).await?;

        // 4. Publish
        let event = UserRegistered {
            event_id: EventId::new(),
            user_id: user.id().clone(),
            name: user.name().as_str().to_string(),
            email: user.email().as_str().to_string(),
            registered_at: now,
        };
        let envelope = EventEnvelope::from_event(&event).with_user_id(user.id().as_str());
        self.event_publisher.publish(envelope).await?;

        info!(user_id = %user.id(), "user registered");

        Ok(RegisterUserResult { user, event })
    }
}
