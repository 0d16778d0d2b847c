//! ChangePasswordHandler - command handler for rotating credentials.

use std::sync::Arc;

use secrecy::SecretString;
use thiserror::Error;
use tracing::info;

use crate::domain::foundation::{
    CommandMetadata, DomainError, EventEnvelope, EventId, UserId, ValidationError,
};
use crate::domain::user::{User, UserError, UserPasswordChanged};
use crate::ports::{Clock, EventPublisher, PasswordHasher, UserRepository};

/// Command to change a user's password.
#[derive(Clone)]
pub struct ChangePasswordCommand {
    pub user_id: UserId,
    pub new_password: SecretString,
}

#[derive(Debug, Error)]
pub enum ChangePasswordError {
    #[error("user {0} not found")]
    UserNotFound(UserId),

    #[error("new password is invalid")]
    Validation(Vec<ValidationError>),

    #[error("new password must differ from the current one")]
    PasswordUnchanged,

    #[error(transparent)]
    Infrastructure(#[from] DomainError),
}

impl From<UserError> for ChangePasswordError {
    fn from(error: UserError) -> Self {
        match error {
            UserError::Validation(errors) => Self::Validation(errors),
            UserError::PasswordUnchanged => Self::PasswordUnchanged,
        }
    }
}

/// Handler for changing passwords.
pub struct ChangePasswordHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    clock: Arc<dyn Clock>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl ChangePasswordHandler {
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
        cmd: ChangePasswordCommand,
        metadata: CommandMetadata,
    ) -> Result<User, ChangePasswordError> {
        let mut user = self
            .users
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| ChangePasswordError::UserNotFound(cmd.user_id.clone()))?;

        let now = self.clock.now();
        user.change_password(&cmd.new_password, self.hasher.as_ref(), now)
            .into_result()?;

        self.users.update(&user).await?;

        let event = UserPasswordChanged {
            event_id: EventId::new(),
            user_id: user.id().clone(),
            changed_at: now,
        };
        let envelope = EventEnvelope::from_event(&event)
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.as_str());
        self.event_publisher.publish(envelope).await?;

        info!(user_id = %user.id(), "password changed");

        Ok(user)
    }
}
