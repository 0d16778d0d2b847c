//! ActivateUserHandler - command handler for reactivating suspended accounts.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::foundation::{CommandMetadata, DomainError, EventEnvelope, EventId, UserId};
use crate::domain::user::{User, UserActivated};
use crate::ports::{Clock, EventPublisher, UserRepository};

/// Command to reactivate a user account.
#[derive(Debug, Clone)]
pub struct ActivateUserCommand {
    pub user_id: UserId,
}

/// Result of an activation attempt.
///
/// `changed` is false when the account was already active; nothing is
/// persisted or published for the no-op.
#[derive(Debug, Clone)]
pub struct ActivateUserResult {
    pub user: User,
    pub changed: bool,
}

#[derive(Debug, Error)]
pub enum ActivateUserError {
    #[error("user {0} not found")]
    UserNotFound(UserId),

    #[error(transparent)]
    Infrastructure(#[from] DomainError),
}

/// Handler for reactivating users.
pub struct ActivateUserHandler {
    users: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl ActivateUserHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            users,
            clock,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: ActivateUserCommand,
        metadata: CommandMetadata,
    ) -> Result<ActivateUserResult, ActivateUserError> {
        let mut user = self
            .users
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| ActivateUserError::UserNotFound(cmd.user_id.clone()))?;

        let now = self.clock.now();
        if !user.activate(now) {
            return Ok(ActivateUserResult {
                user,
                changed: false,
            });
        }

        self.users.update(&user).await?;

        let event = UserActivated {
            event_id: EventId::new(),
            user_id: user.id().clone(),
            activated_at: now,
        };
        let envelope = EventEnvelope::from_event(&event)
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.as_str());
        self.event_publisher.publish(envelope).await?;

        info!(user_id = %user.id(), "user activated");

        Ok(ActivateUserResult {
            user,
            changed: true,
        })
    }
}
