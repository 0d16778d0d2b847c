//! SuspendUserHandler - command handler for suspending accounts.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::foundation::{CommandMetadata, DomainError, EventEnvelope, EventId, UserId};
use crate::domain::user::{User, UserSuspended};
use crate::ports::{Clock, EventPublisher, UserRepository};

/// Command to suspend a user account.
#[derive(Debug, Clone)]
pub struct SuspendUserCommand {
    pub user_id: UserId,
}

/// Result of a suspension attempt.
///
/// `changed` is false when the account was already suspended; the
/// self-transition is a no-op and nothing is persisted or published.
#[derive(Debug, Clone)]
pub struct SuspendUserResult {
    pub user: User,
    pub changed: bool,
}

#[derive(Debug, Error)]
pub enum SuspendUserError {
    #[error("user {0} not found")]
    UserNotFound(UserId),

    #[error(transparent)]
    Infrastructure(#[from] DomainError),
}

/// Handler for suspending users.
pub struct SuspendUserHandler {
    users: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl SuspendUserHandler {
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
        cmd: SuspendUserCommand,
        metadata: CommandMetadata,
    ) -> Result<SuspendUserResult, SuspendUserError> {
        let mut user = self
            .users
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| SuspendUserError::UserNotFound(cmd.user_id.clone()))?;

        let now = self.clock.now();
        if !user.suspend(now) {
            // Already suspended; report the no-op without a write or event
            return Ok(SuspendUserResult {
                user,
                changed: false,
            });
        }

        self.users.update(&user).await?;

        let event = UserSuspended {
            event_id: EventId::new(),
            user_id: user.id().clone(),
            suspended_at: now,
        };
        let envelope = EventEnvelope::from_event(&event)
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.as_str());
        self.event_publisher.publish(envelope).await?;

        info!(user_id = %user.id(), "user suspended");

        Ok(SuspendUserResult {
            user,
            changed: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::FixedClock;
    use crate::application::handlers::user::test_support::{
        stored_user, MockEventPublisher, MockUserRepository,
    };
    use crate::domain::foundation::Timestamp;
    use crate::domain::user::UserStatus;

    fn metadata() -> CommandMetadata {
        CommandMetadata::new(UserId::new("admin-1")).with_correlation_id("corr-1")
    }

    fn handler(
        repo: Arc<MockUserRepository>,
        publisher: Arc<MockEventPublisher>,
    ) -> SuspendUserHandler {
        SuspendUserHandler::new(
            repo,
            Arc::new(FixedClock::at(Timestamp::from_unix_secs(1_700_000_000))),
            publisher,
        )
    }

    #[tokio::test]
    async fn suspends_an_active_user() {
        let user = stored_user(UserStatus::Activated);
        let user_id = user.id().clone();
        let repo = Arc::new(MockUserRepository::with_user(user));
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = handler(repo.clone(), publisher.clone());

        let result = handler
            .handle(SuspendUserCommand { user_id }, metadata())
            .await
            .unwrap();

        assert!(result.changed);
        assert!(result.user.is_suspended());
        assert_eq!(repo.updated().len(), 1);

        let events = publisher.published();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, "user.suspended.v1");
        assert_eq!(events[0].metadata.correlation_id, Some("corr-1".to_string()));
    }

    #[tokio::test]
    async fn suspending_twice_is_a_silent_no_op() {
        let user = stored_user(UserStatus::Suspended);
        let user_id = user.id().clone();
        let repo = Arc::new(MockUserRepository::with_user(user));
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = handler(repo.clone(), publisher.clone());

        let result = handler
            .handle(SuspendUserCommand { user_id }, metadata())
            .await
            .unwrap();

        assert!(!result.changed);
        assert!(result.user.is_suspended());
        assert!(repo.updated().is_empty());
        assert!(publisher.published().is_empty());
    }

    #[tokio::test]
    async fn fails_for_unknown_user() {
        let repo = Arc::new(MockUserRepository::empty());
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = handler(repo, publisher);

        let error = handler
            .handle(
                SuspendUserCommand {
                    user_id: UserId::new("missing"),
                },
                metadata(),
            )
            .await
            .unwrap_err();

        assert!(matches!(error, SuspendUserError::UserNotFound(_)));
    }
}
