//! AssignBillingCustomerHandler - command handler for attaching a billing id.
//!
//! The id itself comes from the billing provider through its adapter; this
//! handler only records the association on the aggregate and announces it.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::foundation::{CommandMetadata, DomainError, EventEnvelope, EventId, UserId};
use crate::domain::user::{BillingCustomerAssigned, User};
use crate::ports::{Clock, EventPublisher, UserRepository};

/// Command to assign a billing provider's customer id to a user.
#[derive(Debug, Clone)]
pub struct AssignBillingCustomerCommand {
    pub user_id: UserId,
    pub billing_customer_id: String,
}

/// Result of a billing id assignment.
#[derive(Debug, Clone)]
pub struct AssignBillingCustomerResult {
    pub user: User,
    /// The id that was replaced, if the user already had one.
    pub previous: Option<String>,
}

#[derive(Debug, Error)]
pub enum AssignBillingCustomerError {
    #[error("user {0} not found")]
    UserNotFound(UserId),

    #[error(transparent)]
    Infrastructure(#[from] DomainError),
}

/// Handler for assigning billing customer ids.
pub struct AssignBillingCustomerHandler {
    users: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl AssignBillingCustomerHandler {
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
        cmd: AssignBillingCustomerCommand,
        metadata: CommandMetadata,
    ) -> Result<AssignBillingCustomerResult, AssignBillingCustomerError> {
        let mut user = self
            .users
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| AssignBillingCustomerError::UserNotFound(cmd.user_id.clone()))?;

        let now = self.clock.now();
        let previous = user.assign_billing_customer_id(cmd.billing_customer_id.clone(), now);

        self.users.update(&user).await?;

        let event = BillingCustomerAssigned {
            event_id: EventId::new(),
            user_id: user.id().clone(),
            billing_customer_id: cmd.billing_customer_id,
            assigned_at: now,
        };
        let envelope = EventEnvelope::from_event(&event)
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.as_str());
        self.event_publisher.publish(envelope).await?;

        info!(user_id = %user.id(), "billing customer assigned");

        Ok(AssignBillingCustomerResult { user, previous })
    }
}
