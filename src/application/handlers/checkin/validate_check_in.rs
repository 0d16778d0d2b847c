//! ValidateCheckInHandler - command handler for confirming a check-in.
//!
//! A gym attendant confirms that the member actually showed up. The
//! confirmation must happen inside a bounded window after creation.

use std::sync::Arc;

use chrono::Duration;
use thiserror::Error;
use tracing::info;

use crate::domain::checkin::{CheckIn, CheckInError, CheckInValidated};
use crate::domain::foundation::{CheckInId, CommandMetadata, DomainError, EventEnvelope};
use crate::ports::{CheckInRepository, Clock, EventPublisher};

/// Command to validate a pending check-in.
#[derive(Debug, Clone)]
pub struct ValidateCheckInCommand {
    pub check_in_id: CheckInId,
}

/// Result of a successful validation.
#[derive(Debug, Clone)]
pub struct ValidateCheckInResult {
    pub check_in: CheckIn,
    pub event: CheckInValidated,
}

#[derive(Debug, Error)]
pub enum ValidateCheckInError {
    #[error("check-in {0} not found")]
    CheckInNotFound(CheckInId),

    #[error("check-in was created {elapsed_minutes} minutes ago, window is {window_minutes}")]
    TimeExceeded {
        elapsed_minutes: i64,
        window_minutes: i64,
    },

    #[error("check-in is already validated")]
    AlreadyValidated,

    #[error(transparent)]
    Infrastructure(#[from] DomainError),
}

impl From<CheckInError> for ValidateCheckInError {
    fn from(error: CheckInError) -> Self {
        match error {
            CheckInError::TimeExceeded {
                elapsed_minutes,
                window_minutes,
            } => Self::TimeExceeded {
                elapsed_minutes,
                window_minutes,
            },
            CheckInError::AlreadyValidated => Self::AlreadyValidated,
        }
    }
}

/// Handler for validating check-ins.
pub struct ValidateCheckInHandler {
    check_ins: Arc<dyn CheckInRepository>,
    clock: Arc<dyn Clock>,
    event_publisher: Arc<dyn EventPublisher>,
    window: Duration,
}

impl ValidateCheckInHandler {
    pub fn new(
        check_ins: Arc<dyn CheckInRepository>,
        clock: Arc<dyn Clock>,
        event_publisher: Arc<dyn EventPublisher>,
        window: Duration,
    ) -> Self {
        Self {
            check_ins,
            clock,
            event_publisher,
            window,
        }
    }

    pub async fn handle(
        &self,
        cmd: ValidateCheckInCommand,
        metadata: CommandMetadata,
    ) -> Result<ValidateCheckInResult, ValidateCheckInError> {
        let mut check_in = self
            .check_ins
            .find_by_id(&cmd.check_in_id)
            .await?
            .ok_or_else(|| ValidateCheckInError::CheckInNotFound(cmd.check_in_id.clone()))?;

        let now = self.clock.now();
        check_in.validate(now, self.window).into_result()?;

        self.check_ins.update(&check_in).await?;

        let event = check_in.validated_event();
        let envelope = EventEnvelope::from_event(&event)
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.as_str());
        self.event_publisher.publish(envelope).await?;

        info!(check_in_id = %check_in.id(), "check-in validated");

        Ok(ValidateCheckInResult { check_in, event })
    }
}
