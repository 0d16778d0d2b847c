//! PerformCheckInHandler - command handler for creating a check-in.
//!
//! Step ordering is observable behavior: a missing user is reported
//! before a missing gym, and the daily-duplicate rule runs between them.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::checkin::{CheckIn, CheckInCreated};
use crate::domain::foundation::{
    CheckInId, CommandMetadata, DomainError, EventEnvelope, GymId, UserId,
};
use crate::domain::geo::{Coordinate, CoordinateError, Distance, MaxDistanceSpecification};
use crate::ports::{
    CheckInRepository, Clock, EventPublisher, GymRepository, UnitOfWork, UserRepository,
};

/// Command to check a user in at a gym.
#[derive(Debug, Clone)]
pub struct PerformCheckInCommand {
    pub user_id: UserId,
    pub gym_id: GymId,
    pub latitude: f64,
    pub longitude: f64,
}

/// Result of a successful check-in.
#[derive(Debug, Clone)]
pub struct PerformCheckInResult {
    pub check_in: CheckIn,
    pub event: CheckInCreated,
}

#[derive(Debug, Error)]
pub enum PerformCheckInError {
    #[error("reported position is invalid: {0}")]
    InvalidCoordinate(#[from] CoordinateError),

    #[error("user {0} not found")]
    UserNotFound(UserId),

    #[error("user {0} already checked in today")]
    AlreadyCheckedInToday(UserId),

    #[error("gym {0} not found")]
    GymNotFound(GymId),

    #[error("distance {distance_km:.3} km exceeds the {max_distance_km:.3} km limit")]
    MaxDistanceExceeded {
        distance_km: f64,
        max_distance_km: f64,
    },

    #[error(transparent)]
    Infrastructure(#[from] DomainError),
}

/// Handler for performing check-ins.
pub struct PerformCheckInHandler {
    users: Arc<dyn UserRepository>,
    gyms: Arc<dyn GymRepository>,
    check_ins: Arc<dyn CheckInRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
    clock: Arc<dyn Clock>,
    event_publisher: Arc<dyn EventPublisher>,
    eligibility: MaxDistanceSpecification,
}

impl PerformCheckInHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        gyms: Arc<dyn GymRepository>,
        check_ins: Arc<dyn CheckInRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
        clock: Arc<dyn Clock>,
        event_publisher: Arc<dyn EventPublisher>,
        eligibility: MaxDistanceSpecification,
    ) -> Self {
        Self {
            users,
            gyms,
            check_ins,
            unit_of_work,
            clock,
            event_publisher,
            eligibility,
        }
    }

    pub async fn handle(
        &self,
        cmd: PerformCheckInCommand,
        metadata: CommandMetadata,
    ) -> Result<PerformCheckInResult, PerformCheckInError> {
        // Parse the reported position before any IO
        let position = Coordinate::new(cmd.latitude, cmd.longitude).into_result()?;

        // 1. The user must exist
        let user = self
            .users
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| PerformCheckInError::UserNotFound(cmd.user_id.clone()))?;

        // 2. One check-in per user per UTC calendar day. This read-then-write
        //    check races under concurrency; the repository's uniqueness
        //    constraint is the real guard.
        let now = self.clock.now();
        if self
            .check_ins
            .find_by_user_on_date(user.id(), now.calendar_date())
            .await?
            .is_some()
        {
            return Err(PerformCheckInError::AlreadyCheckedInToday(
                cmd.user_id.clone(),
            ));
        }

        // 3. The gym must exist
        let gym = self
            .gyms
            .find_by_id(&cmd.gym_id)
            .await?
            .ok_or_else(|| PerformCheckInError::GymNotFound(cmd.gym_id.clone()))?;

        // 4. The member must be close enough to the gym
        let distance = Distance::between(position, *gym.coordinate());
        if !self.eligibility.is_satisfied_by(&distance) {
            return Err(PerformCheckInError::MaxDistanceExceeded {
                distance_km: distance.kilometers(),
                max_distance_km: self.eligibility.max_distance_km(),
            });
        }

        // 5. Persist inside a transaction
        let check_in = CheckIn::new(
            CheckInId::generate(),
            cmd.user_id.clone(),
            cmd.gym_id.clone(),
            position,
            now,
        );

        let mut tx = self.unit_of_work.begin().await?;
        if let Err(error) = self.check_ins.save(&check_in, tx.as_mut()).await {
            tx.rollback().await?;
            return Err(error.into());
        }
        tx.commit().await?;

        // 6. Publish after the write is durable
        let event = check_in.created_event();
        let envelope = EventEnvelope::from_event(&event)
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.as_str());
        self.event_publisher.publish(envelope).await?;

        info!(
            check_in_id = %check_in.id(),
            user_id = %check_in.user_id(),
            gym_id = %check_in.gym_id(),
            "check-in created"
        );

        Ok(PerformCheckInResult { check_in, event })
    }
}
