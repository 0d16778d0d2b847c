//! Check-in domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, CheckInId, EventId, GymId, Timestamp, UserId};

/// Published when a member creates a pending check-in.
///
/// Carries the reported coordinate so downstream consumers can audit
/// distance decisions without re-reading the aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInCreated {
    pub event_id: EventId,
    pub check_in_id: CheckInId,
    pub user_id: UserId,
    pub gym_id: GymId,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: Timestamp,
}

domain_event!(
    CheckInCreated,
    event_type = "checkin.created.v1",
    aggregate_id = check_in_id,
    aggregate_type = "CheckIn",
    occurred_at = created_at,
    event_id = event_id
);

/// Published when a pending check-in is validated inside the window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInValidated {
    pub event_id: EventId,
    pub check_in_id: CheckInId,
    pub user_id: UserId,
    pub gym_id: GymId,
    pub validated_at: Timestamp,
}

domain_event!(
    CheckInValidated,
    event_type = "checkin.validated.v1",
    aggregate_id = check_in_id,
    aggregate_type = "CheckIn",
    occurred_at = validated_at,
    event_id = event_id
);
