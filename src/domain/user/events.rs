//! User domain events.
//!
//! Published when externally observable user mutations occur:
//! - `UserRegistered` - new account created
//! - `UserSuspended` / `UserActivated` - status toggled
//! - `UserPasswordChanged` - credentials rotated
//! - `BillingCustomerAssigned` - billing provider id attached

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, EventId, Timestamp, UserId};

/// Published when a new user registers.
///
/// Carries no credential material; the password hash never leaves the
/// aggregate through events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRegistered {
    pub event_id: EventId,
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub registered_at: Timestamp,
}

domain_event!(
    UserRegistered,
    event_type = "user.registered.v1",
    aggregate_id = user_id,
    aggregate_type = "User",
    occurred_at = registered_at,
    event_id = event_id
);

/// Published when an account is suspended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSuspended {
    pub event_id: EventId,
    pub user_id: UserId,
    pub suspended_at: Timestamp,
}

domain_event!(
    UserSuspended,
    event_type = "user.suspended.v1",
    aggregate_id = user_id,
    aggregate_type = "User",
    occurred_at = suspended_at,
    event_id = event_id
);

/// Published when a suspended account is reactivated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserActivated {
    pub event_id: EventId,
    pub user_id: UserId,
    pub activated_at: Timestamp,
}

domain_event!(
    UserActivated,
    event_type = "user.activated.v1",
    aggregate_id = user_id,
    aggregate_type = "User",
    occurred_at = activated_at,
    event_id = event_id
);

/// Published when a user's password is changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPasswordChanged {
    pub event_id: EventId,
    pub user_id: UserId,
    pub changed_at: Timestamp,
}

domain_event!(
    UserPasswordChanged,
    event_type = "user.password_changed.v1",
    aggregate_id = user_id,
    aggregate_type = "User",
    occurred_at = changed_at,
    event_id = event_id
);

/// Published when a billing customer id is assigned to a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingCustomerAssigned {
    pub event_id: EventId,
    pub user_id: UserId,
    pub billing_customer_id: String,
    pub assigned_at: Timestamp,
}

domain_event!(
    BillingCustomerAssigned,
    event_type = "user.billing_customer_assigned.v1",
    aggregate_id = user_id,
    aggregate_type = "User",
    occurred_at = assigned_at,
    event_id = event_id
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainEvent, EventEnvelope};

    #[test]
    fn user_registered_envelope_routes_by_type() {
        let event = UserRegistered {
            event_id: EventId::new(),
            user_id: UserId::new("user-1"),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            registered_at: Timestamp::from_unix_secs(1_700_000_000),
        };

        let envelope = EventEnvelope::from_event(&event);
        assert_eq!(envelope.event_type, "user.registered.v1");
        assert_eq!(envelope.aggregate_type, "User");
        assert_eq!(envelope.aggregate_id, "user-1");
        assert_eq!(envelope.payload["email"], "jane@example.com");
    }

    #[test]
    fn billing_assignment_event_routes_by_type() {
        let event = BillingCustomerAssigned {
            event_id: EventId::new(),
            user_id: UserId::new("user-2"),
            billing_customer_id: "cus_123".to_string(),
            assigned_at: Timestamp::from_unix_secs(1_700_000_000),
        };

        let envelope = EventEnvelope::from_event(&event);
        assert_eq!(envelope.event_type, "user.billing_customer_assigned.v1");
        assert_eq!(envelope.payload["billing_customer_id"], "cus_123");
    }

    #[test]
    fn suspension_events_carry_the_user_aggregate_id() {
        let event = UserSuspended {
            event_id: EventId::new(),
            user_id: UserId::new("user-9"),
            suspended_at: Timestamp::from_unix_secs(1_700_000_000),
        };
        assert_eq!(event.aggregate_id(), "user-9");
        assert_eq!(event.event_type(), "user.suspended.v1");
    }
}
