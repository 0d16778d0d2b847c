//! Check-in aggregate entity.
//!
//! A check-in is created pending and is mutated exactly once, by a
//! successful `validate` call inside the time window. There is no stored
//! "expired" state: a late validation attempt fails and the record stays
//! pending.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::CheckInError;
use crate::domain::checkin::events::{CheckInCreated, CheckInValidated};
use crate::domain::foundation::{CheckInId, EventId, GymId, Outcome, Timestamp, UserId};
use crate::domain::geo::Coordinate;

/// A member's presence record at a gym.
///
/// # Invariants
///
/// - `user_id` and `gym_id` reference existing aggregates (enforced by the
///   orchestration before construction)
/// - `validated_at` is set at most once; a validated check-in never goes
///   back to pending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckIn {
    id: CheckInId,
    user_id: UserId,
    gym_id: GymId,
    /// Where the member reported being at creation time.
    coordinate: Coordinate,
    created_at: Timestamp,
    validated_at: Option<Timestamp>,
}

impl CheckIn {
    /// Creates a new pending check-in.
    pub fn new(
        id: CheckInId,
        user_id: UserId,
        gym_id: GymId,
        coordinate: Coordinate,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            gym_id,
            coordinate,
            created_at,
            validated_at: None,
        }
    }

    /// Reconstitutes a check-in from persistence (no validation).
    pub fn reconstitute(
        id: CheckInId,
        user_id: UserId,
        gym_id: GymId,
        coordinate: Coordinate,
        created_at: Timestamp,
        validated_at: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            user_id,
            gym_id,
            coordinate,
            created_at,
            validated_at,
        }
    }

    // Accessors

    pub fn id(&self) -> &CheckInId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn gym_id(&self) -> &GymId {
        &self.gym_id
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn validated_at(&self) -> Option<&Timestamp> {
        self.validated_at.as_ref()
    }

    pub fn is_validated(&self) -> bool {
        self.validated_at.is_some()
    }

    // Lifecycle

    /// Validates the check-in inside the time window.
    ///
    /// The attempt fails when the elapsed time since creation exceeds the
    /// window; an elapsed time exactly equal to the window still succeeds.
    /// Re-validating an already-validated record is rejected rather than
    /// silently overwriting `validated_at`.
    pub fn validate(&mut self, now: Timestamp, window: Duration) -> Outcome<CheckInError, Timestamp> {
        if self.is_validated() {
            return Outcome::failure(CheckInError::AlreadyValidated);
        }

        let elapsed = now.duration_since(&self.created_at);
        if elapsed > window {
            return Outcome::failure(CheckInError::TimeExceeded {
                elapsed_minutes: elapsed.num_minutes(),
                window_minutes: window.num_minutes(),
            });
        }

        self.validated_at = Some(now);
        Outcome::success(now)
    }

    // Events

    /// Builds the creation event for this check-in.
    pub fn created_event(&self) -> CheckInCreated {
        CheckInCreated {
            event_id: EventId::new(),
            check_in_id: self.id.clone(),
            user_id: self.user_id.clone(),
            gym_id: self.gym_id.clone(),
            latitude: self.coordinate.latitude(),
            longitude: self.coordinate.longitude(),
            created_at: self.created_at,
        }
    }

    /// Builds the validation event for this check-in.
    ///
    /// # Panics
    ///
    /// Panics if the check-in has not been validated; emitting a
    /// validation event for a pending record is a caller bug.
    pub fn validated_event(&self) -> CheckInValidated {
        let validated_at = self
            .validated_at
            .expect("validated_event() requires a validated check-in");
        CheckInValidated {
            event_id: EventId::new(),
            check_in_id: self.id.clone(),
            user_id: self.user_id.clone(),
            gym_id: self.gym_id.clone(),
            validated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW_MINUTES: i64 = 20;

    fn window() -> Duration {
        Duration::minutes(WINDOW_MINUTES)
    }

    fn created_at() -> Timestamp {
        Timestamp::from_unix_secs(1_700_000_000)
    }

    fn pending_check_in() -> CheckIn {
        CheckIn::new(
            CheckInId::generate(),
            UserId::new("user-1"),
            GymId::new("gym-1"),
            Coordinate::new(-27.0747279, -49.4889672).force_success(),
            created_at(),
        )
    }

    #[test]
    fn new_check_in_is_pending() {
        let check_in = pending_check_in();
        assert!(!check_in.is_validated());
        assert!(check_in.validated_at().is_none());
    }

    #[test]
    fn validate_inside_the_window_succeeds() {
        let mut check_in = pending_check_in();
        let now = created_at().plus_minutes(10);

        let validated_at = check_in.validate(now, window()).force_success();

        assert_eq!(validated_at, now);
        assert!(check_in.is_validated());
        assert_eq!(check_in.validated_at(), Some(&now));
    }

    #[test]
    fn validate_one_second_before_the_window_succeeds() {
        let mut check_in = pending_check_in();
        let now = created_at().plus_minutes(WINDOW_MINUTES).plus_secs(-1);
        assert!(check_in.validate(now, window()).is_success());
    }

    #[test]
    fn validate_exactly_at_the_window_boundary_succeeds() {
        // The window rule fails only strictly after the window elapses.
        let mut check_in = pending_check_in();
        let now = created_at().plus_minutes(WINDOW_MINUTES);
        assert!(check_in.validate(now, window()).is_success());
    }

    #[test]
    fn validate_after_the_window_fails_with_time_exceeded() {
        let mut check_in = pending_check_in();
        let now = created_at().plus_minutes(21);

        let error = check_in.validate(now, window()).force_failure();

        assert_eq!(
            error,
            CheckInError::TimeExceeded {
                elapsed_minutes: 21,
                window_minutes: WINDOW_MINUTES,
            }
        );
        assert!(!check_in.is_validated());
    }

    #[test]
    fn late_attempt_leaves_the_record_pending() {
        let mut check_in = pending_check_in();
        let _ = check_in.validate(created_at().plus_minutes(60), window());
        assert!(check_in.validated_at().is_none());
    }

    #[test]
    fn revalidation_is_rejected_not_overwritten() {
        let mut check_in = pending_check_in();
        let first = created_at().plus_minutes(5);
        check_in.validate(first, window()).force_success();

        let error = check_in
            .validate(created_at().plus_minutes(10), window())
            .force_failure();

        assert_eq!(error, CheckInError::AlreadyValidated);
        assert_eq!(check_in.validated_at(), Some(&first));
    }

    #[test]
    fn created_event_mirrors_the_record() {
        let check_in = pending_check_in();
        let event = check_in.created_event();
        assert_eq!(&event.check_in_id, check_in.id());
        assert_eq!(&event.user_id, check_in.user_id());
        assert_eq!(&event.gym_id, check_in.gym_id());
        assert_eq!(event.created_at, *check_in.created_at());
    }

    #[test]
    fn validated_event_carries_the_validation_timestamp() {
        let mut check_in = pending_check_in();
        let now = created_at().plus_minutes(3);
        check_in.validate(now, window()).force_success();

        let event = check_in.validated_event();
        assert_eq!(event.validated_at, now);
    }

    #[test]
    #[should_panic(expected = "validated_event() requires a validated check-in")]
    fn validated_event_for_pending_record_is_a_caller_bug() {
        pending_check_in().validated_event();
    }
}
