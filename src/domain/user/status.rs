//! User activation status state machine.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Activation status of a user account.
///
/// The machine toggles freely between the two states; a transition to the
/// current state is valid and treated by the aggregate as a no-op, so
/// repeated suspend or activate calls never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// Account in good standing; may check in.
    Activated,

    /// Account suspended; retained but inactive.
    Suspended,
}

impl UserStatus {
    /// Returns true if the account is activated.
    pub fn is_active(&self) -> bool {
        matches!(self, UserStatus::Activated)
    }

    /// Returns true if the account is suspended.
    pub fn is_suspended(&self) -> bool {
        matches!(self, UserStatus::Suspended)
    }
}

impl StateMachine for UserStatus {
    fn can_transition_to(&self, _target: &Self) -> bool {
        // Both cross-transitions and self-transitions are allowed.
        true
    }

    fn valid_transitions(&self) -> Vec<Self> {
        vec![UserStatus::Activated, UserStatus::Suspended]
    }
}
