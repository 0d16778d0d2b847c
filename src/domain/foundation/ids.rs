//! Strongly-typed identifier value objects.
//!
//! Ids are string-backed (UUID v4 when minted by this crate, but any
//! non-empty string from the surrounding application is accepted).
//! Constructing an id from an empty string is a programmer error - a
//! missing foreign key indicates a caller bug, not bad user input - and
//! panics rather than returning a validation failure.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident, $field:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an id from an existing value.
            ///
            /// # Panics
            ///
            /// Panics if the value is empty. An empty id is always a bug
            /// in the calling code.
            pub fn new(id: impl Into<String>) -> Self {
                let id = id.into();
                assert!(
                    !id.is_empty(),
                    concat!($field, " must not be empty; an empty id is a caller bug")
                );
                Self(id)
            }

            /// Mints a new random UUID v4 id.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of a registered user.
    UserId,
    "user_id"
);

string_id!(
    /// Identifier of a gym.
    GymId,
    "gym_id"
);

string_id!(
    /// Identifier of a check-in record.
    CheckInId,
    "check_in_id"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_mints_unique_values() {
        assert_ne!(UserId::generate(), UserId::generate());
        assert_ne!(GymId::generate(), GymId::generate());
        assert_ne!(CheckInId::generate(), CheckInId::generate());
    }

    #[test]
    fn new_preserves_value() {
        let id = UserId::new("user-123");
        assert_eq!(id.as_str(), "user-123");
        assert_eq!(format!("{}", id), "user-123");
    }

    #[test]
    #[should_panic(expected = "user_id must not be empty")]
    fn empty_user_id_is_a_caller_bug() {
        UserId::new("");
    }

    #[test]
    #[should_panic(expected = "gym_id must not be empty")]
    fn empty_gym_id_is_a_caller_bug() {
        GymId::new("");
    }

    #[test]
    #[should_panic(expected = "check_in_id must not be empty")]
    fn empty_check_in_id_is_a_caller_bug() {
        CheckInId::new("");
    }

    #[test]
    fn ids_serialize_transparently() {
        let id = GymId::new("gym-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""gym-1""#);
    }
}
