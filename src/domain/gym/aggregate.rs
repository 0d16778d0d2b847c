//! Gym entity.
//!
//! Gyms are reference data for the check-in kernel: the location a
//! member must be near. They own the coordinate that eligibility is
//! measured against.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GymId, Outcome, ValidationError};
use crate::domain::geo::Coordinate;

/// A gym a member can check in at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gym {
    id: GymId,
    title: String,
    description: Option<String>,
    phone: Option<String>,
    coordinate: Coordinate,
}

impl Gym {
    /// Creates a gym, validating the title.
    pub fn new(
        id: GymId,
        title: impl Into<String>,
        description: Option<String>,
        phone: Option<String>,
        coordinate: Coordinate,
    ) -> Outcome<ValidationError, Self> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Outcome::failure(ValidationError::empty_field("title"));
        }
        Outcome::success(Self {
            id,
            title,
            description,
            phone,
            coordinate,
        })
    }

    /// Reconstitutes a gym from persistence (no validation).
    pub fn reconstitute(
        id: GymId,
        title: String,
        description: Option<String>,
        phone: Option<String>,
        coordinate: Coordinate,
    ) -> Self {
        Self {
            id,
            title,
            description,
            phone,
            coordinate,
        }
    }

    pub fn id(&self) -> &GymId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// The location eligibility is measured against.
    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location() -> Coordinate {
        Coordinate::new(-27.0747279, -49.4889672).force_success()
    }

    #[test]
    fn new_gym_keeps_its_coordinate() {
        let gym = Gym::new(GymId::generate(), "Iron Temple", None, None, location())
            .force_success();
        assert_eq!(gym.title(), "Iron Temple");
        assert_eq!(gym.coordinate(), &location());
    }

    #[test]
    fn new_gym_rejects_empty_title() {
        let error = Gym::new(GymId::generate(), "   ", None, None, location()).force_failure();
        assert_eq!(error, ValidationError::empty_field("title"));
    }

    #[test]
    fn optional_fields_are_preserved() {
        let gym = Gym::new(
            GymId::generate(),
            "Iron Temple",
            Some("Free weights only".to_string()),
            Some("+55 11 99999-0000".to_string()),
            location(),
        )
        .force_success();
        assert_eq!(gym.description(), Some("Free weights only"));
        assert_eq!(gym.phone(), Some("+55 11 99999-0000"));
    }
}
