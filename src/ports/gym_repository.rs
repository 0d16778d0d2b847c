//! Gym repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, GymId};
use crate::domain::gym::Gym;

/// Repository port for Gym aggregate persistence.
#[async_trait]
pub trait GymRepository: Send + Sync {
    /// Save a new gym.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, gym: &Gym) -> Result<(), DomainError>;

    /// Find a gym by id.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &GymId) -> Result<Option<Gym>, DomainError>;
}
