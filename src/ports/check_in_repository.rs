//! Check-in repository port.
//!
//! The save path participates in a caller-owned transaction so the
//! check-in row and any sibling writes commit or roll back together.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::checkin::CheckIn;
use crate::domain::foundation::{CheckInId, DomainError, UserId};
use crate::ports::Transaction;

/// Repository port for CheckIn aggregate persistence.
///
/// Implementations should back the one-check-in-per-day rule with a
/// storage-level uniqueness constraint on (user_id, calendar date of
/// created_at); the handler's pre-check alone races under concurrency.
#[async_trait]
pub trait CheckInRepository: Send + Sync {
    /// Save a new check-in inside the given transaction.
    ///
    /// # Errors
    ///
    /// - `AlreadyCheckedInToday` if the uniqueness constraint rejects the row
    /// - `DatabaseError` on persistence failure
    async fn save(&self, check_in: &CheckIn, tx: &mut dyn Transaction)
        -> Result<(), DomainError>;

    /// Update an existing check-in.
    ///
    /// # Errors
    ///
    /// - `CheckInNotFound` if the check-in doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, check_in: &CheckIn) -> Result<(), DomainError>;

    /// Find a check-in by id.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &CheckInId) -> Result<Option<CheckIn>, DomainError>;

    /// Find the user's check-in on a UTC calendar date, if any.
    async fn find_by_user_on_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<CheckIn>, DomainError>;

    /// Count all check-ins ever made by a user.
    async fn count_by_user(&self, user_id: &UserId) -> Result<u64, DomainError>;
}
