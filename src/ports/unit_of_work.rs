//! Unit of work port - transaction boundary for multi-step writes.
//!
//! Handlers that must persist several aggregates atomically open a
//! transaction here and pass it to the repositories that participate.

use async_trait::async_trait;
use std::any::Any;

use crate::domain::foundation::DomainError;

/// An open transaction.
///
/// Repositories downcast via `as_any` to the adapter's concrete
/// transaction type; passing a transaction from a different adapter is
/// a wiring bug and panics in the repository.
#[async_trait]
pub trait Transaction: Send {
    /// Commit all work performed inside this transaction.
    async fn commit(self: Box<Self>) -> Result<(), DomainError>;

    /// Roll back all work performed inside this transaction.
    async fn rollback(self: Box<Self>) -> Result<(), DomainError>;

    /// Access the adapter-specific transaction for repository downcasting.
    fn as_any(&mut self) -> &mut dyn Any;
}

/// Port for opening transactions.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Begin a new transaction.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` if the transaction cannot be opened
    async fn begin(&self) -> Result<Box<dyn Transaction>, DomainError>;
}
