//! Ports - interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `UserRepository` / `GymRepository` / `CheckInRepository` - aggregate stores
//! - `UnitOfWork` / `Transaction` - atomicity boundary for multi-step writes
//!
//! ## Event Ports
//!
//! - `EventPublisher` - port for publishing domain events
//! - `EventSubscriber` - port for subscribing to domain events
//! - `EventHandler` - handler that processes incoming events
//! - `QueuePublisher` - hand-off to asynchronous out-of-process work
//!
//! ## Domain Service Ports
//!
//! - `Clock` - injectable current time
//! - `PasswordHasher` - credential hashing (defined with the user domain,
//!   re-exported here for adapter implementors)

mod check_in_repository;
mod clock;
mod event_publisher;
mod event_subscriber;
mod gym_repository;
mod queue_publisher;
mod unit_of_work;
mod user_repository;

pub use check_in_repository::CheckInRepository;
pub use clock::Clock;
pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventHandler, EventSubscriber};
pub use gym_repository::GymRepository;
pub use queue_publisher::QueuePublisher;
pub use unit_of_work::{Transaction, UnitOfWork};
pub use user_repository::UserRepository;

pub use crate::domain::user::PasswordHasher;
