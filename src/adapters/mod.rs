//! Adapters - implementations of the ports.

mod clock;
mod hasher;
mod queue;
mod telemetry;

pub mod events;

pub use clock::{FixedClock, SystemClock};
pub use events::InMemoryEventBus;
pub use hasher::HmacSha256PasswordHasher;
pub use queue::{InMemoryQueuePublisher, QueueForwardingHandler, QueueMessage};
pub use telemetry::init_tracing;
