//! EventSubscriber port - interface for subscribing to domain events.
//!
//! Subscriptions are explicit: handlers are registered against a concrete
//! bus instance during application wiring, once, before any publish. There
//! is no global registry and no implicit per-aggregate handler list.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Handler for processing domain events.
///
/// Implementations should be:
/// - **Idempotent** - safe to call multiple times with the same event
/// - **Quick** - long operations belong behind the queue publisher
///
/// A returned error aborts delivery to later handlers for the same event
/// and surfaces at the publisher; handlers that must not block their
/// siblings catch their own errors.
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Process an event.
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Handler name for logging.
    fn name(&self) -> &'static str;
}

/// Port for subscribing to domain events.
pub trait EventSubscriber: Send + Sync {
    /// Subscribe a handler to a specific event type.
    ///
    /// The handler is invoked for every event matching the given type.
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>);

    /// Subscribe a handler to multiple event types.
    ///
    /// The same handler instance is invoked for any matching event type.
    fn subscribe_all(&self, event_types: &[&str], handler: Arc<dyn EventHandler>);
}
