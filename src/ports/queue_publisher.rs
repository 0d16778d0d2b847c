//! QueuePublisher port - hand-off to asynchronous processing.
//!
//! Domain events that need out-of-process work (emails, analytics) are
//! forwarded here by a bus handler at the orchestration boundary; the
//! domain itself never sees this port.

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::domain::foundation::DomainError;

/// Port for publishing messages onto a named queue.
#[async_trait]
pub trait QueuePublisher: Send + Sync {
    /// Publish a payload onto the given queue.
    ///
    /// # Errors
    ///
    /// - `QueueError` if the message cannot be enqueued
    async fn publish(&self, queue: &str, payload: JsonValue) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_publisher_is_object_safe() {
        fn _accepts_dyn(_publisher: &dyn QueuePublisher) {}
    }
}
