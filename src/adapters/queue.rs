//! Queue adapters.
//!
//! `QueueForwardingHandler` is the translation step between in-process
//! domain events and cross-process queue delivery: it subscribes to the
//! event bus like any other handler and re-publishes the envelope onto a
//! named queue. Aggregates stay ignorant of the transport.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::debug;

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::{EventHandler, QueuePublisher};

/// A message captured by the in-memory queue.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueMessage {
    pub queue: String,
    pub payload: JsonValue,
}

/// In-memory queue publisher for tests and single-process deployments.
pub struct InMemoryQueuePublisher {
    messages: Mutex<Vec<QueueMessage>>,
}

impl InMemoryQueuePublisher {
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
        }
    }

    /// Returns all captured messages.
    pub fn messages(&self) -> Vec<QueueMessage> {
        self.messages
            .lock()
            .expect("InMemoryQueuePublisher lock poisoned")
            .clone()
    }

    /// Returns messages on a specific queue.
    pub fn messages_on(&self, queue: &str) -> Vec<QueueMessage> {
        self.messages()
            .into_iter()
            .filter(|message| message.queue == queue)
            .collect()
    }
}

impl Default for InMemoryQueuePublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QueuePublisher for InMemoryQueuePublisher {
    async fn publish(&self, queue: &str, payload: JsonValue) -> Result<(), DomainError> {
        self.messages
            .lock()
            .expect("InMemoryQueuePublisher lock poisoned")
            .push(QueueMessage {
                queue: queue.to_string(),
                payload,
            });
        Ok(())
    }
}

/// Event handler that forwards envelopes onto a queue.
///
/// Wire it to the bus once at startup for the event types that need
/// out-of-process processing.
pub struct QueueForwardingHandler {
    queue: String,
    publisher: Arc<dyn QueuePublisher>,
}

impl QueueForwardingHandler {
    pub fn new(queue: impl Into<String>, publisher: Arc<dyn QueuePublisher>) -> Self {
        Self {
            queue: queue.into(),
            publisher,
        }
    }
}

#[async_trait]
impl EventHandler for QueueForwardingHandler {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        let payload = serde_json::to_value(&event).map_err(|error| {
            DomainError::new(
                ErrorCode::QueueError,
                format!("failed to serialize envelope: {error}"),
            )
        })?;

        debug!(queue = %self.queue, event_type = %event.event_type, "forwarding event to queue");
        self.publisher.publish(&self.queue, payload).await
    }

    fn name(&self) -> &'static str {
        "QueueForwardingHandler"
    }
}
