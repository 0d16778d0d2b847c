//! Command infrastructure for handlers.
//!
//! Handlers accept a single `CommandMetadata` struct instead of loose
//! `correlation_id` / `user_id` parameters, keeping signatures stable as
//! context fields are added.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;

/// Metadata context for command handlers.
///
/// Carries the acting user and correlation context through the command
/// pipeline; handlers propagate it onto the events they publish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// The user executing this command.
    pub user_id: UserId,

    /// Links related operations across a single request.
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    /// Source of this command (e.g. "api", "scheduler").
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            correlation_id: None,
            source: None,
        }
    }

    /// Builder: add a correlation id for request tracing.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Builder: add a source identifier.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the correlation id, generating one if not set.
    ///
    /// Every command gets a correlation id for tracing even when the
    /// caller didn't provide one.
    pub fn correlation_id(&self) -> String {
        self.correlation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    /// Returns the correlation id only if explicitly set.
    pub fn correlation_id_opt(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    /// Returns the source if set.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_carries_only_the_user_id() {
        let metadata = CommandMetadata::new(UserId::new("user-123"));
        assert_eq!(metadata.user_id.as_str(), "user-123");
        assert!(metadata.correlation_id_opt().is_none());
        assert!(metadata.source().is_none());
    }

    #[test]
    fn builder_chain_sets_all_fields() {
        let metadata = CommandMetadata::new(UserId::new("user-456"))
            .with_correlation_id("corr-123")
            .with_source("api");

        assert_eq!(metadata.correlation_id_opt(), Some("corr-123"));
        assert_eq!(metadata.source(), Some("api"));
    }

    #[test]
    fn correlation_id_is_generated_when_missing() {
        let metadata = CommandMetadata::new(UserId::new("user-789"));
        assert!(!metadata.correlation_id().is_empty());
    }
}
