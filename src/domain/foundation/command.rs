//! Command infrastructure for application handlers.
//!
//! Every command handler receives a `CommandMetadata` alongside its command
//! instead of a loose list of user id, correlation id and source arguments.

use serde::{Deserialize, Serialize};

use super::UserId;

/// Metadata context for command handlers.
///
/// Carries the acting user and request correlation through the command
/// pipeline so that log lines emitted by handlers can be tied back to the
/// HTTP request that caused them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// The user executing this command.
    pub user_id: UserId,

    /// Request id propagated from the `x-request-id` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    /// Source of this command (e.g. "http").
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    /// Creates new command metadata with required user ID.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            correlation_id: None,
            source: None,
        }
    }

    /// Builder: Add correlation ID for request tracing.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Builder: Add source identifier.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the correlation ID, or `"-"` when none was supplied.
    pub fn correlation_id(&self) -> &str {
        self.correlation_id.as_deref().unwrap_or("-")
    }

    /// Returns the correlation ID only if explicitly set.
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

    fn user() -> UserId {
        UserId::new(7).unwrap()
    }

    #[test]
    fn new_creates_with_user_id() {
        let metadata = CommandMetadata::new(user());

        assert_eq!(metadata.user_id, user());
        assert!(metadata.correlation_id_opt().is_none());
        assert!(metadata.source().is_none());
    }

    #[test]
    fn builder_chain_sets_all_fields() {
        let metadata = CommandMetadata::new(user())
            .with_correlation_id("corr-123")
            .with_source("http");

        assert_eq!(metadata.correlation_id(), "corr-123");
        assert_eq!(metadata.source(), Some("http"));
    }

    #[test]
    fn correlation_id_falls_back_to_placeholder() {
        let metadata = CommandMetadata::new(user());
        assert_eq!(metadata.correlation_id(), "-");
    }

    #[test]
    fn serialization_omits_unset_fields() {
        let metadata = CommandMetadata::new(user());
        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json, serde_json::json!({ "user_id": 7 }));
    }
}
