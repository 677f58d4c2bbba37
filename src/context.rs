//! Per-dispatch context handed to every handler.

use std::collections::HashMap;

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Ambient state for one dispatch.
///
/// Carries a correlation id for logs, the cancellation token propagated by
/// the externally-owned dispatch mechanism, and a free-form metadata map
/// for cross-cutting concerns.
///
/// Cloning is cheap and shares the cancellation token, so a context can be
/// passed down through decorators while the original keeps observing the
/// same cancellation state.
#[derive(Debug, Clone)]
pub struct RequestContext {
    request_id: String,
    cancellation: CancellationToken,
    metadata: HashMap<String, String>,
}

impl RequestContext {
    /// Create a context with a generated request id and a fresh token.
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            cancellation: CancellationToken::new(),
            metadata: HashMap::new(),
        }
    }

    /// Replace the generated request id.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }

    /// Propagate an externally-owned cancellation token.
    pub fn with_token(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Add metadata.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// The correlation id for this dispatch.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// The cancellation token for this dispatch.
    pub fn token(&self) -> &CancellationToken {
        &self.cancellation
    }

    /// Whether this dispatch has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// Get metadata value.
    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// Set metadata value.
    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
