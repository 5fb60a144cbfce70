//! Catalog store error types.
//!
//! The store boundary reports failures through structured kinds so callers
//! (notably the bulk-import driver) branch on variants, never on message
//! substrings.

use std::sync::Arc;

/// Errors from catalog store implementations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// Unique-constraint conflict, e.g. a listing URL that already exists.
    #[error("duplicate entry")]
    Duplicate,

    /// The store rejected the record contents.
    #[error("validation failed: {0}")]
    Validation(String),

    /// No record with the given id or slug.
    #[error("not found: {0}")]
    NotFound(String),

    /// Authentication failed (invalid API key).
    #[error("authentication failed: invalid API key")]
    Auth,

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Unclassified HTTP error response.
    #[error("HTTP error: {status}")]
    Http { status: u16 },

    /// Response parse error.
    #[error("parse error: {0}")]
    Parse(String),

    /// No remote store is configured.
    #[error("catalog store not configured")]
    NotConfigured,
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { StoreError::Timeout } else { StoreError::Network(Arc::new(err)) }
    }
}
