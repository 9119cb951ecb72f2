//! Typed errors for the resource search library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.
//!
//! Parsing the completion prose is never an error: blocks that parse
//! badly degrade to fewer or less-complete resources. Only the
//! completion call itself can fail.

use thiserror::Error;

/// Errors that can occur during a resource search.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Required credential missing. Callers should surface this as
    /// "needs configuration", distinct from a transient failure.
    #[error("configuration error: {0}")]
    Config(String),

    /// Completion endpoint returned a non-2xx response. Retryable by
    /// the caller; this library performs no retries itself.
    #[error("completion service error ({status}): {body}")]
    Service { status: u16, body: String },

    /// Network or timeout failure reaching the completion endpoint.
    /// Retryable by the caller.
    #[error("network error: {0}")]
    Network(String),

    /// Completion response did not have the expected shape
    /// (no `choices[0].message.content`).
    #[error("malformed completion response: {0}")]
    Response(String),
}

/// Result type alias for resource search operations.
pub type Result<T> = std::result::Result<T, ResourceError>;
