//! Error types for gateway operations

use serde_json::Value;

/// Errors from issuing a request to the API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] common::Error),

    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("invalid authorization header: {0}")]
    InvalidHeader(String),

    /// An id that cannot stand as a single path segment.
    #[error("invalid path segment: {0:?}")]
    InvalidPathSegment(String),

    /// The API answered with a non-2xx status.
    #[error("API returned {status}: {body}")]
    Api { status: u16, body: Value },

    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Result alias for gateway operations.
pub type Result<T> = std::result::Result<T, Error>;
