//! Caller-facing error taxonomy
//!
//! Gateway, hydration and configuration errors are flattened into one enum
//! so callers branch on the kind of failure, not on the crate it came from.

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Required settings are missing or invalid.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The caller violated an operation precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The API answered with a non-2xx status.
    #[error("API returned {status}: {body}")]
    Api { status: u16, body: Value },

    /// DNS, connection, TLS or timeout failure.
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The response was not the JSON shape the operation expects.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Hydration found a required field absent.
    #[error("{resource} response is missing required field `{field}`")]
    MissingField {
        resource: &'static str,
        field: &'static str,
    },
}

impl Error {
    /// HTTP status of an `Api` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<common::Error> for Error {
    fn from(err: common::Error) -> Self {
        match err {
            common::Error::Config(msg) => Error::Configuration(msg),
            other => Error::Configuration(other.to_string()),
        }
    }
}

impl From<gateway::Error> for Error {
    fn from(err: gateway::Error) -> Self {
        match err {
            gateway::Error::Config(inner) => inner.into(),
            gateway::Error::InvalidUrl(msg) => Error::Configuration(msg),
            gateway::Error::InvalidHeader(msg) => Error::InvalidArgument(msg),
            err @ gateway::Error::InvalidPathSegment(_) => Error::InvalidArgument(err.to_string()),
            gateway::Error::Api { status, body } => Error::Api { status, body },
            gateway::Error::Transport(msg) => Error::Transport(msg),
            gateway::Error::MalformedResponse(msg) => Error::MalformedResponse(msg),
        }
    }
}

impl From<resource::Error> for Error {
    fn from(err: resource::Error) -> Self {
        match err {
            resource::Error::MissingField { resource, field } => {
                Error::MissingField { resource, field }
            }
            resource::Error::MalformedResponse { resource, reason } => {
                Error::MalformedResponse(format!("{resource}: {reason}"))
            }
        }
    }
}

/// Result alias for API operations.
pub type Result<T> = std::result::Result<T, Error>;
