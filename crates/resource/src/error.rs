//! Error types for resource hydration

/// Errors from turning a response body into a typed resource.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{resource} response is missing required field `{field}`")]
    MissingField {
        resource: &'static str,
        field: &'static str,
    },

    #[error("malformed {resource} response: {reason}")]
    MalformedResponse {
        resource: &'static str,
        reason: String,
    },
}

impl Error {
    pub(crate) fn malformed(resource: &'static str, reason: impl Into<String>) -> Self {
        Error::MalformedResponse {
            resource,
            reason: reason.into(),
        }
    }
}

/// Result alias for hydration.
pub type Result<T> = std::result::Result<T, Error>;
