//! Calculation client errors.

use thiserror::Error;

/// Result type for client operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the calculation client.
///
/// `Clone` because outcomes travel inside form events.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Service answered with a non-success status. The code is kept for
    /// logging only; the message shown to users is always the same.
    #[error("Calculation failed")]
    HttpStatus { status: u16 },

    /// Connection, TLS, timeout or body read failure.
    #[error("{message}")]
    Transport { message: String },

    /// Body did not match the response schema.
    #[error("Malformed response: {reason}")]
    MalformedResponse { reason: String },

    /// Client could not be built from the given configuration.
    #[error("Invalid client configuration: {message}")]
    InvalidConfig { message: String },
}

impl ApiError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        ApiError::MalformedResponse {
            reason: reason.into(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_hides_code() {
        let err = ApiError::HttpStatus { status: 503 };
        assert_eq!(err.to_string(), "Calculation failed");
    }

    #[test]
    fn malformed_reason_is_shown() {
        let err = ApiError::malformed("missing `status`");
        assert!(err.to_string().contains("missing `status`"));
    }
}
