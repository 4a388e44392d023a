//! Error types for the ticket job client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when fetching ticket jobs
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Body is not valid JSON
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Body is JSON but does not carry a ticket job sequence
    #[error("Unexpected response shape: {0}")]
    ShapeError(String),

    /// Request could not be built
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Network failure or non-2xx status
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::RequestFailed(_) | Self::ApiError { .. })
    }

    /// A response arrived but its body was unusable
    pub fn is_shape(&self) -> bool {
        matches!(self, Self::ParseError(_) | Self::ShapeError(_))
    }

    /// Short label for logs: `transport`, `shape` or `request`
    pub fn kind(&self) -> &'static str {
        if self.is_transport() {
            "transport"
        } else if self.is_shape() {
            "shape"
        } else {
            "request"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let api = ClientError::api_error(500, "boom");
        assert!(api.is_transport());
        assert!(!api.is_shape());
        assert_eq!(api.kind(), "transport");

        let shape = ClientError::ShapeError("missing ticketJobs".to_string());
        assert!(shape.is_shape());
        assert!(!shape.is_transport());
        assert_eq!(shape.kind(), "shape");

        let parse = ClientError::ParseError("expected value".to_string());
        assert_eq!(parse.kind(), "shape");

        let invalid = ClientError::InvalidRequest("bad base URL".to_string());
        assert_eq!(invalid.kind(), "request");
    }
}
