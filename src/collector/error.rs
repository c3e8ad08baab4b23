//! Error types for form submission

use thiserror::Error;

/// Errors that can occur while submitting the form to the collector.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The payload could not be encoded as JSON.
    #[error("failed to serialize payload: {0}")]
    Serialize(String),

    /// The request never produced a response (DNS, connection, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not JSON.
    #[error("invalid response body: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SubmitError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}

/// Result type alias for submissions.
pub type Result<T> = std::result::Result<T, SubmitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_display() {
        let err = SubmitError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "network error: connection refused");
    }

    #[test]
    fn test_json_error_maps_to_invalid_response() {
        let err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = SubmitError::from(err);
        assert!(matches!(err, SubmitError::InvalidResponse(_)));
    }
}
