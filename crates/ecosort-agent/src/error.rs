//! Error types for the completion-service boundary.

use thiserror::Error;

/// Failures of the external completion service or its configuration.
///
/// These never escape a message handler: the gateway's callers convert them
/// to a fixed apology text, the model classifier converts them to `None`.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Missing or invalid configuration (API key, endpoint).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The HTTP request failed (network error or timeout).
    #[error("completion request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status.
    #[error("completion service error {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, for the diagnostic log.
        body: String,
    },

    /// The response body could not be parsed.
    #[error("malformed completion response: {0}")]
    MalformedResponse(String),

    /// The response parsed but contained no generated text.
    #[error("completion response contained no choices")]
    EmptyResponse,
}

/// Result type for completion-service operations.
pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GatewayError::Api {
            status: 503,
            body: "overloaded".into(),
        };
        assert_eq!(err.to_string(), "completion service error 503: overloaded");

        let err = GatewayError::Configuration("missing LLM_API_KEY".into());
        assert!(err.to_string().contains("LLM_API_KEY"));
    }
}
