//! Internal error types for the filter-endpoint client.
//!
//! These errors are internal to `finder-client` and are mapped to core port
//! errors at the boundary.

use thiserror::Error;

/// Result type alias for filter-endpoint operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors related to the filter-endpoint API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint answered with a non-success HTTP status.
    #[error("filter request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Network or HTTP client error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The response body was not JSON.
    #[error("response is not JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_error_message() {
        let error = ApiError::RequestFailed {
            status: 503,
            url: "http://localhost:8080/servers/filter".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("/servers/filter"));
    }

    #[test]
    fn test_json_parse_error_message() {
        let parse_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error = ApiError::from(parse_err);
        assert!(error.to_string().contains("not JSON"));
    }
}
