//! Error types for the Perimeter Admin client
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! A failed page fetch aborts the whole retrieval; the pagination driver
//! never wraps or retries errors, so what the transport raises is what the
//! caller sees.

use thiserror::Error;

/// The main error type for the Perimeter Admin client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Rate limited, retry after {retry_after_seconds}s")]
    RateLimited { retry_after_seconds: u64 },

    #[error("Max retries ({max_retries}) exceeded")]
    MaxRetriesExceeded { max_retries: u32 },

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // API Errors (stat: FAIL envelopes)
    // ============================================================================
    #[error("API error {code}: {message}")]
    Api {
        code: u64,
        message: String,
        message_detail: Option<String>,
    },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an API error from a FAIL envelope
    pub fn api(code: u64, message: impl Into<String>, message_detail: Option<String>) -> Self {
        Self::Api {
            code,
            message: message.into(),
            message_detail,
        }
    }

    /// Check if this error is retryable at the transport layer
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::RateLimited { .. } => true,
            Error::HttpStatus { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
pub(crate) fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for the Perimeter Admin client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_error_display() {
        let err = Error::config("missing host");
        assert_eq!(err.to_string(), "Configuration error: missing host");

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::api(40002, "Invalid request parameters", None);
        assert_eq!(err.to_string(), "API error 40002: Invalid request parameters");
    }

    #[test_case(429, true; "too many requests")]
    #[test_case(500, true; "internal server error")]
    #[test_case(502, true; "bad gateway")]
    #[test_case(503, true; "service unavailable")]
    #[test_case(504, true; "gateway timeout")]
    #[test_case(400, false; "bad request")]
    #[test_case(401, false; "unauthorized")]
    #[test_case(404, false; "not found")]
    fn test_retryable_status(status: u16, expected: bool) {
        assert_eq!(is_retryable_status(status), expected);
        assert_eq!(Error::http_status(status, "").is_retryable(), expected);
    }

    #[test]
    fn test_api_errors_are_not_retryable() {
        assert!(!Error::api(40101, "Missing request credentials", None).is_retryable());
        assert!(!Error::config("bad").is_retryable());
    }

    #[test]
    fn test_rate_limited_is_retryable() {
        assert!(Error::RateLimited {
            retry_after_seconds: 60
        }
        .is_retryable());
    }
}
