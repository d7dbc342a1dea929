//! Error types for the posts client.
//!
//! # Design
//! Every failure collapses into one of four kinds. A 404 is an ordinary
//! `HttpStatus` failure; callers that care can ask `is_not_found`.

use thiserror::Error;

/// Errors returned by `PostsClient` parse methods and `PostsApi` operations.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, TLS, reset, body read).
    #[error("network error: {0}")]
    Network(#[from] ureq::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response body was not the expected JSON.
    #[error("deserialization failed: {0}")]
    Decode(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Encode(String),
}

/// Coarse classification of an `ApiError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    HttpStatus,
    Decode,
    Encode,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Network(_) => ErrorKind::Network,
            ApiError::HttpStatus { .. } => ErrorKind::HttpStatus,
            ApiError::Decode(_) => ErrorKind::Decode,
            ApiError::Encode(_) => ErrorKind::Encode,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::HttpStatus { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_an_http_status_failure() {
        let err = ApiError::HttpStatus {
            status: 404,
            body: "{}".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::HttpStatus);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "HTTP 404: {}");
    }

    #[test]
    fn decode_is_not_not_found() {
        let err = ApiError::Decode("expected value".to_string());
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert!(!err.is_not_found());
    }
}
