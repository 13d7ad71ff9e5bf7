//! Error types for Solidafy Gateway
//!
//! This module defines the error hierarchy for the decoding layer.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! `Error` is `Clone` so that a failed normalization can be cached on the
//! envelope and handed to every later caller unchanged.

use crate::classify::ApiError;
use crate::envelope::ResponseEnvelope;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// The main error type for Solidafy Gateway
#[derive(Error, Debug, Clone)]
pub enum Error {
    // ============================================================================
    // Body Errors
    // ============================================================================
    #[error("Failed to read response body: {0}")]
    Io(Arc<std::io::Error>),

    #[error("Failed to decompress gzip body: {0}")]
    Decompression(Arc<std::io::Error>),

    #[error("Response body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },

    #[error("Response body has already been consumed")]
    BodyConsumed,

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("XML parsing error in {accessor}: {message}")]
    XmlParse {
        accessor: &'static str,
        message: String,
    },

    #[error("Unrecognized payment method {name:?}")]
    UnrecognizedEntity { name: String },

    // ============================================================================
    // Gateway Errors
    // ============================================================================
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    InvalidResponse(#[from] InvalidResponseError),

    #[error("Transport error: {message}")]
    Transport { message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl Error {
    /// Create an XML parse error for the given accessor
    pub fn xml_parse(accessor: &'static str, message: impl fmt::Display) -> Self {
        Self::XmlParse {
            accessor,
            message: message.to_string(),
        }
    }

    /// Create an unrecognized entity error
    pub fn unrecognized_entity(name: impl Into<String>) -> Self {
        Self::UnrecognizedEntity { name: name.into() }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create an invalid response error carrying the envelope
    pub fn invalid_response(envelope: Arc<ResponseEnvelope>) -> Self {
        Self::InvalidResponse(InvalidResponseError { envelope })
    }

    /// Status code reported by the gateway, if this error carries one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api(api) => Some(api.status_code()),
            Error::InvalidResponse(e) => Some(e.envelope.status()),
            _ => None,
        }
    }

    /// Check if this error is retryable
    ///
    /// Informational only; nothing in this crate retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Api(api) => is_retryable_status(api.status_code()),
            _ => false,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Raised when a response matches none of the shapes a caller expected.
///
/// Carries the whole envelope so the caller can inspect status, headers and
/// the canonical body.
#[derive(Clone)]
pub struct InvalidResponseError {
    envelope: Arc<ResponseEnvelope>,
}

impl InvalidResponseError {
    /// The response that could not be interpreted
    pub fn response(&self) -> &Arc<ResponseEnvelope> {
        &self.envelope
    }
}

impl fmt::Display for InvalidResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "gateway returned invalid response ({})",
            self.envelope.status()
        )
    }
}

impl fmt::Debug for InvalidResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvalidResponseError")
            .field("status", &self.envelope.status())
            .finish_non_exhaustive()
    }
}

impl std::error::Error for InvalidResponseError {}

/// Result type alias for Solidafy Gateway
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for turning foreign errors into [`Error::Config`] with context
pub(crate) trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::config(format!("{}: {e}", message.into())))
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| Error::config(format!("{}: {e}", f())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{HttpError, StructuredApiError};

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::unrecognized_entity("bank-account");
        assert_eq!(
            err.to_string(),
            "Unrecognized payment method \"bank-account\""
        );

        let err = Error::xml_parse("transaction", "unexpected end of file");
        assert_eq!(
            err.to_string(),
            "XML parsing error in transaction: unexpected end of file"
        );

        let err = Error::from(ApiError::Http(HttpError::new(404)));
        assert_eq!(err.to_string(), "Not Found (404)");
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::from(ApiError::Http(HttpError::new(503))).is_retryable());
        assert!(Error::from(ApiError::Http(HttpError::new(429))).is_retryable());
        assert!(Error::from(std::io::Error::other("reset")).is_retryable());

        assert!(!Error::from(ApiError::Http(HttpError::new(404))).is_retryable());
        assert!(!Error::from(ApiError::Structured(StructuredApiError::new(
            422,
            "Credit card number is invalid."
        )))
        .is_retryable());
        assert!(!Error::unrecognized_entity("x").is_retryable());
        assert!(!Error::BodyTooLarge { limit: 10 }.is_retryable());
    }

    #[test]
    fn test_status_code() {
        assert_eq!(
            Error::from(ApiError::Http(HttpError::new(500))).status_code(),
            Some(500)
        );
        assert_eq!(Error::config("x").status_code(), None);
    }

    #[test]
    fn test_result_context() {
        let result: std::result::Result<(), String> = Err("inner".to_string());
        let err = result.context("outer").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("outer: inner"));

        let result: std::result::Result<(), String> = Err("missing".to_string());
        let err = result.with_context(|| format!("file {}", 7)).unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: file 7: missing");
    }
}
