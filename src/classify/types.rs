//! Classified error types

use crate::types::status_reason;
use serde::Serialize;
use thiserror::Error;

/// Error reported for a response, either by the gateway or by the transport
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Gateway returned an error body with a message
    #[error(transparent)]
    Structured(StructuredApiError),

    /// Failure status without a recognizable error body
    #[error(transparent)]
    Http(HttpError),
}

impl ApiError {
    /// Transport status code of the response
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Structured(e) => e.status,
            ApiError::Http(e) => e.status,
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, ApiError::Structured(_))
    }
}

/// `<api-error-response>` style error with a human-readable message
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
pub struct StructuredApiError {
    pub status: u16,
    pub message: String,
    /// Per-field validation failures, in document order
    pub validation_errors: Vec<ValidationError>,
}

impl StructuredApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            validation_errors: Vec::new(),
        }
    }

    /// Attach validation errors
    #[must_use]
    pub fn with_validation_errors(mut self, errors: Vec<ValidationError>) -> Self {
        self.validation_errors = errors;
        self
    }

    /// Validation errors reported against `attribute`
    pub fn for_attribute<'a>(
        &'a self,
        attribute: &'a str,
    ) -> impl Iterator<Item = &'a ValidationError> + 'a {
        self.validation_errors
            .iter()
            .filter(move |e| e.attribute.as_deref() == Some(attribute))
    }
}

/// Failure status with its standard reason phrase, e.g. `Not Found (404)`
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{reason} ({status})")]
pub struct HttpError {
    pub status: u16,
    pub reason: &'static str,
}

impl HttpError {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            reason: status_reason(status),
        }
    }
}

/// Single `<error>` entry of a structured error body
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationError {
    pub code: Option<String>,
    pub attribute: Option<String>,
    pub message: Option<String>,
    /// Enclosing entity names, outermost first (e.g. `transaction`, `credit-card`)
    pub path: Vec<String>,
}
