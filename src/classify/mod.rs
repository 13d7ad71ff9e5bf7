//! Error classification module
//!
//! Decides whether a response is a gateway-reported error, a bare HTTP
//! failure or a success. Only an `<api-error-response>` document counts as
//! a structured error, and it always wins over the transport status: the
//! gateway can send a business error with a 2xx status.

mod classifier;
mod types;

pub use classifier::{classify, collect_validation_errors, API_ERROR_RESPONSE};
pub use types::{ApiError, HttpError, StructuredApiError, ValidationError};
