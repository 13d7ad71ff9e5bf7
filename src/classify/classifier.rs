//! Response classifier

use super::types::{ApiError, HttpError, StructuredApiError, ValidationError};
use crate::decode::{decode_xml, sniff};
use crate::error::{Error, Result};
use crate::types::is_failure_status;
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;
use tracing::debug;

const ACCESSOR: &str = "api_error";

/// Root element of the gateway's error envelope
pub const API_ERROR_RESPONSE: &str = "api-error-response";

/// Only the root-level message matters for classification
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    message: Option<String>,
}

/// Classify a response.
///
/// 1. an `<api-error-response>` document with a non-empty `<message>` is a
///    structured error, whatever the status
/// 2. otherwise a status above 299 is an HTTP error
/// 3. otherwise the response is a success (`None`)
pub fn classify(buffer: &[u8], status: u16) -> Option<ApiError> {
    let is_error_envelope = sniff(buffer).is_ok_and(|root| root == API_ERROR_RESPONSE);

    let message = is_error_envelope
        .then(|| decode_xml::<ErrorEnvelope>(buffer, ACCESSOR).ok())
        .flatten()
        .and_then(|envelope| envelope.message)
        .filter(|message| !message.is_empty());

    if let Some(message) = message {
        let validation_errors = collect_validation_errors(buffer).unwrap_or_else(|e| {
            debug!("Could not collect validation errors: {e}");
            Vec::new()
        });
        debug!(
            "Classified structured API error (status {}, {} validation errors)",
            status,
            validation_errors.len()
        );
        return Some(ApiError::Structured(
            StructuredApiError::new(status, message).with_validation_errors(validation_errors),
        ));
    }

    if is_failure_status(status) {
        debug!("Classified bare HTTP error (status {})", status);
        return Some(ApiError::Http(HttpError::new(status)));
    }

    None
}

/// Collect every `<error>` listed under an `<errors>` element.
///
/// Each entry records the entity names enclosing it, skipping the document
/// root and the `errors` containers themselves.
pub fn collect_validation_errors(buffer: &[u8]) -> Result<Vec<ValidationError>> {
    let mut reader = Reader::from_reader(buffer);
    let mut stack: Vec<String> = Vec::new();
    let mut errors = Vec::new();
    let mut current: Option<ValidationError> = None;
    let mut field: Option<String> = None;

    loop {
        match reader
            .read_event()
            .map_err(|e| Error::xml_parse(ACCESSOR, e))?
        {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();

                if current.is_none()
                    && name == "error"
                    && stack.last().map(String::as_str) == Some("errors")
                {
                    current = Some(ValidationError {
                        path: stack
                            .iter()
                            .skip(1)
                            .filter(|n| n.as_str() != "errors")
                            .cloned()
                            .collect(),
                        ..ValidationError::default()
                    });
                } else if current.is_some() && stack.last().map(String::as_str) == Some("error") {
                    field = Some(name.clone());
                }

                stack.push(name);
            }
            Event::Text(t) => {
                if let (Some(error), Some(field)) = (current.as_mut(), field.as_deref()) {
                    let text = t
                        .unescape()
                        .map_err(|e| Error::xml_parse(ACCESSOR, e))?
                        .trim()
                        .to_string();
                    match field {
                        "code" => error.code = Some(text),
                        "attribute" => error.attribute = Some(text),
                        "message" => error.message = Some(text),
                        _ => {}
                    }
                }
            }
            Event::End(_) => {
                let closed = stack.pop();
                if field.is_some() && closed == field {
                    field = None;
                } else if closed.as_deref() == Some("error") {
                    if let Some(error) = current.take() {
                        errors.push(error);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(errors)
}
