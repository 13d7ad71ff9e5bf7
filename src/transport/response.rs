//! Transport response wrapper
//!
//! Owns the pieces of an HTTP response the decoding layer needs.

use crate::error::{Error, Result};
use crate::types::CONTENT_ENCODING;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::fmt;
use std::io::{Cursor, Read};
use tracing::debug;

/// Single-read response body
pub type BodyStream = Box<dyn Read + Send>;

/// Raw response as delivered by the transport
pub struct TransportResponse {
    status: u16,
    headers: HeaderMap,
    body: BodyStream,
}

impl TransportResponse {
    /// Create a response from a status code and a body stream
    pub fn new(status: u16, body: impl Read + Send + 'static) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Box::new(body),
        }
    }

    /// Create a response whose body is already in memory
    pub fn from_bytes(status: u16, body: impl Into<Bytes>) -> Self {
        Self::new(status, Cursor::new(body.into()))
    }

    /// Collect a reqwest response into a transport response.
    ///
    /// The body is taken verbatim; the client must not decompress it
    /// (reqwest's `gzip` feature stays off) so `Content-Encoding` still
    /// describes the bytes.
    pub async fn from_reqwest(response: reqwest::Response) -> Result<Self> {
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::transport(format!("Failed to collect response body: {e}")))?;

        debug!("Collected {} byte response body (status {})", body.len(), status);

        Ok(Self::from_bytes(status, body).with_headers(headers))
    }

    /// Replace all headers
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Add a header
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self> {
        let name = HeaderName::try_from(name)
            .map_err(|e| Error::transport(format!("Invalid header name '{name}': {e}")))?;
        let value = HeaderValue::try_from(value).map_err(|e| {
            Error::transport(format!("Invalid header value for '{}': {e}", name.as_str()))
        })?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// HTTP status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// All response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Value of the `Content-Encoding` header
    pub fn content_encoding(&self) -> Option<&str> {
        self.header(CONTENT_ENCODING)
    }

    /// Split into status, headers and body
    pub fn into_parts(self) -> (u16, HeaderMap, BodyStream) {
        (self.status, self.headers, self.body)
    }
}

impl fmt::Debug for TransportResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}
