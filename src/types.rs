//! Common types used throughout Solidafy Gateway
//!
//! Shared header names, status helpers and the canonical body buffer.

use bytes::Bytes;
use reqwest::StatusCode;
use std::fmt;

// ============================================================================
// HTTP Types
// ============================================================================

/// Header carrying the body's compression scheme
pub const CONTENT_ENCODING: &str = "content-encoding";

/// Reason phrase used for status codes without a standard one
pub const UNKNOWN_STATUS_REASON: &str = "Unknown Status";

/// Standard reason phrase for a status code (e.g. 404 -> "Not Found")
pub fn status_reason(status: u16) -> &'static str {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or(UNKNOWN_STATUS_REASON)
}

/// Whether the transport status indicates a failure
pub fn is_failure_status(status: u16) -> bool {
    status > 299
}

/// Whether a `Content-Encoding` value names gzip
pub fn is_gzip_encoding(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("gzip")
}

// ============================================================================
// Canonical Buffer
// ============================================================================

/// Decompressed, nil-stripped response body.
///
/// Immutable once produced; clones share the same allocation.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct CanonicalBuffer(Bytes);

impl CanonicalBuffer {
    /// Wrap already-normalized bytes
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    /// Raw bytes of the document
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Document as text, replacing invalid UTF-8
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for CanonicalBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CanonicalBuffer")
            .field(&String::from_utf8_lossy(&self.0))
            .finish()
    }
}
