//! Body normalizer
//!
//! Drains a response stream exactly once and produces the canonical buffer.

use super::nil::strip_nil_elements;
use crate::config::EnvelopeConfig;
use crate::error::{Error, Result};
use crate::transport::BodyStream;
use crate::types::{is_gzip_encoding, CanonicalBuffer};
use flate2::read::GzDecoder;
use std::io::{self, Read};
use std::sync::Arc;
use tracing::{debug, warn};

/// Decompresses, buffers and nil-strips response bodies
#[derive(Debug, Clone)]
pub struct BodyNormalizer {
    strip_nil: bool,
    nil_attribute: String,
    max_body_bytes: Option<usize>,
}

impl Default for BodyNormalizer {
    fn default() -> Self {
        Self::from_config(&EnvelopeConfig::default())
    }
}

impl BodyNormalizer {
    /// Create a normalizer with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a normalizer from envelope settings
    pub fn from_config(config: &EnvelopeConfig) -> Self {
        Self {
            strip_nil: config.strip_nil_elements,
            nil_attribute: config.nil_attribute.clone(),
            max_body_bytes: config.max_body_bytes,
        }
    }

    /// Drain `body` and return its canonical form.
    ///
    /// The stream is consumed and dropped before this returns, on success
    /// and on failure alike.
    pub fn normalize(
        &self,
        body: BodyStream,
        content_encoding: Option<&str>,
    ) -> Result<CanonicalBuffer> {
        let gzip = content_encoding.is_some_and(is_gzip_encoding);

        let raw = if gzip {
            self.drain(GzDecoder::new(body), true)?
        } else {
            self.drain(body, false)?
        };

        let raw_len = raw.len();
        let canonical = self.canonicalize(raw);
        debug!(
            "Normalized body (gzip: {}): {} -> {} bytes",
            gzip,
            raw_len,
            canonical.len()
        );

        Ok(CanonicalBuffer::new(canonical))
    }

    /// Apply nil stripping to an already-buffered document.
    ///
    /// Malformed XML is returned unchanged.
    pub fn canonicalize(&self, raw: Vec<u8>) -> Vec<u8> {
        if !self.strip_nil {
            return raw;
        }

        match strip_nil_elements(&raw, &self.nil_attribute) {
            Ok(stripped) => stripped,
            Err(e) => {
                warn!("Nil stripping failed, keeping original body: {e}");
                raw
            }
        }
    }

    fn drain<R: Read>(&self, mut reader: R, gzip: bool) -> Result<Vec<u8>> {
        let mut buf = Vec::new();

        let read = match self.max_body_bytes {
            Some(limit) => (&mut reader)
                .take(limit as u64 + 1)
                .read_to_end(&mut buf),
            None => reader.read_to_end(&mut buf),
        };
        read.map_err(|e| read_error(e, gzip))?;

        if let Some(limit) = self.max_body_bytes {
            if buf.len() > limit {
                return Err(Error::BodyTooLarge { limit });
            }
        }

        Ok(buf)
    }
}

/// Classify a read failure: corrupt gzip data vs. a broken stream
fn read_error(err: io::Error, gzip: bool) -> Error {
    let corrupt = matches!(
        err.kind(),
        io::ErrorKind::InvalidData | io::ErrorKind::InvalidInput | io::ErrorKind::UnexpectedEof
    );
    if gzip && corrupt {
        Error::Decompression(Arc::new(err))
    } else {
        Error::Io(Arc::new(err))
    }
}
