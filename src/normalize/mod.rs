//! Body normalization module
//!
//! Turns a raw response stream into the canonical buffer every decoder reads:
//!
//! 1. gzip bodies (per `Content-Encoding`) are decompressed
//! 2. the body is buffered, optionally up to a size limit
//! 3. nil-marked elements are removed so they decode as absent

mod nil;
mod normalizer;

pub use nil::strip_nil_elements;
pub use normalizer::BodyNormalizer;
