//! Transport response module
//!
//! The decoding layer does not make requests. It consumes whatever the
//! transport hands it: a status code, case-insensitive headers and a body
//! stream that can be read exactly once.

mod response;

pub use response::{BodyStream, TransportResponse};

#[cfg(test)]
mod tests;
