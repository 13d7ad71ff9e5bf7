//! Response envelope module
//!
//! [`ResponseEnvelope`] wraps one transport response and exposes a typed
//! accessor per gateway entity plus [`ResponseEnvelope::error`]. The body is
//! normalized lazily, at most once, and shared by every accessor.

mod response;

pub use response::ResponseEnvelope;
