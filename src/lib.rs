// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # Solidafy Gateway
//!
//! Response decoding for XML payment-gateway APIs.
//!
//! A gateway response arrives as (possibly gzip-compressed) XML with no type
//! hint other than its root element. This crate turns it into either a typed
//! entity or a classified error.
//!
//! ## Features
//!
//! - **Body Normalization**: gzip unwrapping and nil-element stripping, run once per response
//! - **Entity Sniffing**: root element detection without a full parse
//! - **Payment Method Dispatch**: credit card, PayPal, Venmo, Google Pay and Apple Pay
//! - **Error Classification**: structured gateway errors vs. bare HTTP failures
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use solidafy_gateway::{Error, ResponseEnvelope, Result, TransportResponse};
//! use std::sync::Arc;
//!
//! async fn find_customer(client: &reqwest::Client, url: &str) -> Result<()> {
//!     let response = client.get(url).send().await.map_err(|e| Error::transport(e.to_string()))?;
//!     let envelope = Arc::new(ResponseEnvelope::new(TransportResponse::from_reqwest(response).await?));
//!
//!     // API errors first, then the typed payload
//!     let customer = envelope.resolve(&[200], ResponseEnvelope::customer)?;
//!     println!("{:?}", customer.email);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      ResponseEnvelope                        │
//! │  ensure_normalized() → CanonicalBuffer     error() → ApiError│
//! │  payment_method()  transaction()  customer()  ...            │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────────┬──────────────┴──────┬─────────────────────────┐
//! │  Normalize   │       Decode        │        Classify         │
//! ├──────────────┼─────────────────────┼─────────────────────────┤
//! │ gzip         │ sniff root element  │ structured error body   │
//! │ size limit   │ payment method table│ HTTP status > 299       │
//! │ nil stripping│ typed entity decode │ validation errors       │
//! └──────────────┴─────────────────────┴─────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and helpers
pub mod types;

/// Envelope configuration
pub mod config;

/// Transport response wrapper
pub mod transport;

/// Body decompression and nil stripping
pub mod normalize;

/// Gateway domain entities
pub mod entities;

/// Root element sniffing and typed decoding
pub mod decode;

/// Error classification
pub mod classify;

/// Response envelope orchestration
pub mod envelope;

// ============================================================================
// Re-exports
// ============================================================================

pub use classify::{ApiError, HttpError, StructuredApiError, ValidationError};
pub use config::EnvelopeConfig;
pub use decode::EntityKind;
pub use entities::PaymentMethod;
pub use envelope::ResponseEnvelope;
pub use error::{Error, InvalidResponseError, Result};
pub use transport::TransportResponse;
pub use types::CanonicalBuffer;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
