//! Response decoder module
//!
//! # Overview
//!
//! Gateway responses carry no type hint beyond the document itself. The
//! root element name says what the body is:
//!
//! - [`sniff`] reads just that name with a shallow streaming parse
//! - [`decode_payment_method`] uses it to pick one of the payment method
//!   decoders from a fixed table
//! - [`decode_xml`] decodes into a shape the caller already knows

mod dispatch;
mod sniff;
mod types;

pub use dispatch::{decode_payment_method, decode_xml};
pub use sniff::{sniff, sniff_kind};
pub use types::EntityKind;
