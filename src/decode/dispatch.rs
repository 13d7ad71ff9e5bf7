//! Typed decoding and payment method dispatch

use super::sniff::sniff;
use super::types::{ANDROID_PAY_CARD, APPLE_PAY_CARD, CREDIT_CARD, PAYPAL_ACCOUNT, VENMO_ACCOUNT};
use crate::entities::PaymentMethod;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

type PaymentMethodDecoder = fn(&[u8]) -> Result<PaymentMethod>;

/// Root element name -> decoder for that payment method variant
static PAYMENT_METHOD_DECODERS: LazyLock<HashMap<&'static str, PaymentMethodDecoder>> =
    LazyLock::new(|| {
        let mut m: HashMap<&'static str, PaymentMethodDecoder> = HashMap::new();
        m.insert(CREDIT_CARD, credit_card);
        m.insert(PAYPAL_ACCOUNT, paypal_account);
        m.insert(VENMO_ACCOUNT, venmo_account);
        m.insert(ANDROID_PAY_CARD, android_pay_card);
        m.insert(APPLE_PAY_CARD, apple_pay_card);
        m
    });

fn credit_card(body: &[u8]) -> Result<PaymentMethod> {
    decode_xml(body, "credit_card").map(PaymentMethod::CreditCard)
}

fn paypal_account(body: &[u8]) -> Result<PaymentMethod> {
    decode_xml(body, "paypal_account").map(PaymentMethod::PayPalAccount)
}

fn venmo_account(body: &[u8]) -> Result<PaymentMethod> {
    decode_xml(body, "venmo_account").map(PaymentMethod::VenmoAccount)
}

fn android_pay_card(body: &[u8]) -> Result<PaymentMethod> {
    decode_xml(body, "android_pay_card").map(PaymentMethod::AndroidPayCard)
}

fn apple_pay_card(body: &[u8]) -> Result<PaymentMethod> {
    decode_xml(body, "apple_pay_card").map(PaymentMethod::ApplePayCard)
}

/// Decode a whole document into `T`.
///
/// The root element name is not checked; `accessor` labels any failure.
pub fn decode_xml<T: DeserializeOwned>(buffer: &[u8], accessor: &'static str) -> Result<T> {
    quick_xml::de::from_reader(buffer).map_err(|e| Error::xml_parse(accessor, e))
}

/// Decode a payment method, choosing the variant from the root element.
///
/// Unknown root elements fail with [`Error::UnrecognizedEntity`].
pub fn decode_payment_method(buffer: &[u8]) -> Result<PaymentMethod> {
    let name = sniff(buffer)?;
    let decoder = PAYMENT_METHOD_DECODERS
        .get(name.as_str())
        .ok_or_else(|| Error::unrecognized_entity(&name))?;

    debug!("Decoding payment method from <{name}>");
    decoder(buffer)
}
