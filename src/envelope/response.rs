//! Response envelope implementation

use crate::classify::{classify, ApiError};
use crate::config::EnvelopeConfig;
use crate::decode::{decode_payment_method, decode_xml, sniff, sniff_kind, EntityKind};
use crate::entities::{
    AddOn, AddOnList, Address, AndroidPayCard, ApplePayCard, CreditCard, Customer, Discount,
    DiscountList, Dispute, DisputeEvidence, MerchantAccount, PayPalAccount, PaymentMethod,
    PaymentMethodNonce, SettlementBatchSummary, Subscription, Transaction, TransactionLineItem,
    TransactionLineItemList, VenmoAccount,
};
use crate::error::{Error, Result};
use crate::normalize::BodyNormalizer;
use crate::transport::{BodyStream, TransportResponse};
use crate::types::{CanonicalBuffer, CONTENT_ENCODING};
use once_cell::sync::OnceCell;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// One gateway response and its lazily normalized body
pub struct ResponseEnvelope {
    status: u16,
    headers: HeaderMap,
    /// Taken exactly once, by the first normalization
    body: Mutex<Option<BodyStream>>,
    normalizer: BodyNormalizer,
    /// Outcome of the one normalization, success or failure
    canonical: OnceCell<Result<CanonicalBuffer>>,
}

impl ResponseEnvelope {
    /// Wrap a transport response with default settings
    pub fn new(response: TransportResponse) -> Self {
        Self::with_config(response, &EnvelopeConfig::default())
    }

    /// Wrap a transport response
    pub fn with_config(response: TransportResponse, config: &EnvelopeConfig) -> Self {
        let (status, headers, body) = response.into_parts();
        Self {
            status,
            headers,
            body: Mutex::new(Some(body)),
            normalizer: BodyNormalizer::from_config(config),
            canonical: OnceCell::new(),
        }
    }

    /// HTTP status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Whether the body has been read (successfully or not)
    pub fn is_normalized(&self) -> bool {
        self.canonical.get().is_some()
    }

    /// Read and normalize the body if that has not happened yet.
    ///
    /// The stream is consumed by the first call only; concurrent callers
    /// block until it finishes and then share its result. A failure is
    /// cached and returned to every later caller.
    pub fn ensure_normalized(&self) -> Result<&CanonicalBuffer> {
        self.canonical
            .get_or_init(|| {
                let body = self
                    .body
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .take();

                match body {
                    Some(body) => {
                        debug!("Normalizing response body (status {})", self.status);
                        self.normalizer
                            .normalize(body, self.header(CONTENT_ENCODING))
                    }
                    None => Err(Error::BodyConsumed),
                }
            })
            .as_ref()
            .map_err(Error::clone)
    }

    /// Canonical body (normalizing on first use)
    pub fn body(&self) -> Result<&CanonicalBuffer> {
        self.ensure_normalized()
    }

    // ========================================================================
    // Classification
    // ========================================================================

    /// Error carried by this response, if any
    pub fn error(&self) -> Result<Option<ApiError>> {
        let buffer = self.ensure_normalized()?;
        Ok(classify(buffer.as_bytes(), self.status))
    }

    /// Gateway-call helper: surface API errors, decode on an accepted
    /// status, and report anything else as an invalid response.
    pub fn resolve<T, F>(self: &Arc<Self>, accepted: &[u16], decode: F) -> Result<T>
    where
        F: FnOnce(&Self) -> Result<T>,
    {
        if let Some(api_error) = self.error()? {
            return Err(Error::Api(api_error));
        }

        if accepted.contains(&self.status) {
            return decode(self);
        }

        debug!(
            "Status {} not among accepted {:?}, reporting invalid response",
            self.status, accepted
        );
        Err(self.invalid_response())
    }

    /// Invalid-response error carrying this envelope
    pub fn invalid_response(self: &Arc<Self>) -> Error {
        Error::invalid_response(Arc::clone(self))
    }

    // ========================================================================
    // Entity Sniffing
    // ========================================================================

    /// Root element name of the body
    pub fn entity_name(&self) -> Result<String> {
        sniff(self.ensure_normalized()?.as_bytes())
    }

    /// Root element classified as an entity kind
    pub fn entity_kind(&self) -> Result<EntityKind> {
        sniff_kind(self.ensure_normalized()?.as_bytes())
    }

    // ========================================================================
    // Typed Accessors
    // ========================================================================

    fn decode<T: DeserializeOwned>(&self, accessor: &'static str) -> Result<T> {
        decode_xml(self.ensure_normalized()?.as_bytes(), accessor)
    }

    /// Payment method of whichever kind the body holds
    pub fn payment_method(&self) -> Result<PaymentMethod> {
        decode_payment_method(self.ensure_normalized()?.as_bytes())
    }

    pub fn credit_card(&self) -> Result<CreditCard> {
        self.decode("credit_card")
    }

    pub fn paypal_account(&self) -> Result<PayPalAccount> {
        self.decode("paypal_account")
    }

    pub fn venmo_account(&self) -> Result<VenmoAccount> {
        self.decode("venmo_account")
    }

    pub fn android_pay_card(&self) -> Result<AndroidPayCard> {
        self.decode("android_pay_card")
    }

    pub fn apple_pay_card(&self) -> Result<ApplePayCard> {
        self.decode("apple_pay_card")
    }

    pub fn payment_method_nonce(&self) -> Result<PaymentMethodNonce> {
        self.decode("payment_method_nonce")
    }

    pub fn transaction(&self) -> Result<Transaction> {
        self.decode("transaction")
    }

    /// Line items of a transaction, in document order
    pub fn transaction_line_items(&self) -> Result<Vec<TransactionLineItem>> {
        self.decode::<TransactionLineItemList>("transaction_line_items")
            .map(|list| list.items)
    }

    pub fn customer(&self) -> Result<Customer> {
        self.decode("customer")
    }

    pub fn address(&self) -> Result<Address> {
        self.decode("address")
    }

    pub fn subscription(&self) -> Result<Subscription> {
        self.decode("subscription")
    }

    /// Add-ons, in document order
    pub fn add_ons(&self) -> Result<Vec<AddOn>> {
        self.decode::<AddOnList>("add_ons").map(|list| list.items)
    }

    /// Discounts, in document order
    pub fn discounts(&self) -> Result<Vec<Discount>> {
        self.decode::<DiscountList>("discounts").map(|list| list.items)
    }

    pub fn dispute(&self) -> Result<Dispute> {
        self.decode("dispute")
    }

    pub fn dispute_evidence(&self) -> Result<DisputeEvidence> {
        self.decode("dispute_evidence")
    }

    pub fn merchant_account(&self) -> Result<MerchantAccount> {
        self.decode("merchant_account")
    }

    pub fn settlement(&self) -> Result<SettlementBatchSummary> {
        self.decode("settlement")
    }
}

impl fmt::Debug for ResponseEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseEnvelope")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .field("canonical", &self.canonical.get())
            .finish_non_exhaustive()
    }
}
