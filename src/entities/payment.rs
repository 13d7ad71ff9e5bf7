//! Payment method entities

use super::customer::Address;
use crate::decode::EntityKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored credit card (`<credit-card>`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CreditCard {
    pub token: Option<String>,
    pub customer_id: Option<String>,
    pub bin: Option<String>,
    pub last_4: Option<String>,
    pub card_type: Option<String>,
    pub expiration_month: Option<String>,
    pub expiration_year: Option<String>,
    pub cardholder_name: Option<String>,
    pub unique_number_identifier: Option<String>,
    pub default: Option<bool>,
    pub expired: Option<bool>,
    pub image_url: Option<String>,
    pub billing_address: Option<Address>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl CreditCard {
    /// Masked number as shown to customers, e.g. `411111******1111`
    pub fn masked_number(&self) -> Option<String> {
        match (&self.bin, &self.last_4) {
            (Some(bin), Some(last_4)) => Some(format!("{bin}******{last_4}")),
            _ => None,
        }
    }
}

/// Vaulted PayPal account (`<paypal-account>`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PayPalAccount {
    pub token: Option<String>,
    pub customer_id: Option<String>,
    pub email: Option<String>,
    pub billing_agreement_id: Option<String>,
    pub default: Option<bool>,
    pub image_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Vaulted Venmo account (`<venmo-account>`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VenmoAccount {
    pub token: Option<String>,
    pub customer_id: Option<String>,
    pub username: Option<String>,
    pub venmo_user_id: Option<String>,
    pub source_description: Option<String>,
    pub default: Option<bool>,
    pub image_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Google Pay card (`<android-pay-card>`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AndroidPayCard {
    pub token: Option<String>,
    pub customer_id: Option<String>,
    pub bin: Option<String>,
    pub card_type: Option<String>,
    pub last_4: Option<String>,
    pub source_card_type: Option<String>,
    pub source_card_last_4: Option<String>,
    pub virtual_card_type: Option<String>,
    pub virtual_card_last_4: Option<String>,
    pub source_description: Option<String>,
    pub expiration_month: Option<String>,
    pub expiration_year: Option<String>,
    pub google_transaction_id: Option<String>,
    pub default: Option<bool>,
    pub image_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Apple Pay card (`<apple-pay-card>`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApplePayCard {
    pub token: Option<String>,
    pub customer_id: Option<String>,
    pub bin: Option<String>,
    pub card_type: Option<String>,
    pub last_4: Option<String>,
    pub cardholder_name: Option<String>,
    pub payment_instrument_name: Option<String>,
    pub source_description: Option<String>,
    pub expiration_month: Option<String>,
    pub expiration_year: Option<String>,
    pub expired: Option<bool>,
    pub default: Option<bool>,
    pub image_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Any vaulted payment method, resolved from the response's root element
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard(CreditCard),
    PayPalAccount(PayPalAccount),
    VenmoAccount(VenmoAccount),
    AndroidPayCard(AndroidPayCard),
    ApplePayCard(ApplePayCard),
}

impl PaymentMethod {
    /// Entity kind this variant was decoded from
    pub fn kind(&self) -> EntityKind {
        match self {
            PaymentMethod::CreditCard(_) => EntityKind::CreditCard,
            PaymentMethod::PayPalAccount(_) => EntityKind::PayPalAccount,
            PaymentMethod::VenmoAccount(_) => EntityKind::VenmoAccount,
            PaymentMethod::AndroidPayCard(_) => EntityKind::AndroidPayCard,
            PaymentMethod::ApplePayCard(_) => EntityKind::ApplePayCard,
        }
    }

    /// Vault token
    pub fn token(&self) -> Option<&str> {
        match self {
            PaymentMethod::CreditCard(m) => m.token.as_deref(),
            PaymentMethod::PayPalAccount(m) => m.token.as_deref(),
            PaymentMethod::VenmoAccount(m) => m.token.as_deref(),
            PaymentMethod::AndroidPayCard(m) => m.token.as_deref(),
            PaymentMethod::ApplePayCard(m) => m.token.as_deref(),
        }
    }

    /// Owning customer
    pub fn customer_id(&self) -> Option<&str> {
        match self {
            PaymentMethod::CreditCard(m) => m.customer_id.as_deref(),
            PaymentMethod::PayPalAccount(m) => m.customer_id.as_deref(),
            PaymentMethod::VenmoAccount(m) => m.customer_id.as_deref(),
            PaymentMethod::AndroidPayCard(m) => m.customer_id.as_deref(),
            PaymentMethod::ApplePayCard(m) => m.customer_id.as_deref(),
        }
    }

    /// Whether this is the customer's default method
    pub fn is_default(&self) -> bool {
        let default = match self {
            PaymentMethod::CreditCard(m) => m.default,
            PaymentMethod::PayPalAccount(m) => m.default,
            PaymentMethod::VenmoAccount(m) => m.default,
            PaymentMethod::AndroidPayCard(m) => m.default,
            PaymentMethod::ApplePayCard(m) => m.default,
        };
        default.unwrap_or(false)
    }
}

/// One-time-use payment method reference (`<payment-method-nonce>`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PaymentMethodNonce {
    pub nonce: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub default: Option<bool>,
    pub consumed: Option<bool>,
    pub bin: Option<String>,
}
