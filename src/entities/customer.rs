//! Customer and address entities

use super::payment::{CreditCard, PayPalAccount};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Vault customer (`<customer>`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Customer {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub credit_cards: CreditCardList,
    #[serde(default)]
    pub paypal_accounts: PayPalAccountList,
    #[serde(default)]
    pub addresses: AddressList,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Customer {
    /// Default credit card, if any
    pub fn default_credit_card(&self) -> Option<&CreditCard> {
        self.credit_cards
            .items
            .iter()
            .find(|card| card.default.unwrap_or(false))
    }
}

/// Postal address (`<address>`, also nested as billing/shipping)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Address {
    pub id: Option<String>,
    pub customer_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub street_address: Option<String>,
    pub extended_address: Option<String>,
    pub locality: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country_code_alpha2: Option<String>,
    pub country_name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// `<credit-cards type="array">`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreditCardList {
    #[serde(rename = "credit-card", default)]
    pub items: Vec<CreditCard>,
}

/// `<paypal-accounts type="array">`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PayPalAccountList {
    #[serde(rename = "paypal-account", default)]
    pub items: Vec<PayPalAccount>,
}

/// `<addresses type="array">`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AddressList {
    #[serde(rename = "address", default)]
    pub items: Vec<Address>,
}
