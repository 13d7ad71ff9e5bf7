//! Transaction entities

use super::customer::Address;
use super::payment::CreditCard;
use super::subscription::{AddOnList, DiscountList};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sale or credit (`<transaction>`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Transaction {
    pub id: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub amount: Option<String>,
    pub currency_iso_code: Option<String>,
    pub order_id: Option<String>,
    pub merchant_account_id: Option<String>,
    pub subscription_id: Option<String>,
    pub payment_instrument_type: Option<String>,
    pub processor_response_code: Option<String>,
    pub processor_response_text: Option<String>,
    pub gateway_rejection_reason: Option<String>,
    pub tax_amount: Option<String>,
    pub credit_card: Option<CreditCard>,
    #[serde(rename = "billing")]
    pub billing_address: Option<Address>,
    #[serde(rename = "shipping")]
    pub shipping_address: Option<Address>,
    #[serde(default)]
    pub add_ons: AddOnList,
    #[serde(default)]
    pub discounts: DiscountList,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Level 3 line item (`<line-item>`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TransactionLineItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub kind: Option<String>,
    pub quantity: Option<String>,
    pub unit_amount: Option<String>,
    pub unit_tax_amount: Option<String>,
    pub unit_of_measure: Option<String>,
    pub discount_amount: Option<String>,
    pub tax_amount: Option<String>,
    pub total_amount: Option<String>,
    pub product_code: Option<String>,
    pub commodity_code: Option<String>,
    pub url: Option<String>,
}

/// `<line-items type="array">`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransactionLineItemList {
    #[serde(rename = "line-item", default)]
    pub items: Vec<TransactionLineItem>,
}
