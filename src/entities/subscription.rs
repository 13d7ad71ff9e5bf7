//! Subscription entities and their modifications

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Recurring billing subscription (`<subscription>`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Subscription {
    pub id: Option<String>,
    pub plan_id: Option<String>,
    pub status: Option<String>,
    pub price: Option<String>,
    pub balance: Option<String>,
    pub payment_method_token: Option<String>,
    pub merchant_account_id: Option<String>,
    pub number_of_billing_cycles: Option<u32>,
    pub current_billing_cycle: Option<u32>,
    pub billing_day_of_month: Option<u32>,
    pub failure_count: Option<u32>,
    pub never_expires: Option<bool>,
    pub trial_period: Option<bool>,
    pub trial_duration: Option<u32>,
    pub trial_duration_unit: Option<String>,
    pub first_billing_date: Option<NaiveDate>,
    pub next_billing_date: Option<NaiveDate>,
    pub paid_through_date: Option<NaiveDate>,
    #[serde(default)]
    pub add_ons: AddOnList,
    #[serde(default)]
    pub discounts: DiscountList,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Price increase applied to a plan or subscription (`<add-on>`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AddOn {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub amount: Option<String>,
    pub quantity: Option<u32>,
    pub number_of_billing_cycles: Option<u32>,
    pub current_billing_cycle: Option<u32>,
    pub never_expires: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Price reduction applied to a plan or subscription (`<discount>`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Discount {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub amount: Option<String>,
    pub quantity: Option<u32>,
    pub number_of_billing_cycles: Option<u32>,
    pub current_billing_cycle: Option<u32>,
    pub never_expires: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// `<add-ons type="array">`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AddOnList {
    #[serde(rename = "add-on", default)]
    pub items: Vec<AddOn>,
}

/// `<discounts type="array">`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DiscountList {
    #[serde(rename = "discount", default)]
    pub items: Vec<Discount>,
}
