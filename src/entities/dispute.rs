//! Dispute entities

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Chargeback or retrieval request (`<dispute>`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Dispute {
    pub id: Option<String>,
    pub case_number: Option<String>,
    pub kind: Option<String>,
    pub status: Option<String>,
    pub reason: Option<String>,
    pub reason_code: Option<String>,
    pub reason_description: Option<String>,
    pub amount_disputed: Option<String>,
    pub amount_won: Option<String>,
    pub currency_iso_code: Option<String>,
    pub merchant_account_id: Option<String>,
    pub received_date: Option<NaiveDate>,
    pub reply_by_date: Option<NaiveDate>,
    pub transaction: Option<DisputeTransaction>,
    #[serde(default)]
    pub evidence: DisputeEvidenceList,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Transaction summary embedded in a dispute
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DisputeTransaction {
    pub id: Option<String>,
    pub amount: Option<String>,
    pub order_id: Option<String>,
    pub payment_instrument_subtype: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Evidence submitted against a dispute (`<evidence>`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DisputeEvidence {
    pub id: Option<String>,
    pub category: Option<String>,
    pub comment: Option<String>,
    pub url: Option<String>,
    pub sequence_number: Option<u32>,
    pub created_at: Option<DateTime<Utc>>,
    pub sent_to_processor_at: Option<NaiveDate>,
}

/// `<evidence type="array">` inside a dispute
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DisputeEvidenceList {
    #[serde(rename = "evidence", default)]
    pub items: Vec<DisputeEvidence>,
}
