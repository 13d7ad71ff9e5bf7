//! Merchant account and settlement entities

use serde::{Deserialize, Serialize};

/// Merchant account (`<merchant-account>`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MerchantAccount {
    pub id: Option<String>,
    pub status: Option<String>,
    pub currency_iso_code: Option<String>,
    pub default: Option<bool>,
    pub sub_merchant_account: Option<bool>,
    pub business: Option<MerchantAccountBusiness>,
}

/// Business details of a merchant account
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MerchantAccountBusiness {
    pub legal_name: Option<String>,
    pub dba_name: Option<String>,
    pub tax_id: Option<String>,
}

/// Settlement totals for one day (`<settlement-batch-summary>`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SettlementBatchSummary {
    #[serde(default)]
    pub records: SettlementRecordList,
}

impl SettlementBatchSummary {
    /// Number of settled transactions across all records
    pub fn total_count(&self) -> u64 {
        self.records
            .items
            .iter()
            .filter_map(|r| r.count)
            .map(u64::from)
            .sum()
    }
}

/// One settlement grouping row (`<record>`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SettlementRecord {
    pub card_type: Option<String>,
    pub kind: Option<String>,
    pub merchant_account_id: Option<String>,
    pub count: Option<u32>,
    pub amount_settled: Option<String>,
}

/// `<records type="array">`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SettlementRecordList {
    #[serde(rename = "record", default)]
    pub items: Vec<SettlementRecord>,
}
