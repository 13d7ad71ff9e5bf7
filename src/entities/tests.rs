//! Tests for entity helpers

use super::*;
use crate::decode::EntityKind;

#[test]
fn test_masked_number_requires_bin_and_last_4() {
    let card = CreditCard {
        bin: Some("378282".to_string()),
        last_4: Some("0005".to_string()),
        ..CreditCard::default()
    };
    assert_eq!(card.masked_number().as_deref(), Some("378282******0005"));

    let partial = CreditCard {
        last_4: Some("0005".to_string()),
        ..CreditCard::default()
    };
    assert_eq!(partial.masked_number(), None);
}

#[test]
fn test_payment_method_accessors() {
    let methods = [
        PaymentMethod::CreditCard(CreditCard {
            token: Some("a".to_string()),
            default: Some(true),
            ..CreditCard::default()
        }),
        PaymentMethod::PayPalAccount(PayPalAccount {
            token: Some("b".to_string()),
            customer_id: Some("cust".to_string()),
            ..PayPalAccount::default()
        }),
        PaymentMethod::VenmoAccount(VenmoAccount::default()),
    ];

    assert_eq!(methods[0].kind(), EntityKind::CreditCard);
    assert_eq!(methods[0].token(), Some("a"));
    assert!(methods[0].is_default());

    assert_eq!(methods[1].kind(), EntityKind::PayPalAccount);
    assert_eq!(methods[1].customer_id(), Some("cust"));
    assert!(!methods[1].is_default());

    assert_eq!(methods[2].kind(), EntityKind::VenmoAccount);
    assert_eq!(methods[2].token(), None);
}

#[test]
fn test_default_credit_card() {
    let customer = Customer {
        credit_cards: CreditCardList {
            items: vec![
                CreditCard {
                    token: Some("old".to_string()),
                    ..CreditCard::default()
                },
                CreditCard {
                    token: Some("main".to_string()),
                    default: Some(true),
                    ..CreditCard::default()
                },
            ],
        },
        ..Customer::default()
    };

    assert_eq!(
        customer.default_credit_card().and_then(|c| c.token.as_deref()),
        Some("main")
    );
    assert!(Customer::default().default_credit_card().is_none());
}

#[test]
fn test_settlement_total_count_skips_missing() {
    let summary = SettlementBatchSummary {
        records: SettlementRecordList {
            items: vec![
                SettlementRecord {
                    count: Some(4),
                    ..SettlementRecord::default()
                },
                SettlementRecord::default(),
                SettlementRecord {
                    count: Some(6),
                    ..SettlementRecord::default()
                },
            ],
        },
    };

    assert_eq!(summary.total_count(), 10);
}
