//! Entity discriminator types

use std::fmt;

/// Root element of a `<credit-card>` document
pub const CREDIT_CARD: &str = "credit-card";
/// Root element of a `<paypal-account>` document
pub const PAYPAL_ACCOUNT: &str = "paypal-account";
/// Root element of a `<venmo-account>` document
pub const VENMO_ACCOUNT: &str = "venmo-account";
/// Root element of an `<android-pay-card>` document
pub const ANDROID_PAY_CARD: &str = "android-pay-card";
/// Root element of an `<apple-pay-card>` document
pub const APPLE_PAY_CARD: &str = "apple-pay-card";

/// Kind of entity named by a document's root element
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityKind {
    CreditCard,
    PayPalAccount,
    VenmoAccount,
    AndroidPayCard,
    ApplePayCard,
    /// Any root element that is not a known payment method
    Unrecognized(String),
}

impl EntityKind {
    /// Classify a root element name
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            CREDIT_CARD => EntityKind::CreditCard,
            PAYPAL_ACCOUNT => EntityKind::PayPalAccount,
            VENMO_ACCOUNT => EntityKind::VenmoAccount,
            ANDROID_PAY_CARD => EntityKind::AndroidPayCard,
            APPLE_PAY_CARD => EntityKind::ApplePayCard,
            other => EntityKind::Unrecognized(other.to_string()),
        }
    }

    /// Root element name for this kind
    pub fn tag(&self) -> &str {
        match self {
            EntityKind::CreditCard => CREDIT_CARD,
            EntityKind::PayPalAccount => PAYPAL_ACCOUNT,
            EntityKind::VenmoAccount => VENMO_ACCOUNT,
            EntityKind::AndroidPayCard => ANDROID_PAY_CARD,
            EntityKind::ApplePayCard => APPLE_PAY_CARD,
            EntityKind::Unrecognized(tag) => tag,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, EntityKind::Unrecognized(_))
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
