//! Gateway domain entities
//!
//! Plain value types decoded from canonical response bodies. Element names
//! are kebab-case; absent (or nil-stripped) elements decode as `None` or
//! an empty list.
//!
//! Only the fields clients commonly read are modelled; unknown elements are
//! ignored by the decoder.

mod customer;
mod dispute;
mod merchant;
mod payment;
mod subscription;
mod transaction;

pub use customer::{Address, AddressList, CreditCardList, Customer, PayPalAccountList};
pub use dispute::{Dispute, DisputeEvidence, DisputeEvidenceList, DisputeTransaction};
pub use merchant::{
    MerchantAccount, MerchantAccountBusiness, SettlementBatchSummary, SettlementRecord,
    SettlementRecordList,
};
pub use payment::{
    AndroidPayCard, ApplePayCard, CreditCard, PayPalAccount, PaymentMethod, PaymentMethodNonce,
    VenmoAccount,
};
pub use subscription::{AddOn, AddOnList, Discount, DiscountList, Subscription};
pub use transaction::{Transaction, TransactionLineItem, TransactionLineItemList};

#[cfg(test)]
mod tests;
