//! Transaction types a payment allocation rule can govern.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::resolution::{parse_vocabulary, Vocabulary};
use crate::error::VocabularyError;

/// Loan transaction type that a payment allocation rule applies to.
///
/// `Default` is the fallback rule consulted for any transaction type without
/// a dedicated rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentAllocationTransactionType {
    /// Fallback rule for all transaction types
    Default,
    /// Ordinary repayment
    Repayment,
    /// Down payment
    DownPayment,
    /// Merchant issued refund
    MerchantIssuedRefund,
    /// Payout refund
    PayoutRefund,
    /// Goodwill credit
    GoodwillCredit,
    /// Charge refund
    ChargeRefund,
    /// Charge adjustment
    ChargeAdjustment,
    /// Interest waiver
    WaiveInterest,
    /// Chargeback
    Chargeback,
    /// Recovery payment after charge-off
    ChargeOff,
}

impl PaymentAllocationTransactionType {
    /// Every transaction type, in declaration order.
    pub const ALL: [PaymentAllocationTransactionType; 11] = [
        PaymentAllocationTransactionType::Default,
        PaymentAllocationTransactionType::Repayment,
        PaymentAllocationTransactionType::DownPayment,
        PaymentAllocationTransactionType::MerchantIssuedRefund,
        PaymentAllocationTransactionType::PayoutRefund,
        PaymentAllocationTransactionType::GoodwillCredit,
        PaymentAllocationTransactionType::ChargeRefund,
        PaymentAllocationTransactionType::ChargeAdjustment,
        PaymentAllocationTransactionType::WaiveInterest,
        PaymentAllocationTransactionType::Chargeback,
        PaymentAllocationTransactionType::ChargeOff,
    ];

    /// Returns the external name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::Repayment => "REPAYMENT",
            Self::DownPayment => "DOWN_PAYMENT",
            Self::MerchantIssuedRefund => "MERCHANT_ISSUED_REFUND",
            Self::PayoutRefund => "PAYOUT_REFUND",
            Self::GoodwillCredit => "GOODWILL_CREDIT",
            Self::ChargeRefund => "CHARGE_REFUND",
            Self::ChargeAdjustment => "CHARGE_ADJUSTMENT",
            Self::WaiveInterest => "WAIVE_INTEREST",
            Self::Chargeback => "CHARGEBACK",
            Self::ChargeOff => "CHARGE_OFF",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Repayment => "Repayment",
            Self::DownPayment => "Down payment",
            Self::MerchantIssuedRefund => "Merchant issued refund",
            Self::PayoutRefund => "Payout refund",
            Self::GoodwillCredit => "Goodwill credit",
            Self::ChargeRefund => "Charge refund",
            Self::ChargeAdjustment => "Charge adjustment",
            Self::WaiveInterest => "Waive interest",
            Self::Chargeback => "Chargeback",
            Self::ChargeOff => "Charge-off",
        }
    }
}

impl Vocabulary for PaymentAllocationTransactionType {
    const VOCABULARY: &'static str = "transaction type";

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn name(&self) -> &'static str {
        PaymentAllocationTransactionType::name(self)
    }
}

impl fmt::Display for PaymentAllocationTransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PaymentAllocationTransactionType {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_vocabulary(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "CHARGE_OFF".parse::<PaymentAllocationTransactionType>().unwrap(),
            PaymentAllocationTransactionType::ChargeOff
        );
        assert!("REFUND".parse::<PaymentAllocationTransactionType>().is_err());
    }

    #[test]
    fn test_serde_matches_name() {
        for t in PaymentAllocationTransactionType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.name()));
        }
    }
}
