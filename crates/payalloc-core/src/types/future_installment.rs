//! Policy for applying payments to installments that are not yet due.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::resolution::{parse_vocabulary, Vocabulary};
use crate::error::VocabularyError;

/// How a payment that exceeds the due amounts is applied to future installments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FutureInstallmentAllocationRule {
    /// Pay the next upcoming installment first.
    #[default]
    NextInstallment,
    /// Pay the last installment first (shortens the term).
    LastInstallment,
    /// Spread the excess across all remaining installments.
    Reamortization,
}

impl FutureInstallmentAllocationRule {
    /// Every rule, in declaration order.
    pub const ALL: [FutureInstallmentAllocationRule; 3] = [
        FutureInstallmentAllocationRule::NextInstallment,
        FutureInstallmentAllocationRule::LastInstallment,
        FutureInstallmentAllocationRule::Reamortization,
    ];

    /// Returns the external name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            FutureInstallmentAllocationRule::NextInstallment => "NEXT_INSTALLMENT",
            FutureInstallmentAllocationRule::LastInstallment => "LAST_INSTALLMENT",
            FutureInstallmentAllocationRule::Reamortization => "REAMORTIZATION",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            FutureInstallmentAllocationRule::NextInstallment => "Next installment",
            FutureInstallmentAllocationRule::LastInstallment => "Last installment",
            FutureInstallmentAllocationRule::Reamortization => "Reamortization",
        }
    }
}

impl Vocabulary for FutureInstallmentAllocationRule {
    const VOCABULARY: &'static str = "future installment allocation rule";

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn name(&self) -> &'static str {
        FutureInstallmentAllocationRule::name(self)
    }
}

impl fmt::Display for FutureInstallmentAllocationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for FutureInstallmentAllocationRule {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_vocabulary(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(
            FutureInstallmentAllocationRule::default(),
            FutureInstallmentAllocationRule::NextInstallment
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "REAMORTIZATION".parse::<FutureInstallmentAllocationRule>().unwrap(),
            FutureInstallmentAllocationRule::Reamortization
        );
        assert!("SOMETIMES".parse::<FutureInstallmentAllocationRule>().is_err());
    }
}
