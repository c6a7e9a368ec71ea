//! Installment components a repayment can be allocated to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::resolution::{parse_vocabulary, Vocabulary};
use crate::error::VocabularyError;

/// Label of the legacy umbrella fee kind, hidden from selectable lists.
const LEGACY_FEE_LABEL: &str = "Fee";

/// Installment component a payment can be allocated to.
///
/// `Fee` is the legacy umbrella kind. It is still a valid value (existing
/// products reference it) but is superseded by `Fees`, `Aval`,
/// `MandatoryInsurance` and `VoluntaryInsurance` and is therefore omitted
/// from [`AllocationType::selectable`].
///
/// # Example
///
/// ```rust
/// use payalloc_core::types::AllocationType;
///
/// assert!(!AllocationType::selectable().contains(&AllocationType::Fee));
/// assert_eq!(AllocationType::Aval.code(), "allocationType.aval");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AllocationType {
    /// Penalty charges
    Penalty,
    /// Legacy umbrella fee kind
    Fee,
    /// Principal
    Principal,
    /// Interest
    Interest,
    /// Itemized fees
    Fees,
    /// Guarantee fee (aval)
    Aval,
    /// Mandatory insurance premium
    MandatoryInsurance,
    /// Voluntary insurance premium
    VoluntaryInsurance,
}

impl AllocationType {
    /// Every allocation type, in declaration order.
    pub const ALL: [AllocationType; 8] = [
        AllocationType::Penalty,
        AllocationType::Fee,
        AllocationType::Principal,
        AllocationType::Interest,
        AllocationType::Fees,
        AllocationType::Aval,
        AllocationType::MandatoryInsurance,
        AllocationType::VoluntaryInsurance,
    ];

    /// Returns the external name (e.g. `MANDATORY_INSURANCE`).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            AllocationType::Penalty => "PENALTY",
            AllocationType::Fee => "FEE",
            AllocationType::Principal => "PRINCIPAL",
            AllocationType::Interest => "INTEREST",
            AllocationType::Fees => "FEES",
            AllocationType::Aval => "AVAL",
            AllocationType::MandatoryInsurance => "MANDATORY_INSURANCE",
            AllocationType::VoluntaryInsurance => "VOLUNTARY_INSURANCE",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            AllocationType::Penalty => "Penalty",
            AllocationType::Fee => LEGACY_FEE_LABEL,
            AllocationType::Principal => "Principal",
            AllocationType::Interest => "Interest",
            AllocationType::Fees => "Fees",
            AllocationType::Aval => "Aval",
            AllocationType::MandatoryInsurance => "Mandatory insurance",
            AllocationType::VoluntaryInsurance => "Voluntary insurance",
        }
    }

    /// Returns the stable external code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            AllocationType::Penalty => "allocationType.penalty",
            AllocationType::Fee => "allocationType.fee",
            AllocationType::Principal => "allocationType.principal",
            AllocationType::Interest => "allocationType.interest",
            AllocationType::Fees => "allocationType.fees",
            AllocationType::Aval => "allocationType.aval",
            AllocationType::MandatoryInsurance => "allocationType.mandatoryInsurance",
            AllocationType::VoluntaryInsurance => "allocationType.voluntaryInsurance",
        }
    }

    /// Returns true for the legacy umbrella fee kind.
    #[must_use]
    pub const fn is_legacy(&self) -> bool {
        matches!(self, AllocationType::Fee)
    }

    /// Allocation types a user may select when configuring a product.
    ///
    /// Filters the full set by label so the legacy `Fee` kind is excluded
    /// regardless of where it sits in declaration order.
    pub fn selectable() -> Vec<AllocationType> {
        Self::ALL
            .iter()
            .copied()
            .filter(|t| t.label() != LEGACY_FEE_LABEL)
            .collect()
    }
}

impl Vocabulary for AllocationType {
    const VOCABULARY: &'static str = "allocation type";

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn name(&self) -> &'static str {
        AllocationType::name(self)
    }
}

impl fmt::Display for AllocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for AllocationType {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_vocabulary(s)
    }
}
