//! Due-state qualified allocation slots.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::allocation_type::AllocationType;
use super::due_type::DueType;
use super::resolution::{parse_vocabulary, Vocabulary};
use crate::error::VocabularyError;

/// One addressable slot of an allocation order: a due-state paired with an
/// installment component.
///
/// This is the closed `DueType × AllocationType` cross product. Mandatory and
/// voluntary insurance slots of the same due-state share a label; identity is
/// always the enumerated value, never the label.
///
/// # Example
///
/// ```rust
/// use payalloc_core::types::{AllocationType, DueType, PaymentAllocationType};
///
/// let slot: PaymentAllocationType = "DUE_PRINCIPAL".parse().unwrap();
/// assert_eq!(slot.due_type(), DueType::Due);
/// assert_eq!(slot.allocation_type(), AllocationType::Principal);
/// assert_eq!(slot.label(), "Due principal");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentAllocationType {
    /// Past due penalty
    PastDuePenalty,
    /// Past due fee
    PastDueFee,
    /// Past due principal
    PastDuePrincipal,
    /// Past due interest
    PastDueInterest,
    /// Past due fees
    PastDueFees,
    /// Past due aval
    PastDueAval,
    /// Past due mandatory insurance
    PastDueMandatoryInsurance,
    /// Past due voluntary insurance
    PastDueVoluntaryInsurance,
    /// Due penalty
    DuePenalty,
    /// Due fee
    DueFee,
    /// Due principal
    DuePrincipal,
    /// Due interest
    DueInterest,
    /// Due fees
    DueFees,
    /// Due aval
    DueAval,
    /// Due mandatory insurance
    DueMandatoryInsurance,
    /// Due voluntary insurance
    DueVoluntaryInsurance,
    /// In advance penalty
    InAdvancePenalty,
    /// In advance fee
    InAdvanceFee,
    /// In advance principal
    InAdvancePrincipal,
    /// In advance interest
    InAdvanceInterest,
    /// In advance fees
    InAdvanceFees,
    /// In advance aval
    InAdvanceAval,
    /// In advance mandatory insurance
    InAdvanceMandatoryInsurance,
    /// In advance voluntary insurance
    InAdvanceVoluntaryInsurance,
}

impl PaymentAllocationType {
    /// Every payment allocation type: due-states in macro order, components in
    /// allocation type declaration order.
    pub const ALL: [PaymentAllocationType; 24] = [
        PaymentAllocationType::PastDuePenalty,
        PaymentAllocationType::PastDueFee,
        PaymentAllocationType::PastDuePrincipal,
        PaymentAllocationType::PastDueInterest,
        PaymentAllocationType::PastDueFees,
        PaymentAllocationType::PastDueAval,
        PaymentAllocationType::PastDueMandatoryInsurance,
        PaymentAllocationType::PastDueVoluntaryInsurance,
        PaymentAllocationType::DuePenalty,
        PaymentAllocationType::DueFee,
        PaymentAllocationType::DuePrincipal,
        PaymentAllocationType::DueInterest,
        PaymentAllocationType::DueFees,
        PaymentAllocationType::DueAval,
        PaymentAllocationType::DueMandatoryInsurance,
        PaymentAllocationType::DueVoluntaryInsurance,
        PaymentAllocationType::InAdvancePenalty,
        PaymentAllocationType::InAdvanceFee,
        PaymentAllocationType::InAdvancePrincipal,
        PaymentAllocationType::InAdvanceInterest,
        PaymentAllocationType::InAdvanceFees,
        PaymentAllocationType::InAdvanceAval,
        PaymentAllocationType::InAdvanceMandatoryInsurance,
        PaymentAllocationType::InAdvanceVoluntaryInsurance,
    ];

    /// Builds the slot for a due-state and component.
    #[must_use]
    pub const fn from_parts(due_type: DueType, allocation_type: AllocationType) -> Self {
        match (due_type, allocation_type) {
            (DueType::PastDue, AllocationType::Penalty) => PaymentAllocationType::PastDuePenalty,
            (DueType::PastDue, AllocationType::Fee) => PaymentAllocationType::PastDueFee,
            (DueType::PastDue, AllocationType::Principal) => {
                PaymentAllocationType::PastDuePrincipal
            }
            (DueType::PastDue, AllocationType::Interest) => PaymentAllocationType::PastDueInterest,
            (DueType::PastDue, AllocationType::Fees) => PaymentAllocationType::PastDueFees,
            (DueType::PastDue, AllocationType::Aval) => PaymentAllocationType::PastDueAval,
            (DueType::PastDue, AllocationType::MandatoryInsurance) => {
                PaymentAllocationType::PastDueMandatoryInsurance
            }
            (DueType::PastDue, AllocationType::VoluntaryInsurance) => {
                PaymentAllocationType::PastDueVoluntaryInsurance
            }
            (DueType::Due, AllocationType::Penalty) => PaymentAllocationType::DuePenalty,
            (DueType::Due, AllocationType::Fee) => PaymentAllocationType::DueFee,
            (DueType::Due, AllocationType::Principal) => PaymentAllocationType::DuePrincipal,
            (DueType::Due, AllocationType::Interest) => PaymentAllocationType::DueInterest,
            (DueType::Due, AllocationType::Fees) => PaymentAllocationType::DueFees,
            (DueType::Due, AllocationType::Aval) => PaymentAllocationType::DueAval,
            (DueType::Due, AllocationType::MandatoryInsurance) => {
                PaymentAllocationType::DueMandatoryInsurance
            }
            (DueType::Due, AllocationType::VoluntaryInsurance) => {
                PaymentAllocationType::DueVoluntaryInsurance
            }
            (DueType::InAdvance, AllocationType::Penalty) => {
                PaymentAllocationType::InAdvancePenalty
            }
            (DueType::InAdvance, AllocationType::Fee) => PaymentAllocationType::InAdvanceFee,
            (DueType::InAdvance, AllocationType::Principal) => {
                PaymentAllocationType::InAdvancePrincipal
            }
            (DueType::InAdvance, AllocationType::Interest) => {
                PaymentAllocationType::InAdvanceInterest
            }
            (DueType::InAdvance, AllocationType::Fees) => PaymentAllocationType::InAdvanceFees,
            (DueType::InAdvance, AllocationType::Aval) => PaymentAllocationType::InAdvanceAval,
            (DueType::InAdvance, AllocationType::MandatoryInsurance) => {
                PaymentAllocationType::InAdvanceMandatoryInsurance
            }
            (DueType::InAdvance, AllocationType::VoluntaryInsurance) => {
                PaymentAllocationType::InAdvanceVoluntaryInsurance
            }
        }
    }

    /// Returns the due-state half of the slot.
    #[must_use]
    pub const fn due_type(&self) -> DueType {
        match self {
            PaymentAllocationType::PastDuePenalty
            | PaymentAllocationType::PastDueFee
            | PaymentAllocationType::PastDuePrincipal
            | PaymentAllocationType::PastDueInterest
            | PaymentAllocationType::PastDueFees
            | PaymentAllocationType::PastDueAval
            | PaymentAllocationType::PastDueMandatoryInsurance
            | PaymentAllocationType::PastDueVoluntaryInsurance => DueType::PastDue,
            PaymentAllocationType::DuePenalty
            | PaymentAllocationType::DueFee
            | PaymentAllocationType::DuePrincipal
            | PaymentAllocationType::DueInterest
            | PaymentAllocationType::DueFees
            | PaymentAllocationType::DueAval
            | PaymentAllocationType::DueMandatoryInsurance
            | PaymentAllocationType::DueVoluntaryInsurance => DueType::Due,
            PaymentAllocationType::InAdvancePenalty
            | PaymentAllocationType::InAdvanceFee
            | PaymentAllocationType::InAdvancePrincipal
            | PaymentAllocationType::InAdvanceInterest
            | PaymentAllocationType::InAdvanceFees
            | PaymentAllocationType::InAdvanceAval
            | PaymentAllocationType::InAdvanceMandatoryInsurance
            | PaymentAllocationType::InAdvanceVoluntaryInsurance => DueType::InAdvance,
        }
    }

    /// Returns the component half of the slot.
    #[must_use]
    pub const fn allocation_type(&self) -> AllocationType {
        match self {
            PaymentAllocationType::PastDuePenalty
            | PaymentAllocationType::DuePenalty
            | PaymentAllocationType::InAdvancePenalty => AllocationType::Penalty,
            PaymentAllocationType::PastDueFee
            | PaymentAllocationType::DueFee
            | PaymentAllocationType::InAdvanceFee => AllocationType::Fee,
            PaymentAllocationType::PastDuePrincipal
            | PaymentAllocationType::DuePrincipal
            | PaymentAllocationType::InAdvancePrincipal => AllocationType::Principal,
            PaymentAllocationType::PastDueInterest
            | PaymentAllocationType::DueInterest
            | PaymentAllocationType::InAdvanceInterest => AllocationType::Interest,
            PaymentAllocationType::PastDueFees
            | PaymentAllocationType::DueFees
            | PaymentAllocationType::InAdvanceFees => AllocationType::Fees,
            PaymentAllocationType::PastDueAval
            | PaymentAllocationType::DueAval
            | PaymentAllocationType::InAdvanceAval => AllocationType::Aval,
            PaymentAllocationType::PastDueMandatoryInsurance
            | PaymentAllocationType::DueMandatoryInsurance
            | PaymentAllocationType::InAdvanceMandatoryInsurance => {
                AllocationType::MandatoryInsurance
            }
            PaymentAllocationType::PastDueVoluntaryInsurance
            | PaymentAllocationType::DueVoluntaryInsurance
            | PaymentAllocationType::InAdvanceVoluntaryInsurance => {
                AllocationType::VoluntaryInsurance
            }
        }
    }

    /// Returns the external name (e.g. `IN_ADVANCE_INTEREST`).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            PaymentAllocationType::PastDuePenalty => "PAST_DUE_PENALTY",
            PaymentAllocationType::PastDueFee => "PAST_DUE_FEE",
            PaymentAllocationType::PastDuePrincipal => "PAST_DUE_PRINCIPAL",
            PaymentAllocationType::PastDueInterest => "PAST_DUE_INTEREST",
            PaymentAllocationType::PastDueFees => "PAST_DUE_FEES",
            PaymentAllocationType::PastDueAval => "PAST_DUE_AVAL",
            PaymentAllocationType::PastDueMandatoryInsurance => "PAST_DUE_MANDATORY_INSURANCE",
            PaymentAllocationType::PastDueVoluntaryInsurance => "PAST_DUE_VOLUNTARY_INSURANCE",
            PaymentAllocationType::DuePenalty => "DUE_PENALTY",
            PaymentAllocationType::DueFee => "DUE_FEE",
            PaymentAllocationType::DuePrincipal => "DUE_PRINCIPAL",
            PaymentAllocationType::DueInterest => "DUE_INTEREST",
            PaymentAllocationType::DueFees => "DUE_FEES",
            PaymentAllocationType::DueAval => "DUE_AVAL",
            PaymentAllocationType::DueMandatoryInsurance => "DUE_MANDATORY_INSURANCE",
            PaymentAllocationType::DueVoluntaryInsurance => "DUE_VOLUNTARY_INSURANCE",
            PaymentAllocationType::InAdvancePenalty => "IN_ADVANCE_PENALTY",
            PaymentAllocationType::InAdvanceFee => "IN_ADVANCE_FEE",
            PaymentAllocationType::InAdvancePrincipal => "IN_ADVANCE_PRINCIPAL",
            PaymentAllocationType::InAdvanceInterest => "IN_ADVANCE_INTEREST",
            PaymentAllocationType::InAdvanceFees => "IN_ADVANCE_FEES",
            PaymentAllocationType::InAdvanceAval => "IN_ADVANCE_AVAL",
            PaymentAllocationType::InAdvanceMandatoryInsurance => "IN_ADVANCE_MANDATORY_INSURANCE",
            PaymentAllocationType::InAdvanceVoluntaryInsurance => "IN_ADVANCE_VOLUNTARY_INSURANCE",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            PaymentAllocationType::PastDuePenalty => "Past due penalty",
            PaymentAllocationType::PastDueFee => "Past due fee",
            PaymentAllocationType::PastDuePrincipal => "Past due principal",
            PaymentAllocationType::PastDueInterest => "Past due interest",
            PaymentAllocationType::PastDueFees => "Past due fees",
            PaymentAllocationType::PastDueAval => "Past due aval",
            PaymentAllocationType::PastDueMandatoryInsurance => "Past due insurance",
            PaymentAllocationType::PastDueVoluntaryInsurance => "Past due insurance",
            PaymentAllocationType::DuePenalty => "Due penalty",
            PaymentAllocationType::DueFee => "Due fee",
            PaymentAllocationType::DuePrincipal => "Due principal",
            PaymentAllocationType::DueInterest => "Due interest",
            PaymentAllocationType::DueFees => "Due fees",
            PaymentAllocationType::DueAval => "Due aval",
            PaymentAllocationType::DueMandatoryInsurance => "Due insurance",
            PaymentAllocationType::DueVoluntaryInsurance => "Due insurance",
            PaymentAllocationType::InAdvancePenalty => "In advance penalty",
            PaymentAllocationType::InAdvanceFee => "In advance fee",
            PaymentAllocationType::InAdvancePrincipal => "In advance principal",
            PaymentAllocationType::InAdvanceInterest => "In advance interest",
            PaymentAllocationType::InAdvanceFees => "In advance fees",
            PaymentAllocationType::InAdvanceAval => "In advance aval",
            PaymentAllocationType::InAdvanceMandatoryInsurance => "In advance insurance",
            PaymentAllocationType::InAdvanceVoluntaryInsurance => "In advance insurance",
        }
    }

    /// Splits an external name into its due-state and component.
    ///
    /// Unlike [`FromStr`], this reports *why* a name is not a valid slot
    /// (unknown prefix versus unknown component).
    pub fn split_name(name: &str) -> Result<(DueType, AllocationType), VocabularyError> {
        let (due_type, rest) = DueType::ALL
            .iter()
            .find_map(|due| {
                name.strip_prefix(due.name())
                    .and_then(|rest| rest.strip_prefix('_'))
                    .map(|rest| (*due, rest))
            })
            .ok_or_else(|| VocabularyError::Malformed {
                value: name.to_string(),
                reason: "missing PAST_DUE_, DUE_ or IN_ADVANCE_ prefix".to_string(),
            })?;

        let allocation_type = rest.parse::<AllocationType>().map_err(|_| {
            VocabularyError::Malformed {
                value: name.to_string(),
                reason: format!("unknown allocation component '{rest}'"),
            }
        })?;

        Ok((due_type, allocation_type))
    }
}

impl Vocabulary for PaymentAllocationType {
    const VOCABULARY: &'static str = "payment allocation type";

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn name(&self) -> &'static str {
        PaymentAllocationType::name(self)
    }
}

impl fmt::Display for PaymentAllocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PaymentAllocationType {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_vocabulary(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_cross_product_is_complete() {
        assert_eq!(
            PaymentAllocationType::ALL.len(),
            DueType::ALL.len() * AllocationType::ALL.len()
        );
        for due in DueType::ALL {
            for alloc in AllocationType::ALL {
                let slot = PaymentAllocationType::from_parts(due, alloc);
                assert_eq!(slot.due_type(), due);
                assert_eq!(slot.allocation_type(), alloc);
                assert_eq!(slot.name(), due.qualify(alloc.name()));
            }
        }
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = PaymentAllocationType::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names.len(), PaymentAllocationType::ALL.len());
    }

    #[test]
    fn test_insurance_labels_are_shared_but_values_distinct() {
        let mandatory = PaymentAllocationType::DueMandatoryInsurance;
        let voluntary = PaymentAllocationType::DueVoluntaryInsurance;
        assert_eq!(mandatory.label(), voluntary.label());
        assert_ne!(mandatory, voluntary);

        let set: HashSet<_> = [mandatory, voluntary].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_split_name() {
        assert_eq!(
            PaymentAllocationType::split_name("PAST_DUE_AVAL").unwrap(),
            (DueType::PastDue, AllocationType::Aval)
        );
        assert_eq!(
            PaymentAllocationType::split_name("DUE_FEES").unwrap(),
            (DueType::Due, AllocationType::Fees)
        );
        assert!(matches!(
            PaymentAllocationType::split_name("PAST_DUE_BOGUS"),
            Err(VocabularyError::Malformed { .. })
        ));
        assert!(PaymentAllocationType::split_name("OVERDUE_PRINCIPAL").is_err());
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "PAST_DUE_BOGUS".parse::<PaymentAllocationType>().unwrap_err();
        assert_eq!(err.value(), "PAST_DUE_BOGUS");
    }

    #[test]
    fn test_serde_matches_name() {
        for slot in PaymentAllocationType::ALL {
            let json = serde_json::to_string(&slot).unwrap();
            assert_eq!(json, format!("\"{}\"", slot.name()));
        }
    }
}
