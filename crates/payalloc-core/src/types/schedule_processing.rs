//! Repayment schedule processing topology.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::resolution::{parse_vocabulary, Vocabulary};
use crate::error::VocabularyError;

/// How the repayment schedule is walked when a payment is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanScheduleProcessingType {
    /// Component first: the same component across all installments before the
    /// next component.
    #[default]
    Horizontal,
    /// Installment first: every component of an installment before the next
    /// installment.
    Vertical,
}

impl LoanScheduleProcessingType {
    /// Every processing type.
    pub const ALL: [LoanScheduleProcessingType; 2] = [
        LoanScheduleProcessingType::Horizontal,
        LoanScheduleProcessingType::Vertical,
    ];

    /// Returns the external name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            LoanScheduleProcessingType::Horizontal => "HORIZONTAL",
            LoanScheduleProcessingType::Vertical => "VERTICAL",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            LoanScheduleProcessingType::Horizontal => "Horizontal",
            LoanScheduleProcessingType::Vertical => "Vertical",
        }
    }
}

impl Vocabulary for LoanScheduleProcessingType {
    const VOCABULARY: &'static str = "loan schedule processing type";

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn name(&self) -> &'static str {
        LoanScheduleProcessingType::name(self)
    }
}

impl fmt::Display for LoanScheduleProcessingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for LoanScheduleProcessingType {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_vocabulary(s)
    }
}
