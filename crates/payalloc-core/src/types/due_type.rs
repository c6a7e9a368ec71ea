//! Due-state of an installment relative to the business date.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::resolution::{parse_vocabulary, Vocabulary};
use crate::error::VocabularyError;

/// How an installment relates to the current business date at allocation time.
///
/// Declaration order is the macro order of an expanded allocation sequence:
/// past-due installments first, then the installment due now, then future
/// installments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DueType {
    /// Installment due date is before the business date
    PastDue,
    /// Installment falls due in the current period
    Due,
    /// Installment is not yet due
    InAdvance,
}

impl DueType {
    /// Every due type, in macro allocation order.
    pub const ALL: [DueType; 3] = [DueType::PastDue, DueType::Due, DueType::InAdvance];

    /// Returns the external name, also used as the prefix of payment allocation types.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            DueType::PastDue => "PAST_DUE",
            DueType::Due => "DUE",
            DueType::InAdvance => "IN_ADVANCE",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            DueType::PastDue => "Past due",
            DueType::Due => "Due",
            DueType::InAdvance => "In advance",
        }
    }

    /// Prefixes an allocation component name with this due-state
    /// (`PAST_DUE` + `PENALTY` -> `PAST_DUE_PENALTY`).
    pub fn qualify(&self, component: &str) -> String {
        format!("{}_{}", self.name(), component)
    }
}

impl Vocabulary for DueType {
    const VOCABULARY: &'static str = "due type";

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn name(&self) -> &'static str {
        DueType::name(self)
    }
}

impl fmt::Display for DueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for DueType {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_vocabulary(s)
    }
}
