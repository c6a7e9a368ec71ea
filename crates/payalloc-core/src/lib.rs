//! # Payalloc Core
//!
//! Closed vocabularies used to describe how a loan repayment is allocated
//! across installment components.
//!
//! This crate provides the leaf building blocks used throughout Payalloc:
//!
//! - **Allocation types**: installment components a payment can be applied to
//!   (penalty, principal, interest, itemized fees, aval, insurance)
//! - **Due types**: how an installment relates to the business date
//!   (past due, due, in advance)
//! - **Payment allocation types**: the validated `DueType × AllocationType`
//!   cross product, one addressable slot in an allocation order
//! - **Policy vocabularies**: future installment allocation rules, transaction
//!   types and schedule processing topologies
//! - **Resolution**: explicit `Found` / `NotFound` lookup of external names
//!
//! ## Example
//!
//! ```rust
//! use payalloc_core::prelude::*;
//!
//! let slot = PaymentAllocationType::from_parts(DueType::PastDue, AllocationType::Penalty);
//! assert_eq!(slot.name(), "PAST_DUE_PENALTY");
//!
//! let unknown = Resolution::<AllocationType>::resolve("BOGUS");
//! assert!(!unknown.is_found());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{VocabularyError, VocabularyResult};
    pub use crate::types::{
        AllocationType, DueType, FutureInstallmentAllocationRule, LoanScheduleProcessingType,
        PaymentAllocationTransactionType, PaymentAllocationType, Resolution, Vocabulary,
    };
}

// Re-export commonly used types at crate root
pub use error::{VocabularyError, VocabularyResult};
pub use types::{AllocationType, DueType, PaymentAllocationType, Resolution, Vocabulary};
