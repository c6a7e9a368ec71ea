//! Payalloc Configuration Layer
//!
//! This crate turns the payment allocation section of a loan product
//! create/update command into validated, persistable allocation rules.
//!
//! # Features
//!
//! - **Rule Expansion**: a compact base ordering over allocation components is
//!   expanded into a due-state qualified ordering (past due, due, in advance)
//! - **Rule Assembly**: names are resolved against the vocabularies without
//!   dropping unknown entries
//! - **Validation**: structural invariants plus strategy-specific policy,
//!   reported as field-addressable errors in one batch
//! - **Strategy Policies**: compatibility rules per repayment strategy,
//!   loadable from TOML or JSON
//!
//! # Example
//!
//! ```rust
//! use payalloc_config::PaymentAllocationCompiler;
//!
//! let body = r#"{
//!     "transactionProcessingStrategyCode": "advanced-payment-allocation-strategy",
//!     "loanScheduleProcessingType": "VERTICAL",
//!     "paymentAllocation": [{
//!         "transactionType": "DEFAULT",
//!         "futureInstallmentAllocationRule": "NEXT_INSTALLMENT",
//!         "paymentAllocationOrder": [
//!             { "order": 1, "paymentAllocationRule": "PENALTY" },
//!             { "order": 2, "paymentAllocationRule": "PRINCIPAL" }
//!         ]
//!     }]
//! }"#;
//!
//! let compiled = PaymentAllocationCompiler::new().compile_json(body).unwrap();
//! assert_eq!(compiled.rules[0].allocation_types[0].name(), "PAST_DUE_PENALTY");
//! ```
//!
//! # Strategy Policies
//!
//! ```rust
//! use payalloc_config::{PaymentAllocationCompiler, StrategyPolicy, StrategyPolicySet};
//! use payalloc_core::PaymentAllocationType;
//!
//! let mut policies = StrategyPolicySet::standard();
//! policies
//!     .register(
//!         StrategyPolicy::new("insured-strategy")
//!             .allowing_payment_allocation()
//!             .requiring_allocation_type(PaymentAllocationType::PastDueMandatoryInsurance),
//!     )
//!     .unwrap();
//!
//! let compiler = PaymentAllocationCompiler::with_policies(policies);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod assembler;
mod compiler;
mod error;
mod expander;
mod policy;
mod request;
mod rule;
mod validator;

// Re-export core types
pub use assembler::{AllocationSlot, AssembledRule, RuleAssembler};
pub use compiler::{CompiledAllocation, PaymentAllocationCompiler};
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use expander::{expand_slots, suppress_duplicates, ExpansionReport, RuleExpander};
pub use policy::{
    StrategyCodeSource, StrategyPolicy, StrategyPolicySet, ADVANCED_PAYMENT_ALLOCATION_STRATEGY,
};
pub use request::{AllocationOrderEntry, LoanProductCommand, PaymentAllocationRequest};
pub use rule::LoanProductPaymentAllocationRule;
pub use validator::{PaymentAllocationValidator, PolicyValidator};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::compiler::{CompiledAllocation, PaymentAllocationCompiler};
    pub use crate::error::{ConfigError, ConfigResult, Validate};
    pub use crate::expander::RuleExpander;
    pub use crate::policy::{StrategyPolicy, StrategyPolicySet};
    pub use crate::request::{AllocationOrderEntry, LoanProductCommand, PaymentAllocationRequest};
    pub use crate::rule::LoanProductPaymentAllocationRule;
}
