//! Domain vocabularies for repayment allocation.
//!
//! - [`AllocationType`]: installment component a payment can go to
//! - [`DueType`]: due-state of an installment at allocation time
//! - [`PaymentAllocationType`]: due-state qualified allocation slot
//! - [`FutureInstallmentAllocationRule`]: policy for not-yet-due installments
//! - [`PaymentAllocationTransactionType`]: transaction a rule governs
//! - [`LoanScheduleProcessingType`]: horizontal or vertical processing
//! - [`Resolution`]: `Found` / `NotFound` result of a name lookup

mod allocation_type;
mod due_type;
mod future_installment;
mod payment_allocation_type;
mod resolution;
mod schedule_processing;
mod transaction_type;

pub use allocation_type::AllocationType;
pub use due_type::DueType;
pub use future_installment::FutureInstallmentAllocationRule;
pub use payment_allocation_type::PaymentAllocationType;
pub use resolution::{parse_vocabulary, Resolution, Vocabulary};
pub use schedule_processing::LoanScheduleProcessingType;
pub use transaction_type::PaymentAllocationTransactionType;
