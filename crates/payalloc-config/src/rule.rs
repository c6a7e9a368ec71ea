//! The compiled, persistable payment allocation rule.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use payalloc_core::types::{
    FutureInstallmentAllocationRule, PaymentAllocationTransactionType, PaymentAllocationType,
};

use crate::error::{Validate, ValidationError};

/// Allocation rule for one transaction type of a loan product.
///
/// `allocation_types` is the compiled order a repayment executor follows:
/// position 0 is paid first. A rule is immutable once attached to a product;
/// changing it means compiling a new one from a fresh command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanProductPaymentAllocationRule {
    /// Transaction type this rule governs.
    pub transaction_type: PaymentAllocationTransactionType,
    /// Policy for installments that are not yet due.
    pub future_installment_allocation_rule: FutureInstallmentAllocationRule,
    /// Allocation slots in payment order.
    pub allocation_types: Vec<PaymentAllocationType>,
}

impl LoanProductPaymentAllocationRule {
    /// Creates a new rule.
    pub fn new(
        transaction_type: PaymentAllocationTransactionType,
        future_installment_allocation_rule: FutureInstallmentAllocationRule,
        allocation_types: Vec<PaymentAllocationType>,
    ) -> Self {
        Self {
            transaction_type,
            future_installment_allocation_rule,
            allocation_types,
        }
    }
}

impl Validate for LoanProductPaymentAllocationRule {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.allocation_types.is_empty() {
            errors.push(ValidationError::with_rule(
                "allocationTypes",
                "Allocation order cannot be empty",
                "non_empty_order",
            ));
        }

        let mut seen = HashSet::new();
        for t in &self.allocation_types {
            if !seen.insert(*t) {
                errors.push(
                    ValidationError::with_rule(
                        "allocationTypes",
                        "Allocation type appears more than once",
                        "unique_allocation_type",
                    )
                    .with_value(t.name()),
                );
            }
        }

        errors
    }
}
