//! Assembly of request elements into resolved allocation rules.
//!
//! Every name is resolved to a [`Resolution`]. Unknown names stay in the
//! assembled rule as `NotFound` so the validator can report them; nothing is
//! dropped or compacted at this stage.

use payalloc_core::types::{
    FutureInstallmentAllocationRule, PaymentAllocationTransactionType, PaymentAllocationType,
    Resolution,
};

use crate::error::{ConfigError, ConfigResult, Validate};
use crate::request::PaymentAllocationRequest;
use crate::rule::LoanProductPaymentAllocationRule;

/// One resolved `{ order, paymentAllocationRule }` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationSlot {
    /// Caller-supplied order.
    pub order: i64,
    /// Resolved allocation type.
    pub allocation_type: Resolution<PaymentAllocationType>,
    /// Index of the entry in the request's `paymentAllocationOrder` array.
    pub position: usize,
}

/// A request element with every name resolved, ready for validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledRule {
    /// Index of the element in the `paymentAllocation` array.
    pub index: usize,
    /// Resolved transaction type; `None` if the field was missing.
    pub transaction_type: Option<Resolution<PaymentAllocationTransactionType>>,
    /// Resolved future installment rule; `None` if the field was missing.
    pub future_installment_allocation_rule: Option<Resolution<FutureInstallmentAllocationRule>>,
    /// Slots sorted ascending by `order` (stable for ties).
    pub slots: Vec<AllocationSlot>,
}

impl AssembledRule {
    /// Resolves one request element.
    pub fn from_request(index: usize, request: &PaymentAllocationRequest) -> Self {
        let mut slots: Vec<AllocationSlot> = request
            .payment_allocation_order
            .iter()
            .enumerate()
            .map(|(position, entry)| AllocationSlot {
                order: entry.order,
                allocation_type: Resolution::resolve(&entry.payment_allocation_rule),
                position,
            })
            .collect();
        slots.sort_by_key(|slot| slot.order);

        Self {
            index,
            transaction_type: request
                .transaction_type
                .as_deref()
                .map(Resolution::resolve),
            future_installment_allocation_rule: request
                .future_installment_allocation_rule
                .as_deref()
                .map(Resolution::resolve),
            slots,
        }
    }

    /// JSON path of this element, used to address validation errors.
    pub fn field(&self, name: &str) -> String {
        format!("paymentAllocation[{}].{}", self.index, name)
    }

    /// Resolved transaction type, if present and known.
    pub fn resolved_transaction_type(&self) -> Option<PaymentAllocationTransactionType> {
        self.transaction_type.as_ref().and_then(Resolution::found)
    }

    /// Allocation types that resolved, in sorted order.
    pub fn resolved_allocation_types(&self) -> Vec<PaymentAllocationType> {
        self.slots
            .iter()
            .filter_map(|slot| slot.allocation_type.found())
            .collect()
    }
}

fn require<T>(value: Option<&Resolution<T>>, field: String) -> ConfigResult<T>
where
    T: payalloc_core::Vocabulary,
{
    match value {
        Some(resolution) => Ok(resolution.clone().into_result()?),
        None => Err(ConfigError::NotFound { key: field }),
    }
}

impl TryFrom<&AssembledRule> for LoanProductPaymentAllocationRule {
    type Error = ConfigError;

    /// Converts a validated rule. Fails on the first unresolved name, which a
    /// validator run beforehand will already have reported.
    fn try_from(rule: &AssembledRule) -> ConfigResult<Self> {
        let transaction_type = require(
            rule.transaction_type.as_ref(),
            rule.field("transactionType"),
        )?;
        let future_installment_allocation_rule = require(
            rule.future_installment_allocation_rule.as_ref(),
            rule.field("futureInstallmentAllocationRule"),
        )?;
        let allocation_types = rule
            .slots
            .iter()
            .map(|slot| slot.allocation_type.clone().into_result())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(LoanProductPaymentAllocationRule::new(
            transaction_type,
            future_installment_allocation_rule,
            allocation_types,
        ))
    }
}

/// Resolves request elements into [`AssembledRule`]s and, once validated,
/// into persistable rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleAssembler;

impl RuleAssembler {
    /// Creates a new assembler.
    pub fn new() -> Self {
        Self
    }

    /// Resolves every request element.
    pub fn assemble(&self, requests: &[PaymentAllocationRequest]) -> Vec<AssembledRule> {
        requests
            .iter()
            .enumerate()
            .map(|(index, request)| AssembledRule::from_request(index, request))
            .collect()
    }

    /// Converts validated rules into persistable rules.
    ///
    /// Each converted rule is checked once more on its own, so a rule that
    /// skipped validation still cannot come out empty or with a repeated slot.
    pub fn finish(
        &self,
        rules: &[AssembledRule],
    ) -> ConfigResult<Vec<LoanProductPaymentAllocationRule>> {
        rules
            .iter()
            .map(|rule| {
                let converted = LoanProductPaymentAllocationRule::try_from(rule)?;
                converted.validate_or_error()?;
                Ok(converted)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payalloc_core::VocabularyError;

    fn request() -> PaymentAllocationRequest {
        PaymentAllocationRequest::new("DEFAULT")
            .with_future_installment_rule("NEXT_INSTALLMENT")
            .with_entry(3, "DUE_INTEREST")
            .with_entry(1, "PAST_DUE_PENALTY")
            .with_entry(2, "PAST_DUE_BOGUS")
    }

    #[test]
    fn test_slots_sorted_by_order() {
        let rule = AssembledRule::from_request(0, &request());
        let orders: Vec<i64> = rule.slots.iter().map(|s| s.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
        assert_eq!(rule.slots[0].position, 1);
    }

    #[test]
    fn test_unresolved_names_are_kept() {
        let rule = AssembledRule::from_request(0, &request());
        assert_eq!(rule.slots.len(), 3);
        assert_eq!(
            rule.slots[1].allocation_type,
            Resolution::NotFound("PAST_DUE_BOGUS".to_string())
        );
        assert!(rule.slots[0].allocation_type.is_found());
        assert_eq!(
            rule.resolved_allocation_types(),
            vec![
                PaymentAllocationType::PastDuePenalty,
                PaymentAllocationType::DueInterest
            ]
        );
    }

    #[test]
    fn test_try_from_rejects_unresolved() {
        let rule = AssembledRule::from_request(0, &request());
        let err = LoanProductPaymentAllocationRule::try_from(&rule).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Vocabulary(VocabularyError::Unknown { ref value, .. }) if value == "PAST_DUE_BOGUS"
        ));
    }

    #[test]
    fn test_try_from_requires_future_rule() {
        let request = PaymentAllocationRequest::new("DEFAULT").with_entry(1, "DUE_PRINCIPAL");
        let rule = AssembledRule::from_request(4, &request);
        let err = LoanProductPaymentAllocationRule::try_from(&rule).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NotFound { ref key } if key == "paymentAllocation[4].futureInstallmentAllocationRule"
        ));
    }

    #[test]
    fn test_finish() {
        let request = PaymentAllocationRequest::new("REPAYMENT")
            .with_future_installment_rule("REAMORTIZATION")
            .with_entry(2, "DUE_PRINCIPAL")
            .with_entry(1, "PAST_DUE_PRINCIPAL");
        let assembler = RuleAssembler::new();
        let rules = assembler.finish(&assembler.assemble(&[request])).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(
            rules[0].transaction_type,
            PaymentAllocationTransactionType::Repayment
        );
        assert_eq!(
            rules[0].allocation_types,
            vec![
                PaymentAllocationType::PastDuePrincipal,
                PaymentAllocationType::DuePrincipal
            ]
        );
    }

    #[test]
    fn test_finish_rejects_repeated_slot() {
        let request = PaymentAllocationRequest::new("DEFAULT")
            .with_future_installment_rule("NEXT_INSTALLMENT")
            .with_entry(1, "DUE_FEE")
            .with_entry(2, "DUE_FEE");
        let assembler = RuleAssembler::new();
        let err = assembler.finish(&assembler.assemble(&[request])).unwrap_err();
        assert_eq!(err.validation_errors().len(), 1);
        assert_eq!(
            err.validation_errors()[0].rule.as_deref(),
            Some("unique_allocation_type")
        );
    }

    #[test]
    fn test_finish_rejects_empty_order() {
        let request =
            PaymentAllocationRequest::new("DEFAULT").with_future_installment_rule("NEXT_INSTALLMENT");
        let assembler = RuleAssembler::new();
        let err = assembler.finish(&assembler.assemble(&[request])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Validation(ref e) if e.rule.as_deref() == Some("non_empty_order")
        ));
    }
}
