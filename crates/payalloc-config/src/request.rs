//! Request payload shapes for payment allocation configuration.
//!
//! These mirror the JSON body of a loan product create/update command. Names
//! are kept as raw strings here; resolution against the vocabularies happens
//! in the assembler so unknown names survive until validation.

use serde::{Deserialize, Serialize};

use payalloc_core::types::{LoanScheduleProcessingType, Resolution};

use crate::error::ConfigResult;

/// One `{ order, paymentAllocationRule }` member of a `paymentAllocationOrder` array.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationOrderEntry {
    /// Caller-supplied position.
    pub order: i64,
    /// Allocation type name (base or due-state qualified).
    pub payment_allocation_rule: String,
}

impl AllocationOrderEntry {
    /// Creates a new entry.
    pub fn new(order: i64, payment_allocation_rule: impl Into<String>) -> Self {
        Self {
            order,
            payment_allocation_rule: payment_allocation_rule.into(),
        }
    }

    /// Parses the `ORDER:NAME` shorthand (e.g. `1:PENALTY`).
    pub fn parse_shorthand(s: &str) -> Option<Self> {
        let (order, name) = s.split_once(':')?;
        let order = order.trim().parse().ok()?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self::new(order, name))
    }
}

/// One element of the `paymentAllocation` array: the configuration for a
/// single transaction type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAllocationRequest {
    /// Transaction type name.
    #[serde(default)]
    pub transaction_type: Option<String>,
    /// Future installment allocation rule name.
    #[serde(default)]
    pub future_installment_allocation_rule: Option<String>,
    /// Allocation order entries.
    #[serde(default)]
    pub payment_allocation_order: Vec<AllocationOrderEntry>,
}

impl PaymentAllocationRequest {
    /// Creates a request for a transaction type.
    pub fn new(transaction_type: impl Into<String>) -> Self {
        Self {
            transaction_type: Some(transaction_type.into()),
            ..Self::default()
        }
    }

    /// Builder method to set the future installment allocation rule.
    pub fn with_future_installment_rule(mut self, rule: impl Into<String>) -> Self {
        self.future_installment_allocation_rule = Some(rule.into());
        self
    }

    /// Builder method to append an allocation order entry.
    pub fn with_entry(mut self, order: i64, rule: impl Into<String>) -> Self {
        self.payment_allocation_order
            .push(AllocationOrderEntry::new(order, rule));
        self
    }

    /// Builder method to replace the allocation order.
    pub fn with_order(mut self, order: Vec<AllocationOrderEntry>) -> Self {
        self.payment_allocation_order = order;
        self
    }
}

/// The parts of a loan product create/update command this crate consumes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanProductCommand {
    /// Active repayment transaction processing strategy.
    #[serde(default)]
    pub transaction_processing_strategy_code: Option<String>,
    /// Schedule processing topology name.
    #[serde(default)]
    pub loan_schedule_processing_type: Option<String>,
    /// Payment allocation configuration, one element per transaction type.
    #[serde(default)]
    pub payment_allocation: Vec<PaymentAllocationRequest>,
}

impl LoanProductCommand {
    /// Parses a command body.
    ///
    /// Invalid JSON or a body whose shape does not match is a
    /// [`ConfigError::Structural`](crate::ConfigError::Structural) error.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builder method to set the strategy code.
    pub fn with_strategy(mut self, code: impl Into<String>) -> Self {
        self.transaction_processing_strategy_code = Some(code.into());
        self
    }

    /// Builder method to set the schedule processing type.
    pub fn with_processing_type(mut self, processing_type: impl Into<String>) -> Self {
        self.loan_schedule_processing_type = Some(processing_type.into());
        self
    }

    /// Builder method to append a payment allocation element.
    pub fn with_payment_allocation(mut self, request: PaymentAllocationRequest) -> Self {
        self.payment_allocation.push(request);
        self
    }

    /// Resolves the processing topology.
    ///
    /// A missing value means the product default (`HORIZONTAL`); an
    /// unrecognized value stays `NotFound`.
    pub fn processing_type(&self) -> Resolution<LoanScheduleProcessingType> {
        match self.loan_schedule_processing_type.as_deref() {
            Some(name) => Resolution::resolve(name),
            None => Resolution::Found(LoanScheduleProcessingType::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_parse_command() {
        let json = r#"{
            "transactionProcessingStrategyCode": "advanced-payment-allocation-strategy",
            "loanScheduleProcessingType": "VERTICAL",
            "paymentAllocation": [{
                "transactionType": "DEFAULT",
                "futureInstallmentAllocationRule": "NEXT_INSTALLMENT",
                "paymentAllocationOrder": [
                    { "order": 1, "paymentAllocationRule": "PENALTY" },
                    { "order": 2, "paymentAllocationRule": "PRINCIPAL" }
                ]
            }]
        }"#;
        let command = LoanProductCommand::from_json(json).unwrap();
        assert_eq!(
            command.processing_type(),
            Resolution::Found(LoanScheduleProcessingType::Vertical)
        );
        assert_eq!(command.payment_allocation.len(), 1);
        let first = &command.payment_allocation[0];
        assert_eq!(first.transaction_type.as_deref(), Some("DEFAULT"));
        assert_eq!(
            first.payment_allocation_order[1],
            AllocationOrderEntry::new(2, "PRINCIPAL")
        );
    }

    #[test]
    fn test_missing_processing_type_defaults_to_horizontal() {
        let command = LoanProductCommand::default();
        assert_eq!(
            command.processing_type(),
            Resolution::Found(LoanScheduleProcessingType::Horizontal)
        );
    }

    #[test]
    fn test_structural_errors() {
        assert!(matches!(
            LoanProductCommand::from_json("not json"),
            Err(ConfigError::Structural(_))
        ));
        assert!(matches!(
            LoanProductCommand::from_json(r#"{ "paymentAllocation": {} }"#),
            Err(ConfigError::Structural(_))
        ));
        assert!(matches!(
            LoanProductCommand::from_json(
                r#"{ "paymentAllocation": [{ "paymentAllocationOrder": [{ "order": "x" }] }] }"#
            ),
            Err(ConfigError::Structural(_))
        ));
    }

    #[test]
    fn test_parse_shorthand() {
        assert_eq!(
            AllocationOrderEntry::parse_shorthand("3:INTEREST"),
            Some(AllocationOrderEntry::new(3, "INTEREST"))
        );
        assert_eq!(AllocationOrderEntry::parse_shorthand("INTEREST"), None);
        assert_eq!(AllocationOrderEntry::parse_shorthand("x:INTEREST"), None);
        assert_eq!(AllocationOrderEntry::parse_shorthand("1:"), None);
    }
}
