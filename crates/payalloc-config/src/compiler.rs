//! End-to-end compilation of a payment allocation configuration.
//!
//! expand (first element only) → assemble → validate → persistable rules.
//! The pipeline is pure: it reads the request, returns a value or an error,
//! and never yields a partially validated rule set.

use tracing::{debug, info, warn};

use payalloc_core::types::{
    LoanScheduleProcessingType, PaymentAllocationTransactionType, Resolution,
};

use crate::assembler::RuleAssembler;
use crate::error::{ConfigError, ConfigResult};
use crate::expander::{ExpansionReport, RuleExpander};
use crate::policy::{StrategyCodeSource, StrategyPolicySet};
use crate::request::{LoanProductCommand, PaymentAllocationRequest};
use crate::rule::LoanProductPaymentAllocationRule;
use crate::validator::{PaymentAllocationValidator, PolicyValidator};

/// Output of a successful compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledAllocation {
    /// Validated rules, one per configured transaction type.
    pub rules: Vec<LoanProductPaymentAllocationRule>,
    /// Expansion applied to the first element, if there was one.
    pub expansion: Option<ExpansionReport>,
}

impl CompiledAllocation {
    /// Returns the rule governing a transaction type, if configured.
    pub fn rule_for(
        &self,
        transaction_type: PaymentAllocationTransactionType,
    ) -> Option<&LoanProductPaymentAllocationRule> {
        self.rules
            .iter()
            .find(|rule| rule.transaction_type == transaction_type)
    }
}

/// Compiles payment allocation requests into validated rules.
///
/// # Example
///
/// ```rust
/// use payalloc_config::{LoanProductCommand, PaymentAllocationCompiler, PaymentAllocationRequest};
///
/// let command = LoanProductCommand::default()
///     .with_strategy("advanced-payment-allocation-strategy")
///     .with_processing_type("HORIZONTAL")
///     .with_payment_allocation(
///         PaymentAllocationRequest::new("DEFAULT")
///             .with_future_installment_rule("NEXT_INSTALLMENT")
///             .with_entry(1, "PENALTY")
///             .with_entry(2, "INTEREST")
///             .with_entry(3, "PRINCIPAL"),
///     );
///
/// let compiled = PaymentAllocationCompiler::new().compile_command(&command).unwrap();
/// assert_eq!(compiled.rules[0].allocation_types.len(), 9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PaymentAllocationCompiler<V = PolicyValidator> {
    expander: RuleExpander,
    assembler: RuleAssembler,
    validator: V,
}

impl PaymentAllocationCompiler<PolicyValidator> {
    /// Creates a compiler using the standard strategy policies.
    pub fn new() -> Self {
        Self::with_policies(StrategyPolicySet::standard())
    }

    /// Creates a compiler using the given strategy policies.
    pub fn with_policies(policies: StrategyPolicySet) -> Self {
        Self::with_validator(PolicyValidator::new(policies))
    }
}

impl<V: PaymentAllocationValidator> PaymentAllocationCompiler<V> {
    /// Creates a compiler with a custom validator.
    pub fn with_validator(validator: V) -> Self {
        Self {
            expander: RuleExpander::new(),
            assembler: RuleAssembler::new(),
            validator,
        }
    }

    /// Compiles a parsed loan product command.
    pub fn compile_command(&self, command: &LoanProductCommand) -> ConfigResult<CompiledAllocation> {
        self.compile(
            command.payment_allocation.clone(),
            &command.processing_type(),
            command,
        )
    }

    /// Parses and compiles a loan product command body.
    pub fn compile_json(&self, json: &str) -> ConfigResult<CompiledAllocation> {
        let command = LoanProductCommand::from_json(json)?;
        self.compile_command(&command)
    }

    /// Compiles payment allocation requests.
    ///
    /// The first request's base ordering is checked and then expanded for
    /// `processing_type`, every request is assembled, and the assembled set is
    /// validated against the strategy reported by `strategy`. Any violation
    /// aborts the whole compilation with the aggregated errors.
    pub fn compile<S>(
        &self,
        mut requests: Vec<PaymentAllocationRequest>,
        processing_type: &Resolution<LoanScheduleProcessingType>,
        strategy: &S,
    ) -> ConfigResult<CompiledAllocation>
    where
        S: StrategyCodeSource + ?Sized,
    {
        let strategy_code = strategy.strategy_code();
        debug!(
            strategy = strategy_code.unwrap_or("<none>"),
            elements = requests.len(),
            "Compiling payment allocation"
        );

        let expansion = self.expander.expand_requests(&mut requests, processing_type);
        let assembled = self.assembler.assemble(&requests);

        let mut errors = match &expansion {
            Some(report) if report.is_expanded() => {
                self.validator.validate_base_order(&report.base)
            }
            _ => Vec::new(),
        };
        errors.extend(self.validator.validate(&assembled, strategy_code));
        if let Err(err) = ConfigError::from_validation_errors(errors) {
            warn!(
                strategy = strategy_code.unwrap_or("<none>"),
                errors = err.validation_errors().len(),
                "Payment allocation rejected"
            );
            return Err(err);
        }

        let rules = self.assembler.finish(&assembled)?;
        info!(
            strategy = strategy_code.unwrap_or("<none>"),
            rules = rules.len(),
            "Payment allocation compiled"
        );

        Ok(CompiledAllocation { rules, expansion })
    }
}
