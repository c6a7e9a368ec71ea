//! Validation of assembled payment allocation rules.
//!
//! A validator is stateless: the same rules and strategy code always produce
//! the same errors. Every violation is collected so a caller can correct the
//! whole configuration in one round trip.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use payalloc_core::types::{PaymentAllocationType, Resolution};

use crate::assembler::AssembledRule;
use crate::error::ValidationError;
use crate::policy::{StrategyPolicy, StrategyPolicySet};
use crate::request::AllocationOrderEntry;

/// Checks assembled rules against structural invariants and strategy policy.
pub trait PaymentAllocationValidator {
    /// Returns every violation found; empty when the rules are acceptable.
    fn validate(&self, rules: &[AssembledRule], strategy_code: Option<&str>) -> Vec<ValidationError>;

    /// Checks the caller's `order` values of the first element's base
    /// ordering, which expansion replaces with generated ones.
    fn validate_base_order(&self, base: &[AllocationOrderEntry]) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_order_values(
            "paymentAllocation[0].paymentAllocationOrder",
            base.iter().map(|entry| entry.order).collect(),
            &mut errors,
        );
        errors
    }
}

/// Validator backed by a [`StrategyPolicySet`].
#[derive(Debug, Clone, Default)]
pub struct PolicyValidator {
    policies: StrategyPolicySet,
}

impl PolicyValidator {
    /// Creates a validator with the given policies.
    pub fn new(policies: StrategyPolicySet) -> Self {
        Self { policies }
    }

    /// Returns the policies in use.
    pub fn policies(&self) -> &StrategyPolicySet {
        &self.policies
    }
}

impl PaymentAllocationValidator for PolicyValidator {
    fn validate(&self, rules: &[AssembledRule], strategy_code: Option<&str>) -> Vec<ValidationError> {
        let policy = self.policies.policy_for(strategy_code);
        let mut errors = Vec::new();

        if !policy.allows_payment_allocation {
            if !rules.is_empty() {
                errors.push(
                    ValidationError::with_rule(
                        "paymentAllocation",
                        "Payment allocation is not supported by the repayment strategy",
                        "allocation_allowed",
                    )
                    .with_value(strategy_code.unwrap_or("<none>")),
                );
            }
            return errors;
        }

        for rule in rules {
            check_transaction_type(rule, &mut errors);
            check_future_installment_rule(rule, &mut errors);
            check_slots(rule, &mut errors);
            check_orders(rule, &mut errors);
            check_slot_policy(rule, policy, &mut errors);
        }
        check_transaction_types_across_rules(rules, policy, &mut errors);

        errors
    }
}

fn check_transaction_type(rule: &AssembledRule, errors: &mut Vec<ValidationError>) {
    match &rule.transaction_type {
        None => errors.push(ValidationError::with_rule(
            rule.field("transactionType"),
            "Transaction type is required",
            "required",
        )),
        Some(Resolution::NotFound(text)) => errors.push(
            ValidationError::with_rule(
                rule.field("transactionType"),
                "Unknown transaction type",
                "resolved_transaction_type",
            )
            .with_value(text.clone()),
        ),
        Some(Resolution::Found(_)) => {}
    }
}

fn check_future_installment_rule(rule: &AssembledRule, errors: &mut Vec<ValidationError>) {
    match &rule.future_installment_allocation_rule {
        None => errors.push(ValidationError::with_rule(
            rule.field("futureInstallmentAllocationRule"),
            "Future installment allocation rule is required",
            "required",
        )),
        Some(Resolution::NotFound(text)) => errors.push(
            ValidationError::with_rule(
                rule.field("futureInstallmentAllocationRule"),
                "Unknown future installment allocation rule",
                "resolved_future_installment_rule",
            )
            .with_value(text.clone()),
        ),
        Some(Resolution::Found(_)) => {}
    }
}

fn slot_field(rule: &AssembledRule, position: usize) -> String {
    rule.field(&format!(
        "paymentAllocationOrder[{position}].paymentAllocationRule"
    ))
}

/// Unresolved and duplicate allocation types.
fn check_slots(rule: &AssembledRule, errors: &mut Vec<ValidationError>) {
    if rule.slots.is_empty() {
        errors.push(ValidationError::with_rule(
            rule.field("paymentAllocationOrder"),
            "Payment allocation order cannot be empty",
            "non_empty_order",
        ));
        return;
    }

    let mut seen: HashSet<PaymentAllocationType> = HashSet::new();
    for slot in &rule.slots {
        match &slot.allocation_type {
            Resolution::NotFound(text) => errors.push(
                ValidationError::with_rule(
                    slot_field(rule, slot.position),
                    "Unknown payment allocation type",
                    "resolved_allocation_type",
                )
                .with_value(text.clone()),
            ),
            Resolution::Found(t) => {
                if !seen.insert(*t) {
                    errors.push(
                        ValidationError::with_rule(
                            slot_field(rule, slot.position),
                            "Payment allocation type appears more than once",
                            "unique_allocation_type",
                        )
                        .with_value(t.name()),
                    );
                }
            }
        }
    }
}

fn check_orders(rule: &AssembledRule, errors: &mut Vec<ValidationError>) {
    check_order_values(
        &rule.field("paymentAllocationOrder"),
        rule.slots.iter().map(|slot| slot.order).collect(),
        errors,
    );
}

/// Sorted orders must run 1, 2, ..., N.
fn check_order_values(field: &str, mut orders: Vec<i64>, errors: &mut Vec<ValidationError>) {
    orders.sort_unstable();
    let mut expected = 1i64;
    let mut previous: Option<i64> = None;

    for order in orders {
        if previous == Some(order) {
            errors.push(
                ValidationError::with_rule(field, "Order value is used more than once", "unique_order")
                    .with_value(order.to_string()),
            );
            continue;
        }
        if order != expected {
            errors.push(
                ValidationError::with_rule(
                    field,
                    format!("Order values must be consecutive from 1; expected {expected}"),
                    "contiguous_order",
                )
                .with_value(order.to_string()),
            );
        }
        previous = Some(order);
        expected = order.saturating_add(1);
    }
}

fn check_slot_policy(
    rule: &AssembledRule,
    policy: &StrategyPolicy,
    errors: &mut Vec<ValidationError>,
) {
    let present: HashSet<PaymentAllocationType> =
        rule.resolved_allocation_types().into_iter().collect();
    let field = rule.field("paymentAllocationOrder");

    for t in &policy.forbidden_allocation_types {
        if present.contains(t) {
            errors.push(
                ValidationError::with_rule(
                    field.clone(),
                    format!("Allocation type is not permitted by strategy '{}'", policy.code),
                    "forbidden_allocation_type",
                )
                .with_value(t.name()),
            );
        }
    }

    for t in &policy.required_allocation_types {
        if !present.contains(t) {
            errors.push(
                ValidationError::with_rule(
                    field.clone(),
                    format!("Allocation type is required by strategy '{}'", policy.code),
                    "required_allocation_type",
                )
                .with_value(t.name()),
            );
        }
    }

    if policy.require_complete_set {
        let missing: Vec<&str> = PaymentAllocationType::ALL
            .iter()
            .filter(|t| !present.contains(*t))
            .map(|t| t.name())
            .collect();
        if !missing.is_empty() || rule.slots.len() != PaymentAllocationType::ALL.len() {
            errors.push(
                ValidationError::with_rule(
                    field,
                    format!(
                        "Strategy '{}' requires each of the {} allocation types exactly once",
                        policy.code,
                        PaymentAllocationType::ALL.len()
                    ),
                    "complete_allocation_set",
                )
                .with_value(missing.join(",")),
            );
        }
    }
}

fn check_transaction_types_across_rules(
    rules: &[AssembledRule],
    policy: &StrategyPolicy,
    errors: &mut Vec<ValidationError>,
) {
    let mut first_seen = HashMap::new();
    for rule in rules {
        let Some(t) = rule.resolved_transaction_type() else {
            continue;
        };
        match first_seen.entry(t) {
            Entry::Occupied(first) => errors.push(
                ValidationError::with_rule(
                    rule.field("transactionType"),
                    format!(
                        "Transaction type already configured at paymentAllocation[{}]",
                        first.get()
                    ),
                    "unique_transaction_type",
                )
                .with_value(t.name()),
            ),
            Entry::Vacant(slot) => {
                slot.insert(rule.index);
            }
        }
    }

    for t in &policy.required_transaction_types {
        if !first_seen.contains_key(t) {
            errors.push(
                ValidationError::with_rule(
                    "paymentAllocation",
                    format!("A rule for this transaction type is required by strategy '{}'", policy.code),
                    "required_transaction_type",
                )
                .with_value(t.name()),
            );
        }
    }
}
