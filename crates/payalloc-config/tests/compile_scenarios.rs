//! End-to-end compilation scenarios.

use std::io::Write;

use payalloc_config::{
    ConfigError, LoanProductCommand, PaymentAllocationCompiler, PaymentAllocationRequest,
    RuleExpander, StrategyPolicySet, ADVANCED_PAYMENT_ALLOCATION_STRATEGY,
};
use payalloc_core::types::{
    AllocationType, LoanScheduleProcessingType, PaymentAllocationTransactionType,
    PaymentAllocationType, Resolution,
};

fn base_request() -> PaymentAllocationRequest {
    PaymentAllocationRequest::new("DEFAULT")
        .with_future_installment_rule("NEXT_INSTALLMENT")
        .with_entry(1, "PENALTY")
        .with_entry(2, "PRINCIPAL")
        .with_entry(3, "INTEREST")
}

fn expanded_names(processing_type: LoanScheduleProcessingType) -> Vec<(i64, String)> {
    RuleExpander::new()
        .expand(
            &base_request().payment_allocation_order,
            &Resolution::Found(processing_type),
        )
        .raw
        .into_iter()
        .map(|e| (e.order, e.payment_allocation_rule))
        .collect()
}

const SCENARIO_ONE: [&str; 9] = [
    "PAST_DUE_PENALTY",
    "PAST_DUE_PRINCIPAL",
    "PAST_DUE_INTEREST",
    "DUE_PENALTY",
    "DUE_PRINCIPAL",
    "DUE_INTEREST",
    "IN_ADVANCE_PENALTY",
    "IN_ADVANCE_PRINCIPAL",
    "IN_ADVANCE_INTEREST",
];

#[test]
fn horizontal_expansion_of_three_components() {
    let expected: Vec<(i64, String)> = SCENARIO_ONE
        .iter()
        .zip(1i64..)
        .map(|(name, order)| (order, (*name).to_string()))
        .collect();
    assert_eq!(expanded_names(LoanScheduleProcessingType::Horizontal), expected);
}

/// Vertical processing currently shares the horizontal expansion. If the two
/// ever diverge this test must be revisited deliberately.
#[test]
fn vertical_expansion_matches_horizontal() {
    assert_eq!(
        expanded_names(LoanScheduleProcessingType::Vertical),
        expanded_names(LoanScheduleProcessingType::Horizontal)
    );
}

#[test]
fn compiled_rule_follows_expanded_order() {
    let command = LoanProductCommand::default()
        .with_strategy(ADVANCED_PAYMENT_ALLOCATION_STRATEGY)
        .with_processing_type("VERTICAL")
        .with_payment_allocation(base_request());
    let compiled = PaymentAllocationCompiler::new()
        .compile_command(&command)
        .unwrap();

    let rule = compiled
        .rule_for(PaymentAllocationTransactionType::Default)
        .unwrap();
    let names: Vec<&str> = rule.allocation_types.iter().map(|t| t.name()).collect();
    assert_eq!(names, SCENARIO_ONE);
}

#[test]
fn unresolvable_base_name_is_rejected_not_dropped() {
    let command = LoanProductCommand::default()
        .with_strategy(ADVANCED_PAYMENT_ALLOCATION_STRATEGY)
        .with_payment_allocation(base_request().with_entry(4, "BOGUS"));
    let err = PaymentAllocationCompiler::new()
        .compile_command(&command)
        .unwrap_err();

    let errors = err.validation_errors();
    assert_eq!(errors.len(), 3);
    assert!(errors
        .iter()
        .all(|e| e.rule.as_deref() == Some("resolved_allocation_type")));
    assert_eq!(errors[0].value.as_deref(), Some("PAST_DUE_BOGUS"));
    assert_eq!(
        errors[0].field,
        "paymentAllocation[0].paymentAllocationOrder[3].paymentAllocationRule"
    );
}

#[test]
fn selectable_allocation_types_exclude_legacy_fee() {
    let selectable = AllocationType::selectable();
    assert!(!selectable.contains(&AllocationType::Fee));
    assert_eq!(selectable.len(), AllocationType::ALL.len() - 1);
}

#[test]
fn only_first_element_is_expanded() {
    let command = LoanProductCommand::default()
        .with_strategy(ADVANCED_PAYMENT_ALLOCATION_STRATEGY)
        .with_payment_allocation(base_request())
        .with_payment_allocation(
            PaymentAllocationRequest::new("REPAYMENT")
                .with_future_installment_rule("LAST_INSTALLMENT")
                .with_entry(1, "DUE_INTEREST")
                .with_entry(2, "DUE_PRINCIPAL"),
        );
    let compiled = PaymentAllocationCompiler::new()
        .compile_command(&command)
        .unwrap();

    assert_eq!(compiled.rules.len(), 2);
    assert_eq!(compiled.rules[0].allocation_types.len(), 9);
    assert_eq!(
        compiled
            .rule_for(PaymentAllocationTransactionType::Repayment)
            .unwrap()
            .allocation_types,
        vec![
            PaymentAllocationType::DueInterest,
            PaymentAllocationType::DuePrincipal
        ]
    );
}

#[test]
fn duplicate_base_entries_compile_with_contiguous_order() {
    let command = LoanProductCommand::default()
        .with_strategy(ADVANCED_PAYMENT_ALLOCATION_STRATEGY)
        .with_payment_allocation(base_request().with_entry(4, "PENALTY"));
    let compiled = PaymentAllocationCompiler::new()
        .compile_command(&command)
        .unwrap();

    let expansion = compiled.expansion.as_ref().unwrap();
    assert_eq!(expansion.raw.len(), 12);
    assert_eq!(expansion.entries.len(), 9);
    assert_eq!(compiled.rules[0].allocation_types.len(), 9);
}

fn base_order_rules(entries: &[(i64, &str)]) -> Vec<(String, String)> {
    let request = entries.iter().fold(
        PaymentAllocationRequest::new("DEFAULT").with_future_installment_rule("NEXT_INSTALLMENT"),
        |req, (order, name)| req.with_entry(*order, *name),
    );
    let command = LoanProductCommand::default()
        .with_strategy(ADVANCED_PAYMENT_ALLOCATION_STRATEGY)
        .with_payment_allocation(request);
    let err = PaymentAllocationCompiler::new()
        .compile_command(&command)
        .unwrap_err();
    err.validation_errors()
        .iter()
        .map(|e| (e.field.clone(), e.rule.clone().unwrap_or_default()))
        .collect()
}

#[test]
fn repeated_base_order_is_rejected_before_expansion() {
    let field = "paymentAllocation[0].paymentAllocationOrder".to_string();
    assert_eq!(
        base_order_rules(&[(1, "PENALTY"), (1, "INTEREST")]),
        vec![(field.clone(), "unique_order".to_string())]
    );
    // Array position must not decide priority either way round.
    assert_eq!(
        base_order_rules(&[(1, "INTEREST"), (1, "PENALTY")]),
        vec![(field, "unique_order".to_string())]
    );
}

#[test]
fn gapped_base_order_is_rejected_before_expansion() {
    let errors = base_order_rules(&[(2, "PENALTY"), (7, "INTEREST")]);
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|(field, rule)| {
        field == "paymentAllocation[0].paymentAllocationOrder" && rule == "contiguous_order"
    }));
}

#[test]
fn json_command_with_policy_file() {
    let mut policy = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        policy,
        r#"
[default]
code = "default"

[[policies]]
code = "{ADVANCED_PAYMENT_ALLOCATION_STRATEGY}"
allows_payment_allocation = true
required_transaction_types = ["DEFAULT"]
required_allocation_types = ["PAST_DUE_AVAL"]
"#
    )
    .unwrap();
    let policies = StrategyPolicySet::load(policy.path()).unwrap();
    let compiler = PaymentAllocationCompiler::with_policies(policies);

    let body = serde_json::json!({
        "transactionProcessingStrategyCode": ADVANCED_PAYMENT_ALLOCATION_STRATEGY,
        "paymentAllocation": [{
            "transactionType": "DEFAULT",
            "futureInstallmentAllocationRule": "REAMORTIZATION",
            "paymentAllocationOrder": [
                { "order": 1, "paymentAllocationRule": "PRINCIPAL" }
            ]
        }]
    })
    .to_string();

    let err = compiler.compile_json(&body).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
    assert_eq!(
        err.validation_errors()[0].rule.as_deref(),
        Some("required_allocation_type")
    );
}

#[test]
fn malformed_body_is_structural() {
    let err = PaymentAllocationCompiler::new()
        .compile_json(r#"{ "paymentAllocation": [ { "paymentAllocationOrder": 5 } ] }"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::Structural(_)));
}
