//! Strategy-specific compatibility rules for payment allocation.
//!
//! Which allocation configurations a repayment strategy accepts is product
//! policy, so it is loaded as configuration rather than hard-coded. A
//! [`StrategyPolicySet`] maps strategy codes to [`StrategyPolicy`] entries and
//! falls back to its default policy for unknown codes.
//!
//! ```toml
//! [default]
//! code = "default"
//! allows_payment_allocation = false
//!
//! [[policies]]
//! code = "advanced-payment-allocation-strategy"
//! allows_payment_allocation = true
//! required_transaction_types = ["DEFAULT"]
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use payalloc_core::types::{PaymentAllocationTransactionType, PaymentAllocationType};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};
use crate::request::LoanProductCommand;

/// Strategy code of the advanced payment allocation strategy.
pub const ADVANCED_PAYMENT_ALLOCATION_STRATEGY: &str = "advanced-payment-allocation-strategy";

/// Provides the repayment strategy in effect for a product.
pub trait StrategyCodeSource {
    /// Returns the active strategy code, if the product has one.
    fn strategy_code(&self) -> Option<&str>;
}

impl StrategyCodeSource for str {
    fn strategy_code(&self) -> Option<&str> {
        Some(self)
    }
}

impl StrategyCodeSource for String {
    fn strategy_code(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl StrategyCodeSource for Option<String> {
    fn strategy_code(&self) -> Option<&str> {
        self.as_deref()
    }
}

impl StrategyCodeSource for LoanProductCommand {
    fn strategy_code(&self) -> Option<&str> {
        self.transaction_processing_strategy_code.as_deref()
    }
}

/// Compatibility rules for one repayment strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyPolicy {
    /// Strategy code this policy applies to.
    pub code: String,

    /// Description of this policy.
    #[serde(default)]
    pub description: Option<String>,

    /// Whether a payment allocation may be configured at all.
    #[serde(default)]
    pub allows_payment_allocation: bool,

    /// Transaction types that must each have a rule.
    #[serde(default)]
    pub required_transaction_types: Vec<PaymentAllocationTransactionType>,

    /// Slots every rule must contain.
    #[serde(default)]
    pub required_allocation_types: Vec<PaymentAllocationType>,

    /// Slots no rule may contain.
    #[serde(default)]
    pub forbidden_allocation_types: Vec<PaymentAllocationType>,

    /// Whether every rule must list the full cross product exactly once.
    #[serde(default)]
    pub require_complete_set: bool,
}

impl StrategyPolicy {
    /// Creates a policy that rejects any payment allocation.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: None,
            allows_payment_allocation: false,
            required_transaction_types: Vec::new(),
            required_allocation_types: Vec::new(),
            forbidden_allocation_types: Vec::new(),
            require_complete_set: false,
        }
    }

    /// Policy of the advanced payment allocation strategy: allocation is
    /// allowed and a `DEFAULT` rule is required.
    pub fn advanced() -> Self {
        Self::new(ADVANCED_PAYMENT_ALLOCATION_STRATEGY)
            .with_description("Advanced payment allocation with due-state ordering")
            .allowing_payment_allocation()
            .requiring_transaction_type(PaymentAllocationTransactionType::Default)
    }

    /// Fallback policy for strategies without their own entry.
    pub fn fallback() -> Self {
        Self::new("default")
            .with_description("Strategies without payment allocation support")
    }

    /// Builder method to set description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder method to allow payment allocation.
    pub fn allowing_payment_allocation(mut self) -> Self {
        self.allows_payment_allocation = true;
        self
    }

    /// Builder method to require a transaction type.
    pub fn requiring_transaction_type(mut self, t: PaymentAllocationTransactionType) -> Self {
        self.required_transaction_types.push(t);
        self
    }

    /// Builder method to require a slot in every rule.
    pub fn requiring_allocation_type(mut self, t: PaymentAllocationType) -> Self {
        self.required_allocation_types.push(t);
        self
    }

    /// Builder method to forbid a slot.
    pub fn forbidding_allocation_type(mut self, t: PaymentAllocationType) -> Self {
        self.forbidden_allocation_types.push(t);
        self
    }

    /// Builder method to require the complete cross product.
    pub fn with_complete_set(mut self, required: bool) -> Self {
        self.require_complete_set = required;
        self
    }
}

impl Validate for StrategyPolicy {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.code.trim().is_empty() {
            errors.push(ValidationError::new("code", "Strategy code cannot be empty"));
        }

        let forbidden: HashSet<_> = self.forbidden_allocation_types.iter().collect();
        for t in &self.required_allocation_types {
            if forbidden.contains(t) {
                errors.push(
                    ValidationError::with_rule(
                        "required_allocation_types",
                        format!("Policy '{}' both requires and forbids a slot", self.code),
                        "disjoint_required_forbidden",
                    )
                    .with_value(t.name()),
                );
            }
        }

        if self.require_complete_set && !self.forbidden_allocation_types.is_empty() {
            errors.push(ValidationError::with_rule(
                "forbidden_allocation_types",
                format!(
                    "Policy '{}' requires the complete set but forbids slots",
                    self.code
                ),
                "disjoint_required_forbidden",
            ));
        }

        if !self.allows_payment_allocation && !self.required_transaction_types.is_empty() {
            errors.push(ValidationError::with_rule(
                "required_transaction_types",
                format!(
                    "Policy '{}' requires transaction types but does not allow payment allocation",
                    self.code
                ),
                "consistent_policy",
            ));
        }

        errors
    }
}

fn default_policy() -> StrategyPolicy {
    StrategyPolicy::fallback()
}

/// Strategy policies keyed by strategy code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyPolicySet {
    /// Policy applied to strategies without their own entry.
    #[serde(default = "default_policy")]
    pub default: StrategyPolicy,

    /// Strategy-specific policies.
    #[serde(default)]
    pub policies: Vec<StrategyPolicy>,
}

impl Default for StrategyPolicySet {
    fn default() -> Self {
        Self::standard()
    }
}

impl StrategyPolicySet {
    /// Creates an empty set with the given fallback policy.
    pub fn new(default: StrategyPolicy) -> Self {
        Self {
            default,
            policies: Vec::new(),
        }
    }

    /// Built-in policies: the advanced strategy allows allocation, every
    /// other strategy rejects it.
    pub fn standard() -> Self {
        Self {
            default: StrategyPolicy::fallback(),
            policies: vec![StrategyPolicy::advanced()],
        }
    }

    /// Parses a policy set from TOML.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        let set: Self = toml::from_str(s)?;
        set.validate_or_error()?;
        Ok(set)
    }

    /// Parses a policy set from JSON.
    pub fn from_json_str(s: &str) -> ConfigResult<Self> {
        let set: Self =
            serde_json::from_str(s).map_err(|e| ConfigError::Policy(e.to_string()))?;
        set.validate_or_error()?;
        Ok(set)
    }

    /// Loads a policy set from a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&contents),
            Some("json") => Self::from_json_str(&contents),
            _ => Err(ConfigError::Policy(format!(
                "Unsupported policy file extension: {}",
                path.display()
            ))),
        }
    }

    /// Adds or replaces a strategy policy.
    pub fn register(&mut self, policy: StrategyPolicy) -> ConfigResult<()> {
        policy.validate_or_error()?;
        self.policies.retain(|p| p.code != policy.code);
        self.policies.push(policy);
        Ok(())
    }

    /// Returns the policy for a strategy code, falling back to the default.
    pub fn policy_for(&self, code: Option<&str>) -> &StrategyPolicy {
        code.and_then(|code| self.policies.iter().find(|p| p.code == code))
            .unwrap_or(&self.default)
    }
}

impl Validate for StrategyPolicySet {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = self.default.validate();

        let mut seen = HashSet::new();
        for (idx, policy) in self.policies.iter().enumerate() {
            errors.extend(policy.validate().into_iter().map(|mut e| {
                e.field = format!("policies[{idx}].{}", e.field);
                e
            }));
            if !seen.insert(policy.code.as_str()) {
                errors.push(
                    ValidationError::with_rule(
                        format!("policies[{idx}].code"),
                        "Duplicate strategy code",
                        "unique_strategy_code",
                    )
                    .with_value(policy.code.clone()),
                );
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_standard_policies() {
        let set = StrategyPolicySet::standard();
        assert!(set.is_valid());

        let advanced = set.policy_for(Some(ADVANCED_PAYMENT_ALLOCATION_STRATEGY));
        assert!(advanced.allows_payment_allocation);
        assert_eq!(
            advanced.required_transaction_types,
            vec![PaymentAllocationTransactionType::Default]
        );

        let other = set.policy_for(Some("mifos-standard-strategy"));
        assert!(!other.allows_payment_allocation);
        assert_eq!(set.policy_for(None).code, "default");
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
            [default]
            code = "default"

            [[policies]]
            code = "insured-strategy"
            allows_payment_allocation = true
            required_allocation_types = ["PAST_DUE_MANDATORY_INSURANCE"]
            forbidden_allocation_types = ["PAST_DUE_FEE", "DUE_FEE", "IN_ADVANCE_FEE"]
        "#;
        let set = StrategyPolicySet::from_toml_str(toml).unwrap();
        let policy = set.policy_for(Some("insured-strategy"));
        assert_eq!(
            policy.required_allocation_types,
            vec![PaymentAllocationType::PastDueMandatoryInsurance]
        );
        assert_eq!(policy.forbidden_allocation_types.len(), 3);
        assert!(!policy.require_complete_set);
    }

    #[test]
    fn test_from_toml_rejects_unknown_slot() {
        let toml = r#"
            [[policies]]
            code = "x"
            required_allocation_types = ["PAST_DUE_BOGUS"]
        "#;
        assert!(matches!(
            StrategyPolicySet::from_toml_str(toml),
            Err(ConfigError::Policy(_))
        ));
    }

    #[test]
    fn test_invalid_policy_set() {
        let mut set = StrategyPolicySet::standard();
        set.policies.push(StrategyPolicy::advanced());
        set.policies.push(
            StrategyPolicy::new("broken")
                .allowing_payment_allocation()
                .requiring_allocation_type(PaymentAllocationType::DueAval)
                .forbidding_allocation_type(PaymentAllocationType::DueAval),
        );
        let errors = set.validate();
        assert!(errors.iter().any(|e| e.rule.as_deref() == Some("unique_strategy_code")));
        assert!(errors
            .iter()
            .any(|e| e.rule.as_deref() == Some("disjoint_required_forbidden")
                && e.field == "policies[2].required_allocation_types"));
    }

    #[test]
    fn test_register_replaces() {
        let mut set = StrategyPolicySet::standard();
        set.register(StrategyPolicy::advanced().with_complete_set(true))
            .unwrap();
        assert_eq!(set.policies.len(), 1);
        assert!(
            set.policy_for(Some(ADVANCED_PAYMENT_ALLOCATION_STRATEGY))
                .require_complete_set
        );
        assert!(set.register(StrategyPolicy::new(" ")).is_err());
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{ "policies": [{{ "code": "json-strategy", "allows_payment_allocation": true }}] }}"#
        )
        .unwrap();
        let set = StrategyPolicySet::load(file.path()).unwrap();
        assert!(set.policy_for(Some("json-strategy")).allows_payment_allocation);
        assert_eq!(set.default.code, "default");
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        assert!(matches!(
            StrategyPolicySet::load(file.path()),
            Err(ConfigError::Policy(_))
        ));
    }

    #[test]
    fn test_strategy_code_sources() {
        assert_eq!("abc".strategy_code(), Some("abc"));
        assert_eq!(None::<String>.strategy_code(), None);
        let command = LoanProductCommand::default().with_strategy("xyz");
        assert_eq!(command.strategy_code(), Some("xyz"));
    }
}
