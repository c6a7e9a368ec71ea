//! Configuration error types.

use std::fmt;

use payalloc_core::VocabularyError;
use thiserror::Error;

/// Configuration operation result type.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The payload is not valid JSON or does not have the expected shape.
    #[error("Malformed payment allocation payload: {0}")]
    Structural(String),

    /// Configuration not found.
    #[error("Configuration not found: {key}")]
    NotFound {
        /// The configuration key that was not found.
        key: String,
    },

    /// A single validation error.
    #[error("Validation error: {0}")]
    Validation(ValidationError),

    /// Multiple validation errors, reported together.
    #[error("{} validation errors: {}", .0.len(), join_errors(.0))]
    MultipleValidationErrors(Vec<ValidationError>),

    /// A vocabulary name could not be resolved.
    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),

    /// Strategy policy file could not be read or parsed.
    #[error("Strategy policy error: {0}")]
    Policy(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Collapses a list of validation errors into an error, or `Ok` when empty.
    pub fn from_validation_errors(mut errors: Vec<ValidationError>) -> ConfigResult<()> {
        match errors.len() {
            0 => Ok(()),
            1 => Err(ConfigError::Validation(errors.remove(0))),
            _ => Err(ConfigError::MultipleValidationErrors(errors)),
        }
    }

    /// Returns the validation errors carried by this error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            ConfigError::Validation(err) => std::slice::from_ref(err),
            ConfigError::MultipleValidationErrors(errors) => errors,
            _ => &[],
        }
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single field-addressable validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field that failed validation (e.g. `paymentAllocation[0].transactionType`).
    pub field: String,
    /// Validation error message.
    pub message: String,
    /// Validation rule that was violated.
    pub rule: Option<String>,
    /// Offending value, as supplied.
    pub value: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
            value: None,
        }
    }

    /// Creates a validation error with a rule name.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
            value: None,
        }
    }

    /// Attaches the offending value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)?;
        if let Some(ref value) = self.value {
            write!(f, " [value: {value}]")?;
        }
        if let Some(ref rule) = self.rule {
            write!(f, " (rule: {rule})")?;
        }
        Ok(())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Structural(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Policy(err.to_string())
    }
}

/// Trait for validatable configurations.
pub trait Validate {
    /// Validates the configuration.
    ///
    /// Returns a list of validation errors, or an empty vector if valid.
    fn validate(&self) -> Vec<ValidationError>;

    /// Returns true if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Validates and returns an error if invalid.
    fn validate_or_error(&self) -> ConfigResult<()> {
        ConfigError::from_validation_errors(self.validate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::with_rule("order", "duplicate order", "unique_order")
            .with_value("3");
        assert_eq!(err.to_string(), "order: duplicate order [value: 3] (rule: unique_order)");
    }

    #[test]
    fn test_from_validation_errors() {
        assert!(ConfigError::from_validation_errors(Vec::new()).is_ok());

        let single = ConfigError::from_validation_errors(vec![ValidationError::new("a", "bad")])
            .unwrap_err();
        assert!(matches!(single, ConfigError::Validation(_)));
        assert_eq!(single.validation_errors().len(), 1);

        let many = ConfigError::from_validation_errors(vec![
            ValidationError::new("a", "bad"),
            ValidationError::new("b", "worse"),
        ])
        .unwrap_err();
        assert_eq!(many.validation_errors().len(), 2);
        assert!(many.to_string().starts_with("2 validation errors"));
        assert!(many.to_string().contains("b: worse"));
    }

    #[test]
    fn test_structural_from_json() {
        let err: ConfigError = serde_json::from_str::<Vec<u32>>("{").unwrap_err().into();
        assert!(matches!(err, ConfigError::Structural(_)));
    }
}
