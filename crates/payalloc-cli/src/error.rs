//! CLI error types.

use payalloc_config::ConfigError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// An `ORDER:NAME` argument could not be parsed.
    #[error("Invalid allocation entry: {0}. Use ORDER:NAME, e.g. 1:PENALTY.")]
    InvalidEntry(String),

    /// The payment allocation was rejected by validation.
    #[error("Payment allocation rejected with {0} validation error(s)")]
    Rejected(usize),

    /// The command body or policy file could not be used.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_keeps_message() {
        let err = CliError::from(ConfigError::Structural("expected a sequence".to_string()));
        assert!(matches!(err, CliError::Config(ConfigError::Structural(_))));
        assert_eq!(
            err.to_string(),
            "Malformed payment allocation payload: expected a sequence"
        );
    }

    #[test]
    fn test_rejected_message() {
        assert_eq!(
            CliError::Rejected(3).to_string(),
            "Payment allocation rejected with 3 validation error(s)"
        );
    }
}
