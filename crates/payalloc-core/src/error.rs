//! Error types for vocabulary lookups.

use thiserror::Error;

/// A specialized Result type for vocabulary operations.
pub type VocabularyResult<T> = Result<T, VocabularyError>;

/// Errors raised when an external name cannot be mapped onto a vocabulary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    /// The name is not a member of the vocabulary.
    #[error("Unknown {vocabulary}: '{value}'")]
    Unknown {
        /// Vocabulary that was searched.
        vocabulary: &'static str,
        /// The text that failed to resolve.
        value: String,
    },

    /// A payment allocation type name is not a valid due-state/component pair.
    #[error("Malformed payment allocation type '{value}': {reason}")]
    Malformed {
        /// The offending name.
        value: String,
        /// Why it could not be split.
        reason: String,
    },
}

impl VocabularyError {
    /// Creates an unknown-member error.
    #[must_use]
    pub fn unknown(vocabulary: &'static str, value: impl Into<String>) -> Self {
        Self::Unknown {
            vocabulary,
            value: value.into(),
        }
    }

    /// Returns the text that failed to resolve.
    pub fn value(&self) -> &str {
        match self {
            Self::Unknown { value, .. } | Self::Malformed { value, .. } => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VocabularyError::unknown("allocation type", "BOGUS");
        assert_eq!(err.to_string(), "Unknown allocation type: 'BOGUS'");
        assert_eq!(err.value(), "BOGUS");
    }
}
