//! Explicit name resolution against closed vocabularies.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{VocabularyError, VocabularyResult};

/// A closed set of named values with stable external names.
///
/// External names are matched exactly (case-sensitive), the way they appear
/// in product configuration payloads.
pub trait Vocabulary: Sized + Copy + PartialEq + 'static {
    /// Human-readable name of the vocabulary, used in error messages.
    const VOCABULARY: &'static str;

    /// Every member, in declaration order.
    fn all() -> &'static [Self];

    /// Stable external name of this member.
    fn name(&self) -> &'static str;

    /// Looks up a member by external name.
    fn lookup(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|member| member.name() == name)
    }
}

/// Parses an external name, failing with [`VocabularyError::Unknown`].
pub fn parse_vocabulary<T: Vocabulary>(name: &str) -> VocabularyResult<T> {
    T::lookup(name).ok_or_else(|| VocabularyError::unknown(T::VOCABULARY, name))
}

/// Outcome of resolving an external name against a vocabulary.
///
/// Unknown names are kept as `NotFound` with their original text so that a
/// later validation pass can report them. They are never collapsed into an
/// absent value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution<T> {
    /// The name matched a vocabulary member.
    Found(T),
    /// The name matched nothing; carries the original text.
    NotFound(String),
}

impl<T: Vocabulary> Resolution<T> {
    /// Resolves `text` against the vocabulary of `T`.
    pub fn resolve(text: &str) -> Self {
        match T::lookup(text) {
            Some(value) => Resolution::Found(value),
            None => Resolution::NotFound(text.to_string()),
        }
    }

    /// Returns the resolved value, if any.
    pub fn found(&self) -> Option<T> {
        match self {
            Resolution::Found(value) => Some(*value),
            Resolution::NotFound(_) => None,
        }
    }

    /// Returns true if the name matched a member.
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    /// Returns the external text this resolution was made from.
    pub fn text(&self) -> &str {
        match self {
            Resolution::Found(value) => value.name(),
            Resolution::NotFound(text) => text,
        }
    }

    /// Converts into a `Result`, reporting `NotFound` as an unknown member.
    pub fn into_result(self) -> VocabularyResult<T> {
        match self {
            Resolution::Found(value) => Ok(value),
            Resolution::NotFound(text) => Err(VocabularyError::unknown(T::VOCABULARY, text)),
        }
    }
}

impl<T: Vocabulary> From<T> for Resolution<T> {
    fn from(value: T) -> Self {
        Resolution::Found(value)
    }
}

impl<T: Vocabulary> fmt::Display for Resolution<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Found(value) => write!(f, "{}", value.name()),
            Resolution::NotFound(text) => write!(f, "{text} (unresolved)"),
        }
    }
}
