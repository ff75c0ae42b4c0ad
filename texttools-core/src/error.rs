//! Core error types (deterministic only)

use thiserror::Error;

/// Numeric failures raised while deriving metrics.
///
/// These always point at a genuinely empty or degenerate unit. Callers
/// must surface them instead of substituting zero.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComputationError {
    /// A ratio was requested over an empty unit
    #[error("division by zero: {unit} has no {denominator}")]
    DivisionByZero {
        /// The unit being averaged (e.g. "sentence 3", "document")
        unit: String,
        /// The empty denominator (e.g. "words")
        denominator: &'static str,
    },

    /// The tokenizer produced a word without syllables
    #[error("word '{word}' has no syllables")]
    NoSyllables {
        /// The offending word
        word: String,
    },

    /// A frequency table was requested for a document without words
    #[error("document contains no words")]
    EmptyDocument,

    /// A corpus merge ended with no counted words
    #[error("corpus contains no words")]
    EmptyCorpus,
}

impl ComputationError {
    pub(crate) fn division_by_zero(unit: impl Into<String>, denominator: &'static str) -> Self {
        ComputationError::DivisionByZero {
            unit: unit.into(),
            denominator,
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, ComputationError>;
