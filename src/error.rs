//! Error types for pattern compilation and formatting
//!
//! Pattern failures come in two flavors: syntax errors raised by the grammar
//! and semantic errors raised by the post-parse validation that runs during
//! [`DecimalFormat`](crate::DecimalFormat) construction. Both live in
//! [`PatternError`] so a single `Result` covers construction; the variant
//! tells them apart without matching on message text.

use thiserror::Error;

/// An error produced while compiling a pattern string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The pattern text does not match the grammar
    #[error("unexpected character `{found}` in pattern at offset {offset}")]
    UnexpectedCharacter {
        /// The character the grammar could not accept
        found: char,
        /// Byte offset of that character within the pattern
        offset: usize,
    },

    /// The pattern ended where the grammar still expected more input
    #[error("unexpected end of pattern at offset {offset}")]
    UnexpectedEnd {
        /// Byte offset of the end of the pattern
        offset: usize,
    },

    /// A quoted literal run was opened but never closed
    #[error("unbalanced quote in pattern at offset {offset}")]
    UnbalancedQuote {
        /// Byte offset of the opening quote
        offset: usize,
    },

    /// More than one percent marker across the positive prefix and suffix
    #[error("too many percent/per mille characters in pattern")]
    TooManyMultiplierSymbols,

    /// An exponential pattern with neither a required integer digit nor a
    /// required fraction digit, such as `".E0"`
    #[error("at least one integer or fraction digit is required for exponential patterns")]
    ExponentWithoutDigits,
}

impl PatternError {
    /// Whether this error came from the grammar rather than from semantic
    /// validation
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            PatternError::UnexpectedCharacter { .. }
                | PatternError::UnexpectedEnd { .. }
                | PatternError::UnbalancedQuote { .. }
        )
    }

    /// Whether this error came from post-parse semantic validation
    pub fn is_semantic(&self) -> bool {
        !self.is_syntax()
    }
}

/// An error produced by a single `format` call
///
/// A failed call leaves the formatter fully usable for subsequent calls.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// The value was NaN or infinite
    #[error("value must be a finite number, received: {0}")]
    NonFinite(f64),
}
