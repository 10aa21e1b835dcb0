//! Type definitions for the DecimalFormat pattern compiler
//!
//! This module defines the structures produced by parsing a pattern string:
//! the token vocabulary of the numeric spec, the per-half `SubPattern`
//! descriptor, and the caller-supplied locale symbol table.

/// A digit placeholder inside the numeric part of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitPlaceholder {
    /// Required digit (`0`) that always produces a digit in the output
    Required,
    /// Optional digit (`#`) that is omitted when not needed
    Optional,
}

/// One token of the integer-digit run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerToken {
    /// A `0` or `#` placeholder
    Digit(DigitPlaceholder),
    /// A grouping separator (`,`)
    GroupingSeparator,
}

impl IntegerToken {
    /// Checks if the token is a digit placeholder
    pub fn is_digit(&self) -> bool {
        matches!(self, IntegerToken::Digit(_))
    }
}

/// One half (positive or negative) of a compiled pattern
///
/// All digit-count fields are derived structurally from the digit runs of the
/// pattern, never stored in the pattern text itself. A `SubPattern` is
/// immutable once produced by the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubPattern {
    /// Literal text preceding the numeric portion, after un-quoting
    pub prefix: String,
    /// Literal text following the numeric portion, after un-quoting
    pub suffix: String,
    /// Whether the pattern contained a decimal separator token, even with an
    /// empty fraction run (e.g. `"0."`)
    pub decimal_separator_always_shown: bool,
    /// Whether the pattern contains an exponent marker
    pub mantissa: bool,
    /// Digits between grouping separators in the integer part; `0` means no
    /// grouping
    pub grouping_size: usize,
    /// Count of `0` placeholders in the fraction run
    pub minimum_fraction_digits: usize,
    /// Count of all placeholders in the fraction run
    pub maximum_fraction_digits: usize,
    /// Count of `0` placeholders in the integer run
    pub minimum_integer_digits: usize,
    /// Count of all placeholders in the integer run
    pub maximum_integer_digits: usize,
}

/// Result of compiling a full pattern string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternDescriptor {
    /// Positive sub-pattern (always present)
    pub positive: SubPattern,
    /// Negative sub-pattern, present only when the pattern carried an
    /// explicit `;`-separated negative section
    pub negative: Option<SubPattern>,
}

/// Locale symbol table supplied per `format` call
///
/// Every field defaults to the empty string; callers overlay the symbols they
/// need with struct-update syntax:
///
/// ```
/// use decimal_format::DecimalFormatSymbols;
///
/// let symbols = DecimalFormatSymbols {
///     decimal_separator: ".".to_string(),
///     grouping_separator: ",".to_string(),
///     ..Default::default()
/// };
/// ```
///
/// Only `decimal_separator` and `grouping_separator` are consumed by the
/// current rendering path; the remaining symbols are recognized for
/// completeness of the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecimalFormatSymbols {
    /// Currency symbol (unused by rendering)
    pub currency_symbol: String,
    /// Decimal separator inserted before fraction digits
    pub decimal_separator: String,
    /// Digit symbol (unused by rendering)
    pub digit: String,
    /// Exponent separator (unused by rendering)
    pub exponent_separator: String,
    /// Separator inserted between integer digit groups
    pub grouping_separator: String,
    /// Minus sign symbol (unused by rendering)
    pub minus_sign: String,
    /// Percent symbol (unused by rendering)
    pub percent: String,
    /// Per-mille symbol (unused by rendering)
    pub per_mill: String,
}
