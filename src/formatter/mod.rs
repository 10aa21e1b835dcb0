//! Descriptor-driven number rendering
//!
//! [`DecimalFormat`] owns one compiled [`PatternDescriptor`] for its whole
//! lifetime: the pattern is parsed and validated once at construction, and
//! the instance is read-only afterward. Formatting with a different pattern
//! means constructing a new instance.

pub(crate) mod numeric;

use crate::error::{FormatError, PatternError};
use crate::parser::parse_pattern;
use crate::types::{DecimalFormatSymbols, PatternDescriptor, SubPattern};
use numeric::{apply_grouping, count_occurrences, exponential, is_negative, pad_start, to_fixed};

/// A compiled decimal-number formatter
///
/// Construction compiles the pattern and runs semantic validation; after
/// that, [`format`](DecimalFormat::format) is a pure function of the value
/// and the symbol table, safe to call concurrently from multiple threads.
///
/// # Examples
/// ```
/// use decimal_format::{DecimalFormat, DecimalFormatSymbols};
///
/// let formatter = DecimalFormat::new("#,##0.00").unwrap();
/// let symbols = DecimalFormatSymbols {
///     decimal_separator: ".".to_string(),
///     grouping_separator: ",".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(formatter.format(1234.5, &symbols).unwrap(), "1,234.50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalFormat {
    positive: SubPattern,
    negative: SubPattern,
}

impl DecimalFormat {
    /// Compile `pattern` and validate the result
    ///
    /// Fails with a syntax variant of [`PatternError`] when the text does not
    /// match the grammar, or a semantic variant when it does but violates a
    /// validation rule.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Self::from_descriptor(parse_pattern(pattern)?)
    }

    /// Build a formatter from an already-compiled descriptor, running the
    /// same semantic validation as [`new`](DecimalFormat::new)
    pub fn from_descriptor(descriptor: PatternDescriptor) -> Result<Self, PatternError> {
        let positive = descriptor.positive;

        let percent_markers =
            count_occurrences(&positive.prefix, "%") + count_occurrences(&positive.suffix, "%");
        if percent_markers > 1 {
            return Err(PatternError::TooManyMultiplierSymbols);
        }

        // Explicitly reject shapes like ".E0".
        if positive.minimum_integer_digits == 0
            && positive.minimum_fraction_digits == 0
            && positive.mantissa
        {
            return Err(PatternError::ExponentWithoutDigits);
        }

        // Without an explicit negative half, use an independent copy of the
        // positive one.
        let mut negative = descriptor.negative.unwrap_or_else(|| positive.clone());

        // Java prepends a minus sign when the negative prefix does not
        // distinguish itself from the positive prefix.
        if negative.prefix == positive.prefix {
            negative.prefix.insert(0, '-');
        }

        Ok(DecimalFormat { positive, negative })
    }

    /// Format `value` with this pattern and the given locale symbols
    ///
    /// Fails only for non-finite values; a failed call leaves the formatter
    /// valid for subsequent calls.
    ///
    /// # Examples
    /// ```
    /// use decimal_format::{DecimalFormat, DecimalFormatSymbols};
    ///
    /// let formatter = DecimalFormat::new("0.00%").unwrap();
    /// let symbols = DecimalFormatSymbols {
    ///     decimal_separator: ".".to_string(),
    ///     ..Default::default()
    /// };
    /// assert_eq!(formatter.format(0.1234, &symbols).unwrap(), "12.34%");
    /// ```
    pub fn format(
        &self,
        value: f64,
        symbols: &DecimalFormatSymbols,
    ) -> Result<String, FormatError> {
        if !value.is_finite() {
            return Err(FormatError::NonFinite(value));
        }

        // Mantissa patterns bypass the descriptor and defer to native
        // exponential rendering.
        if self.positive.mantissa {
            return Ok(exponential(value));
        }

        let negative = is_negative(value);
        let scaled = (value * f64::from(self.multiplier())).abs();
        let (mut integer_string, mut fraction_string) =
            to_fixed(scaled, self.positive.maximum_fraction_digits);

        if self.positive.decimal_separator_always_shown {
            let optional_digits =
                self.positive.maximum_fraction_digits - self.positive.minimum_fraction_digits;

            // Drop optional trailing zeroes in the fraction.
            let mut stripped = 0;
            while stripped < optional_digits && fraction_string.ends_with('0') {
                fraction_string.pop();
                stripped += 1;
            }

            // Blank the integer part for shapes like `#.0` with 0.5, which
            // render as `.5` rather than `0.5`.
            if self.positive.minimum_fraction_digits > 0
                && self.positive.minimum_integer_digits == 0
                && integer_string == "0"
            {
                integer_string.clear();
            }

            if !fraction_string.is_empty() {
                fraction_string.insert_str(0, &symbols.decimal_separator);
            } else if optional_digits == 0 && self.positive.minimum_fraction_digits == 0 {
                // A pattern like `0.` keeps a bare separator with no digits.
                fraction_string = symbols.decimal_separator.clone();
            }
        } else {
            fraction_string.clear();
        }

        integer_string = pad_start(&integer_string, self.positive.minimum_integer_digits, '0');

        if self.positive.grouping_size > 0 {
            integer_string = apply_grouping(
                &integer_string,
                self.positive.grouping_size,
                &symbols.grouping_separator,
            );
        }

        let half = if negative {
            &self.negative
        } else {
            &self.positive
        };
        Ok(format!(
            "{}{integer_string}{fraction_string}{}",
            half.prefix, half.suffix
        ))
    }

    /// Whether the pattern forces a decimal separator even with no fraction
    /// digits to show
    pub fn is_decimal_separator_always_shown(&self) -> bool {
        self.positive.decimal_separator_always_shown
    }

    /// Whether the pattern includes a mantissa and exponent
    pub fn has_mantissa(&self) -> bool {
        self.positive.mantissa
    }

    /// Grouping size, or zero if the pattern specified no grouping
    pub fn grouping_size(&self) -> usize {
        self.positive.grouping_size
    }

    /// Minimum number of fraction digits specified in the pattern
    pub fn minimum_fraction_digits(&self) -> usize {
        self.positive.minimum_fraction_digits
    }

    /// Maximum number of fraction digits specified in the pattern
    pub fn maximum_fraction_digits(&self) -> usize {
        self.positive.maximum_fraction_digits
    }

    /// Minimum number of integer digits specified in the pattern
    pub fn minimum_integer_digits(&self) -> usize {
        self.positive.minimum_integer_digits
    }

    /// Maximum number of integer digits specified in the pattern; compiled
    /// but never used to truncate during rendering
    pub fn maximum_integer_digits(&self) -> usize {
        self.positive.maximum_integer_digits
    }

    /// The affix symbol that drives the multiplier, or `None` when the
    /// pattern carries no such symbol
    pub fn multiplier_symbol(&self) -> Option<char> {
        if self.positive.prefix.contains('%') || self.positive.suffix.contains('%') {
            Some('%')
        } else {
            None
        }
    }

    /// Scale factor applied to values before digit formatting: 100 for
    /// percent patterns, otherwise 1
    pub fn multiplier(&self) -> u32 {
        match self.multiplier_symbol() {
            Some('%') => 100,
            _ => 1,
        }
    }

    /// Text preceding a positive number
    pub fn positive_prefix(&self) -> &str {
        &self.positive.prefix
    }

    /// Text following a positive number
    pub fn positive_suffix(&self) -> &str {
        &self.positive.suffix
    }

    /// Text preceding a negative number
    pub fn negative_prefix(&self) -> &str {
        &self.negative.prefix
    }

    /// Text following a negative number
    pub fn negative_suffix(&self) -> &str {
        &self.negative.suffix
    }
}
