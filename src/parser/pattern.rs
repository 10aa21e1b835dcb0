use winnow::Parser;

use crate::error::PatternError;
use crate::parser::subpattern::parse_sub_pattern;
use crate::types::PatternDescriptor;

/// Compile a pattern string into a [`PatternDescriptor`]
///
/// A pattern holds one or two `;`-separated sub-patterns; the second one, if
/// present, describes negative values. Digit-count bounds, grouping size and
/// the separator/exponent flags are derived from the shape of each digit run.
///
/// No semantic validation happens here; that is the job of
/// [`DecimalFormat`](crate::DecimalFormat) construction.
///
/// # Examples
/// ```
/// use decimal_format::parse_pattern;
///
/// let descriptor = parse_pattern("#,##0.00").unwrap();
/// assert_eq!(descriptor.positive.grouping_size, 3);
/// assert_eq!(descriptor.positive.minimum_fraction_digits, 2);
/// assert!(descriptor.negative.is_none());
/// ```
pub fn parse_pattern(pattern: &str) -> Result<PatternDescriptor, PatternError> {
    let mut input = pattern;

    let positive = parse_sub_pattern
        .parse_next(&mut input)
        .map_err(|_| syntax_error(pattern, input))?;

    let mut negative = None;
    if let Some(rest) = input.strip_prefix(';') {
        input = rest;
        negative = Some(
            parse_sub_pattern
                .parse_next(&mut input)
                .map_err(|_| syntax_error(pattern, input))?,
        );
    }

    if !input.is_empty() {
        return Err(syntax_error(pattern, input));
    }

    Ok(PatternDescriptor { positive, negative })
}

fn syntax_error(pattern: &str, remaining: &str) -> PatternError {
    let offset = pattern.len() - remaining.len();
    match remaining.chars().next() {
        Some('\'') => PatternError::UnbalancedQuote { offset },
        Some(found) => PatternError::UnexpectedCharacter { found, offset },
        None => PatternError::UnexpectedEnd { offset },
    }
}
