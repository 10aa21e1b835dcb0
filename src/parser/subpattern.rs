use winnow::combinator::{alt, opt, preceded, repeat};
use winnow::{ModalResult, Parser};

use crate::parser::tokens::{
    parse_digit_placeholder, parse_grouping_separator, parse_literal_char, parse_quoted_literal,
};
use crate::types::{DigitPlaceholder, IntegerToken, SubPattern};

/// Numeric portion of a sub-pattern before the digit counts are derived
#[derive(Debug, Default)]
struct NumericSpec {
    integer: Vec<IntegerToken>,
    /// `Some` when the pattern carried a decimal separator token, even with
    /// an empty run behind it
    fraction: Option<Vec<DigitPlaceholder>>,
    mantissa: bool,
}

/// Parse a literal affix run: ordinary characters and quoted literals
fn parse_affix(input: &mut &str) -> ModalResult<String> {
    repeat(
        0..,
        alt((parse_quoted_literal, parse_literal_char.map(String::from))),
    )
    .map(|parts: Vec<String>| parts.concat())
    .parse_next(input)
}

fn parse_integer_run(input: &mut &str) -> ModalResult<Vec<IntegerToken>> {
    repeat(
        0..,
        alt((
            parse_digit_placeholder.map(IntegerToken::Digit),
            parse_grouping_separator,
        )),
    )
    .parse_next(input)
}

fn parse_fraction_run(input: &mut &str) -> ModalResult<Vec<DigitPlaceholder>> {
    repeat(0.., parse_digit_placeholder).parse_next(input)
}

fn parse_numeric_spec(input: &mut &str) -> ModalResult<NumericSpec> {
    let integer = parse_integer_run.parse_next(input)?;
    let fraction = opt(preceded('.', parse_fraction_run)).parse_next(input)?;

    // The exponent width is consumed but not recorded; rendering never reads
    // it. An `E` with no digit placeholders behind it stays in the suffix.
    let exponent: Option<Vec<DigitPlaceholder>> =
        opt(preceded('E', repeat(1.., parse_digit_placeholder))).parse_next(input)?;

    Ok(NumericSpec {
        integer,
        fraction,
        mantissa: exponent.is_some(),
    })
}

/// Parse one sub-pattern: prefix affix, numeric spec, suffix affix
pub fn parse_sub_pattern(input: &mut &str) -> ModalResult<SubPattern> {
    let prefix = parse_affix.parse_next(input)?;
    let spec = parse_numeric_spec.parse_next(input)?;
    let suffix = parse_affix.parse_next(input)?;
    Ok(build_sub_pattern(prefix, spec, suffix))
}

/// Derive the digit-count bounds of a sub-pattern from the shape of its
/// numeric spec
fn build_sub_pattern(prefix: String, spec: NumericSpec, suffix: String) -> SubPattern {
    let minimum_integer_digits = spec
        .integer
        .iter()
        .filter(|t| matches!(t, IntegerToken::Digit(DigitPlaceholder::Required)))
        .count();
    let maximum_integer_digits = spec.integer.iter().filter(|t| t.is_digit()).count();

    // Grouping size counts the placeholders between the rightmost separator
    // and the end of the integer run.
    let grouping_size = match spec
        .integer
        .iter()
        .rposition(|t| matches!(t, IntegerToken::GroupingSeparator))
    {
        Some(idx) => spec.integer[idx + 1..]
            .iter()
            .filter(|t| t.is_digit())
            .count(),
        None => 0,
    };

    let (decimal_separator_always_shown, minimum_fraction_digits, maximum_fraction_digits) =
        match &spec.fraction {
            Some(run) => (
                true,
                run.iter()
                    .filter(|d| matches!(d, DigitPlaceholder::Required))
                    .count(),
                run.len(),
            ),
            None => (false, 0, 0),
        };

    SubPattern {
        prefix,
        suffix,
        decimal_separator_always_shown,
        mantissa: spec.mantissa,
        grouping_size,
        minimum_fraction_digits,
        maximum_fraction_digits,
        minimum_integer_digits,
        maximum_integer_digits,
    }
}
