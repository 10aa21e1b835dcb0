use winnow::combinator::{alt, delimited, repeat};
use winnow::error::ErrMode;
use winnow::token::{literal, none_of};
use winnow::{ModalResult, Parser};

use crate::types::{DigitPlaceholder, IntegerToken};

/// Characters with structural meaning in a pattern; an unquoted affix run
/// ends at any of these.
pub const STRUCTURAL_CHARS: [char; 6] = ['0', '#', '.', ',', ';', '\''];

pub fn parse_required_digit(input: &mut &str) -> ModalResult<DigitPlaceholder> {
    literal("0")
        .value(DigitPlaceholder::Required)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_optional_digit(input: &mut &str) -> ModalResult<DigitPlaceholder> {
    literal("#")
        .value(DigitPlaceholder::Optional)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_digit_placeholder(input: &mut &str) -> ModalResult<DigitPlaceholder> {
    alt((parse_required_digit, parse_optional_digit)).parse_next(input)
}

pub fn parse_grouping_separator(input: &mut &str) -> ModalResult<IntegerToken> {
    literal(",")
        .value(IntegerToken::GroupingSeparator)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

/// Parse a quoted literal run, like `'#'`. A doubled quote inside the run is
/// one literal quote character.
pub fn parse_quoted_literal(input: &mut &str) -> ModalResult<String> {
    let content_parser = repeat(0.., alt((literal("''").value('\''), none_of(['\'']))))
        .map(|chars: Vec<char>| chars.into_iter().collect::<String>());

    delimited('\'', content_parser, '\'')
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

/// Parse one ordinary affix character: anything without structural meaning,
/// including `%`, `‰`, `-` and spaces.
pub fn parse_literal_char(input: &mut &str) -> ModalResult<char> {
    none_of(STRUCTURAL_CHARS)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}
