//! Rendering primitives shared by the formatter
//!
//! Small string and number helpers: occurrence counting, string reversal,
//! left padding, grouping insertion, negative-zero detection, fixed-point
//! digit extraction and the exponential fallback.

/// Count non-overlapping occurrences of `needle` in `haystack`, scanning
/// left to right
pub(crate) fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

pub(crate) fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

/// Whether a value selects the negative sub-pattern; negative zero counts as
/// negative, matching the sign-bit convention of the reference formatter
pub(crate) fn is_negative(value: f64) -> bool {
    if value == 0.0 {
        value.is_sign_negative()
    } else {
        value < 0.0
    }
}

/// Left-pad `s` with `pad` to at least `width` characters
pub(crate) fn pad_start(s: &str, width: usize, pad: char) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(width);
    for _ in 0..width - len {
        out.push(pad);
    }
    out.push_str(s);
    out
}

/// Insert `separator` into `digits` every `size` characters, counted from
/// the rightmost digit; a size of zero or at least the digit count leaves
/// the string unchanged
pub(crate) fn apply_grouping(digits: &str, size: usize, separator: &str) -> String {
    if size == 0 {
        return digits.to_string();
    }
    // Work on the reversed string so groups count from the rightmost digit;
    // the separator is reversed too so its characters survive the flip back.
    let reversed_separator = reverse_string(separator);
    let mut grouped = String::new();
    for (i, ch) in reverse_string(digits).chars().enumerate() {
        if i > 0 && i % size == 0 {
            grouped.push_str(&reversed_separator);
        }
        grouped.push(ch);
    }
    reverse_string(&grouped)
}

/// Round a non-negative `value` to `digits` fraction digits, half away from
/// zero, and split the result into integer and fraction digit strings. The
/// fraction string is exactly `digits` characters wide.
pub(crate) fn to_fixed(value: f64, digits: usize) -> (String, String) {
    let shifted = (value * 10f64.powi(digits as i32)).round();
    let mut all_digits = format!("{shifted:.0}");
    if all_digits.len() <= digits {
        all_digits = pad_start(&all_digits, digits + 1, '0');
    }
    let split = all_digits.len() - digits;
    (all_digits[..split].to_string(), all_digits[split..].to_string())
}

/// Render `value` in exponential notation: shortest mantissa, explicit sign
/// on the exponent, zeros as `0e+0`
pub(crate) fn exponential(value: f64) -> String {
    if value == 0.0 {
        return "0e+0".to_string();
    }
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}
