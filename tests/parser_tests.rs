use decimal_format::{DecimalFormat, PatternError, parse_pattern};

#[test]
fn integer_only_patterns() {
    let descriptor = parse_pattern("#").unwrap();
    assert_eq!(descriptor.positive.minimum_integer_digits, 0);
    assert_eq!(descriptor.positive.maximum_integer_digits, 1);
    assert!(!descriptor.positive.decimal_separator_always_shown);
    assert_eq!(descriptor.positive.maximum_fraction_digits, 0);

    let descriptor = parse_pattern("0").unwrap();
    assert_eq!(descriptor.positive.minimum_integer_digits, 1);
    assert_eq!(descriptor.positive.maximum_integer_digits, 1);
}

#[test]
fn trailing_decimal_separator() {
    for pattern in ["#.", "0."] {
        let descriptor = parse_pattern(pattern).unwrap();
        assert!(
            descriptor.positive.decimal_separator_always_shown,
            "separator flag missing for {pattern:?}"
        );
        assert_eq!(descriptor.positive.minimum_fraction_digits, 0);
        assert_eq!(descriptor.positive.maximum_fraction_digits, 0);
    }

    // A lone separator compiles to an all-zero descriptor.
    let descriptor = parse_pattern(".").unwrap();
    assert!(descriptor.positive.decimal_separator_always_shown);
    assert_eq!(descriptor.positive.maximum_integer_digits, 0);
    assert_eq!(descriptor.positive.maximum_fraction_digits, 0);
}

#[test]
fn fraction_bounds() {
    let descriptor = parse_pattern("#.###").unwrap();
    assert_eq!(descriptor.positive.minimum_fraction_digits, 0);
    assert_eq!(descriptor.positive.maximum_fraction_digits, 3);

    let descriptor = parse_pattern("#.000").unwrap();
    assert_eq!(descriptor.positive.minimum_fraction_digits, 3);
    assert_eq!(descriptor.positive.maximum_fraction_digits, 3);

    let descriptor = parse_pattern("#0.0#").unwrap();
    assert_eq!(descriptor.positive.minimum_fraction_digits, 1);
    assert_eq!(descriptor.positive.maximum_fraction_digits, 2);
    assert_eq!(descriptor.positive.minimum_integer_digits, 1);
    assert_eq!(descriptor.positive.maximum_integer_digits, 2);
}

#[test]
fn grouping_sizes() {
    assert_eq!(parse_pattern(",#").unwrap().positive.grouping_size, 1);
    assert_eq!(parse_pattern(",0").unwrap().positive.grouping_size, 1);
    assert_eq!(parse_pattern("#,#").unwrap().positive.grouping_size, 1);
    assert_eq!(parse_pattern("#,##").unwrap().positive.grouping_size, 2);
    assert_eq!(parse_pattern("#,###").unwrap().positive.grouping_size, 3);
    assert_eq!(parse_pattern("#").unwrap().positive.grouping_size, 0);

    // Only the rightmost separator decides the grouping size.
    let descriptor = parse_pattern("#,#,#,###").unwrap();
    assert_eq!(descriptor.positive.grouping_size, 3);
    assert_eq!(descriptor.positive.maximum_integer_digits, 6);
}

#[test]
fn implicit_negative_half() {
    let formatter = DecimalFormat::new("0.00").unwrap();
    assert_eq!(formatter.positive_prefix(), "");
    assert_eq!(formatter.negative_prefix(), "-");
    assert_eq!(formatter.negative_suffix(), "");
}

#[test]
fn explicit_negative_half() {
    let formatter = DecimalFormat::new("0.00;(0.00)").unwrap();
    assert_eq!(formatter.negative_prefix(), "(");
    assert_eq!(formatter.negative_suffix(), ")");

    let formatter = DecimalFormat::new("A#B;C#D").unwrap();
    assert_eq!(formatter.negative_prefix(), "C");
    assert_eq!(formatter.negative_suffix(), "D");

    let formatter = DecimalFormat::new("A#B;C-#D").unwrap();
    assert_eq!(formatter.negative_prefix(), "C-");
}

#[test]
fn identical_negative_prefix_gains_minus() {
    let formatter = DecimalFormat::new("A#;A#").unwrap();
    assert_eq!(formatter.negative_prefix(), "-A");

    let formatter = DecimalFormat::new("-#-;-#-").unwrap();
    assert_eq!(formatter.negative_prefix(), "--");
    assert_eq!(formatter.negative_suffix(), "-");
}

#[test]
fn multiplier_accessors() {
    let formatter = DecimalFormat::new("#%").unwrap();
    assert_eq!(formatter.multiplier_symbol(), Some('%'));
    assert_eq!(formatter.multiplier(), 100);

    let formatter = DecimalFormat::new("%#").unwrap();
    assert_eq!(formatter.multiplier_symbol(), Some('%'));
    assert_eq!(formatter.multiplier(), 100);

    let formatter = DecimalFormat::new("#").unwrap();
    assert_eq!(formatter.multiplier_symbol(), None);
    assert_eq!(formatter.multiplier(), 1);

    // Per-mille is recognized as an affix literal but never drives the
    // multiplier.
    let formatter = DecimalFormat::new("#\u{2030}").unwrap();
    assert_eq!(formatter.positive_suffix(), "\u{2030}");
    assert_eq!(formatter.multiplier_symbol(), None);
    assert_eq!(formatter.multiplier(), 1);
}

#[test]
fn too_many_percent_markers() {
    let error = DecimalFormat::new("%#%").unwrap_err();
    assert_eq!(error, PatternError::TooManyMultiplierSymbols);
    assert!(error.is_semantic());
    assert!(!error.is_syntax());
    assert_eq!(
        error.to_string(),
        "too many percent/per mille characters in pattern"
    );

    assert!(DecimalFormat::new("#%").is_ok());
}

#[test]
fn exponential_pattern_needs_a_digit() {
    for pattern in [".E0", "#E0", "#.#E0"] {
        let error = DecimalFormat::new(pattern).unwrap_err();
        assert_eq!(error, PatternError::ExponentWithoutDigits, "for {pattern:?}");
        assert!(error.is_semantic());
    }

    assert!(DecimalFormat::new("0E0").unwrap().has_mantissa());
    assert!(DecimalFormat::new("#.0E0").unwrap().has_mantissa());
    assert!(DecimalFormat::new("0.###E0").unwrap().has_mantissa());
}

#[test]
fn syntax_errors_are_distinguishable() {
    let error = parse_pattern("'abc").unwrap_err();
    assert!(error.is_syntax());
    assert!(matches!(error, PatternError::UnbalancedQuote { offset: 0 }));

    let error = parse_pattern("0.0.0").unwrap_err();
    assert!(error.is_syntax());

    let error = parse_pattern("0;0;0").unwrap_err();
    assert!(matches!(
        error,
        PatternError::UnexpectedCharacter { found: ';', .. }
    ));
}

#[test]
fn derived_accessors() {
    let formatter = DecimalFormat::new("#,##0.0#").unwrap();
    assert!(formatter.is_decimal_separator_always_shown());
    assert!(!formatter.has_mantissa());
    assert_eq!(formatter.grouping_size(), 3);
    assert_eq!(formatter.minimum_fraction_digits(), 1);
    assert_eq!(formatter.maximum_fraction_digits(), 2);
    assert_eq!(formatter.minimum_integer_digits(), 1);
    assert_eq!(formatter.maximum_integer_digits(), 4);
}
