//! Pattern parsing module
//!
//! This module decomposes a DecimalFormat pattern string into its positive
//! and negative sub-pattern descriptors. The main entry point is the
//! `parse_pattern` function.

mod pattern;
mod subpattern;
mod tokens;

pub use pattern::parse_pattern;
