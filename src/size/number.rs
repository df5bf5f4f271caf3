//! Numeric magnitude grammar for sizes
//!
//! Accepts an optional sign followed by an integer or a decimal fraction,
//! surrounded by optional whitespace: `1`, `+1.5`, `-0.5`, `1.`, `.5`.
//! Exponents, digit separators, `inf` and `nan` are rejected.

use std::sync::OnceLock;

use regex::Regex;

use crate::size::error::SizeError;

fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$").unwrap())
}

/// Parse a magnitude string into a float.
pub fn parse_magnitude(input: &str) -> Result<f64, SizeError> {
    let trimmed = input.trim();
    if !number_pattern().is_match(trimmed) {
        return Err(SizeError::InvalidNumber(input.to_string()));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| SizeError::InvalidNumber(input.to_string()))
}

/// Round half to even and convert to a byte count.
pub fn round_to_bytes(value: f64) -> Result<i64, SizeError> {
    // i64::MAX is not representable, 2^63 is the first float out of range
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    let rounded = value.round_ties_even();
    if !rounded.is_finite() || rounded >= LIMIT || rounded < -LIMIT {
        return Err(SizeError::OutOfRange(format!("{value:e}")));
    }
    Ok(rounded as i64)
}
