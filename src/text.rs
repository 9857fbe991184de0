//! Fallible numeric parsing for the prompt layer.
//!
//! Surrounding whitespace is accepted, trailing garbage is not, and an
//! unparsable string is simply `None` — no exceptions, no sentinel zeros.

/// Parses an `i32`, tolerating surrounding whitespace.
pub fn parse_i32(input: &str) -> Option<i32> {
    input.trim().parse().ok()
}

/// Parses an `i64`, tolerating surrounding whitespace.
pub fn parse_i64(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

/// Parses an `f64`, tolerating surrounding whitespace. Non-finite spellings
/// ("nan", "inf") are rejected.
pub fn parse_f64(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// True when `input` contains nothing but whitespace.
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}
