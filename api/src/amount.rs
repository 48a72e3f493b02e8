//! Parsing and formatting of the amounts typed into and shown by the converter.
//!
//! Amounts are plain `f64`s. The converter only forwards them to the rate
//! provider and echoes results back.

use thiserror::Error;

/// An error that can occur when parsing a string into an amount.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseAmountError {
    /// The string is empty or only whitespace.
    #[error("amount is empty")]
    Empty,
    /// The string is not in a valid numeric format (e.g., "abc", "1.2.3").
    #[error("invalid amount format")]
    InvalidFormat,
    /// The string parsed to infinity or NaN.
    #[error("amount is not a finite number")]
    NotFinite,
}

/// Parses an amount strictly.
///
/// Surrounding whitespace is ignored. Sign and exponent notation are accepted
/// the way `f64::from_str` accepts them.
///
/// # Examples
/// ```
/// use api::amount::{parse_amount, ParseAmountError};
///
/// assert_eq!(parse_amount(" 12.5 "), Ok(12.5));
/// assert_eq!(parse_amount("abc"), Err(ParseAmountError::InvalidFormat));
/// ```
pub fn parse_amount(s: &str) -> Result<f64, ParseAmountError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let value = s
        .parse::<f64>()
        .map_err(|_| ParseAmountError::InvalidFormat)?;

    if !value.is_finite() {
        return Err(ParseAmountError::NotFinite);
    }

    Ok(value)
}

/// Coerces raw input text into an amount, never failing.
///
/// Empty text becomes `0`. Text that does not parse as a finite number also
/// becomes `0`. Negative numbers pass through unchanged.
pub fn coerce_amount(s: &str) -> f64 {
    parse_amount(s).unwrap_or(0.0)
}

/// Formats an amount using the shortest representation that round-trips.
///
/// Whole numbers print without a fractional part (`1`, not `1.0`) and negative
/// zero prints as `0`.
pub fn format_amount(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
