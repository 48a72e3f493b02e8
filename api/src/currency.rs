//! Defines the currencies the converter can convert between.

use serde::Deserialize;
use serde::Serialize;

/// A currency offered in the converter's dropdowns.
///
/// The set is closed. Declaration order is the order the dropdowns list them in.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum Currency {
    USD, // United States Dollar
    EUR, // Euro
    CAD, // Canadian Dollar
    INR, // Indian Rupee
    BRL, // Brazilian Real
}

impl Currency {
    /// Returns the ISO 4217 string code for the currency (e.g., "USD").
    /// This is handled automatically by the `strum::IntoStaticStr` derive macro.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Returns the full name of the currency.
    pub fn name(&self) -> &'static str {
        match self {
            Self::USD => "United States Dollar",
            Self::EUR => "Euro",
            Self::CAD => "Canadian Dollar",
            Self::INR => "Indian Rupee",
            Self::BRL => "Brazilian Real",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn dropdown_order_is_fixed() {
        let codes: Vec<_> = Currency::iter().map(|c| c.code()).collect();
        assert_eq!(codes, vec!["USD", "EUR", "CAD", "INR", "BRL"]);
    }

    #[rstest]
    #[case("USD", Currency::USD)]
    #[case("eur", Currency::EUR)]
    #[case("Brl", Currency::BRL)]
    fn parses_codes_case_insensitively(#[case] input: &str, #[case] expected: Currency) {
        assert_eq!(Currency::from_str(input), Ok(expected));
    }

    #[rstest]
    #[case("JPY")]
    #[case("")]
    #[case("US D")]
    fn rejects_codes_outside_the_set(#[case] input: &str) {
        assert!(Currency::from_str(input).is_err());
    }

    #[test]
    fn display_matches_code() {
        for currency in Currency::iter() {
            assert_eq!(currency.to_string(), currency.code());
        }
    }

    #[test]
    fn serde_uses_the_code() {
        let json = serde_json::to_string(&Currency::INR).unwrap();
        assert_eq!(json, "\"INR\"");
        let back: Currency = serde_json::from_str("\"CAD\"").unwrap();
        assert_eq!(back, Currency::CAD);
    }
}
