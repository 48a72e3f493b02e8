//! Provides a map of converted values keyed by target currency.

use crate::currency::Currency;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::str::FromStr;

/// The `rates` object of a conversion response.
///
/// On the wire it is a JSON object from currency code to number. Entries whose
/// code is outside the supported [`Currency`] set, or whose value is not a
/// finite number (`null`, strings, ...), are dropped while decoding. A provider
/// that answers with extra or junk entries therefore does not fail the whole
/// response, and a junk target value reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "HashMap<String, Value>")]
pub struct RateMap(HashMap<Currency, f64>);

impl RateMap {
    /// Creates a new, empty `RateMap`.
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Inserts or updates the value for a given currency, returning the old one.
    pub fn insert(&mut self, currency: Currency, value: f64) -> Option<f64> {
        self.0.insert(currency, value)
    }

    /// Retrieves the value for a specific currency.
    ///
    /// Returns `None` if the response did not carry that currency.
    pub fn get(&self, currency: Currency) -> Option<f64> {
        self.0.get(&currency).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, Value>> for RateMap {
    fn from(raw: HashMap<String, Value>) -> Self {
        let mut map = Self::new();
        for (code, value) in raw {
            let Ok(currency) = Currency::from_str(&code) else {
                continue;
            };
            match value.as_f64() {
                Some(rate) if rate.is_finite() => {
                    map.insert(currency, rate);
                }
                _ => continue,
            }
        }
        map
    }
}

impl FromIterator<(Currency, f64)> for RateMap {
    fn from_iter<I: IntoIterator<Item = (Currency, f64)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (currency, rate) in iter {
            map.insert(currency, rate);
        }
        map
    }
}
