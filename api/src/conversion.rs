//! The request/response pair exchanged with a rate provider, and how a
//! response is turned into the number the user sees.

use crate::currency::Currency;
use crate::rate_map::RateMap;
use serde::Deserialize;
use thiserror::Error;

/// What to do when a response carries no value for the requested target.
#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::EnumIs)]
pub enum MissingRatePolicy {
    /// Treat the conversion as `0`. No error is raised.
    Zero,
    /// Treat the conversion as failed.
    Fail,
}

/// Policy applied by the converter to responses without the target rate.
// Kept at `Zero`: a partial payload currently shows "0 <CODE>" rather than an error.
pub const MISSING_RATE_POLICY: MissingRatePolicy = MissingRatePolicy::Zero;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConversionError {
    #[error("response has no rate for {0}")]
    MissingRate(Currency),
}

/// The `(amount, from, to)` triple a conversion is requested for.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from: Currency,
    pub to: Currency,
}

impl ConversionRequest {
    pub fn new(amount: f64, from: Currency, to: Currency) -> Self {
        Self { amount, from, to }
    }

    /// `true` when source and target match, so the result is `amount` itself.
    pub fn is_identity(&self) -> bool {
        self.from == self.to
    }
}

/// The JSON body returned by the `latest` endpoint.
///
/// Only `rates` is required. The echoed fields are kept for diagnostics.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ConversionResponse {
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    pub rates: RateMap,
}

impl ConversionResponse {
    /// Extracts the converted amount for `to`.
    ///
    /// The provider has already multiplied by the requested amount, so the
    /// rate entry is the final value.
    pub fn converted_amount(
        &self,
        to: Currency,
        policy: MissingRatePolicy,
    ) -> Result<f64, ConversionError> {
        match (self.rates.get(to), policy) {
            (Some(value), _) => Ok(value),
            (None, MissingRatePolicy::Zero) => Ok(0.0),
            (None, MissingRatePolicy::Fail) => Err(ConversionError::MissingRate(to)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_full_frankfurter_body() {
        let body = r#"{"amount":10.0,"base":"EUR","date":"2024-05-17","rates":{"USD":10.85}}"#;
        let resp: ConversionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.amount, Some(10.0));
        assert_eq!(resp.base.as_deref(), Some("EUR"));
        assert_eq!(resp.date.as_deref(), Some("2024-05-17"));
        assert_eq!(resp.rates.get(Currency::USD), Some(10.85));
    }

    #[test]
    fn rates_alone_is_enough() {
        let resp: ConversionResponse = serde_json::from_str(r#"{"rates":{"USD":10.85}}"#).unwrap();
        assert_eq!(resp.amount, None);
        assert_eq!(
            resp.converted_amount(Currency::USD, MissingRatePolicy::Zero),
            Ok(10.85)
        );
    }

    #[test]
    fn missing_rates_key_fails_to_decode() {
        let err = serde_json::from_str::<ConversionResponse>(r#"{"message":"not found"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn missing_target_follows_policy() {
        let resp: ConversionResponse = serde_json::from_str(r#"{"rates":{}}"#).unwrap();
        assert_eq!(
            resp.converted_amount(Currency::USD, MissingRatePolicy::Zero),
            Ok(0.0)
        );
        assert_eq!(
            resp.converted_amount(Currency::USD, MissingRatePolicy::Fail),
            Err(ConversionError::MissingRate(Currency::USD))
        );
    }

    #[test]
    fn null_target_reads_as_missing() {
        let resp: ConversionResponse = serde_json::from_str(r#"{"rates":{"USD":null}}"#).unwrap();
        assert_eq!(
            resp.converted_amount(Currency::USD, MissingRatePolicy::Zero),
            Ok(0.0)
        );
        assert_eq!(
            resp.converted_amount(Currency::USD, MissingRatePolicy::Fail),
            Err(ConversionError::MissingRate(Currency::USD))
        );
    }

    #[test]
    fn junk_extra_rate_does_not_fail_the_response() {
        let body = r#"{"rates":{"USD":10.85,"XAU":"n/a"}}"#;
        let resp: ConversionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            resp.converted_amount(Currency::USD, MissingRatePolicy::Zero),
            Ok(10.85)
        );
    }

    #[test]
    fn default_policy_is_zero() {
        assert!(MISSING_RATE_POLICY.is_zero());
    }

    #[test]
    fn identity_only_when_codes_match() {
        assert!(ConversionRequest::new(1.0, Currency::EUR, Currency::EUR).is_identity());
        assert!(!ConversionRequest::new(1.0, Currency::EUR, Currency::USD).is_identity());
    }
}
