use crate::amount::parse_amount;
use crate::conversion::ConversionRequest;
use crate::currency::Currency;
use crate::rate_providers::frankfurter::DEFAULT_BASE_URL;
use dioxus_logger::tracing::Level;
use std::str::FromStr;

/// Startup settings for the converter.
///
/// The app ships as wasm and has no runtime environment, so overrides are
/// taken from environment variables present when the crate is *built*.
#[derive(Clone, PartialEq, Debug)]
pub struct ConverterPrefs {
    api_base_url: String,
    initial_request: ConversionRequest,
    log_level: Level,
}

impl ConverterPrefs {
    const DEFAULT_AMOUNT: f64 = 1.0;
    const DEFAULT_FROM: Currency = Currency::EUR;
    const DEFAULT_TO: Currency = Currency::USD;
    const DEFAULT_LOG_LEVEL: Level = Level::INFO;

    /// Creates prefs from build-time environment variables,
    /// with in-code defaults.
    ///
    /// # Environment Variables (read at compile time):
    /// - `CONVERTER_API_URL`: base URL of a Frankfurter-compatible API.
    /// - `CONVERTER_AMOUNT`: initial amount, e.g. "1".
    /// - `CONVERTER_FROM`, `CONVERTER_TO`: one of USD, EUR, CAD, INR, BRL.
    /// - `CONVERTER_LOG_LEVEL`: trace, debug, info, warn or error.
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("CONVERTER_API_URL"),
            option_env!("CONVERTER_AMOUNT"),
            option_env!("CONVERTER_FROM"),
            option_env!("CONVERTER_TO"),
            option_env!("CONVERTER_LOG_LEVEL"),
        )
    }

    /// Builds prefs from optional raw values. Values that are missing, blank
    /// or unparseable fall back to the defaults.
    pub fn from_overrides(
        api_base_url: Option<&str>,
        amount: Option<&str>,
        from: Option<&str>,
        to: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string();

        let amount = amount
            .and_then(|s| parse_amount(s).ok())
            .unwrap_or(Self::DEFAULT_AMOUNT);

        let from = from
            .and_then(|s| Currency::from_str(s.trim()).ok())
            .unwrap_or(Self::DEFAULT_FROM);

        let to = to
            .and_then(|s| Currency::from_str(s.trim()).ok())
            .unwrap_or(Self::DEFAULT_TO);

        let log_level = log_level
            .and_then(|s| Level::from_str(s.trim()).ok())
            .unwrap_or(Self::DEFAULT_LOG_LEVEL);

        Self {
            api_base_url,
            initial_request: ConversionRequest::new(amount, from, to),
            log_level,
        }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// The triple the form starts with, and the first one converted on mount.
    pub fn initial_request(&self) -> ConversionRequest {
        self.initial_request
    }

    pub fn log_level(&self) -> Level {
        self.log_level
    }
}

impl Default for ConverterPrefs {
    fn default() -> Self {
        Self::from_build_env()
    }
}
