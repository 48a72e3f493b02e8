//! Defines traits and implementations for external exchange-rate providers.

use crate::conversion::ConversionRequest;
use crate::conversion::ConversionResponse;
use crate::ApiError;

/// A trait for any service that can convert an amount between two currencies.
pub trait RateProvider {
    /// Requests the conversion described by `request`.
    async fn convert(&self, request: &ConversionRequest) -> Result<ConversionResponse, ApiError>;
}

/// Provides conversions from the public Frankfurter API (ECB reference rates).
pub mod frankfurter {
    use super::*;
    use crate::amount::format_amount;
    use dioxus_logger::tracing;

    pub const DEFAULT_BASE_URL: &str = "https://api.frankfurter.app";

    /// An implementation of the `RateProvider` trait for Frankfurter.
    #[derive(Clone, Debug)]
    pub struct Frankfurter {
        client: reqwest::Client,
        base_url: String,
    }

    impl Frankfurter {
        pub fn new(base_url: impl Into<String>) -> Self {
            Self {
                client: reqwest::Client::new(),
                base_url: base_url.into(),
            }
        }

        /// The `latest` endpoint under the configured base URL.
        pub fn latest_url(&self) -> String {
            format!("{}/latest", self.base_url.trim_end_matches('/'))
        }

        /// Query parameters for `request`, in the order the endpoint documents them.
        pub fn query(request: &ConversionRequest) -> [(&'static str, String); 3] {
            [
                ("amount", format_amount(request.amount)),
                ("from", request.from.code().to_string()),
                ("to", request.to.code().to_string()),
            ]
        }
    }

    impl Default for Frankfurter {
        fn default() -> Self {
            Self::new(DEFAULT_BASE_URL)
        }
    }

    impl RateProvider for Frankfurter {
        async fn convert(
            &self,
            request: &ConversionRequest,
        ) -> Result<ConversionResponse, ApiError> {
            let url = self.latest_url();
            tracing::debug!("GET {} {:?}", url, request);

            let resp = self
                .client
                .get(&url)
                .query(&Self::query(request))
                .send()
                .await?
                .error_for_status()?
                .json::<ConversionResponse>()
                .await?;

            tracing::debug!(
                "frankfurter answered base={:?} date={:?} rates={}",
                resp.base,
                resp.date,
                resp.rates.len()
            );

            Ok(resp)
        }
    }

}
