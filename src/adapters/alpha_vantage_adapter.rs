//! Alpha Vantage `OVERVIEW` adapter over a blocking reqwest client.

use crate::domain::config::ScreenerConfig;
use crate::domain::error::ScreenerError;
use crate::ports::quote_port::{FetchError, OverviewPayload, QuotePort};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

const OVERVIEW_FUNCTION: &str = "OVERVIEW";
const USER_AGENT: &str = concat!("stockscreen/", env!("CARGO_PKG_VERSION"));

pub struct AlphaVantageAdapter {
    client: Client,
    base_url: String,
    api_key: String,
}

impl AlphaVantageAdapter {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ScreenerError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ScreenerError::HttpClient {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &ScreenerConfig) -> Result<Self, ScreenerError> {
        Self::new(
            config.base_url.trim(),
            config.api_key.as_str(),
            config.request_timeout(),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl QuotePort for AlphaVantageAdapter {
    fn fetch_overview(&self, symbol: &str) -> Result<OverviewPayload, FetchError> {
        debug!(symbol, base_url = %self.base_url, "requesting overview");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("function", OVERVIEW_FUNCTION),
                ("symbol", symbol),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body = response.text().map_err(transport_error)?;
        decode_overview(status, &body)
    }
}

fn transport_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Transport(err.to_string())
    }
}

/// Classify a raw HTTP response into a payload or a failed attempt.
///
/// Only 2xx statuses are decoded. The caller decides whether the payload
/// resolved, since a 200 with no `Symbol` is still a failure.
pub fn decode_overview(status: u16, body: &str) -> Result<OverviewPayload, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}
