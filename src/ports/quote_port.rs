//! Quote provider port trait.

use serde::Deserialize;
use serde_json::Value;

/// Raw company overview as returned by the provider.
///
/// Every field is optional and kept as a raw JSON value so that an oddly
/// typed field never fails decoding of the whole body. Fields are normalized
/// later by [`crate::domain::metric::parse_metric`] and
/// [`crate::domain::metric::parse_text`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OverviewPayload {
    #[serde(rename = "Symbol")]
    pub symbol: Option<Value>,
    #[serde(rename = "Name")]
    pub name: Option<Value>,
    #[serde(rename = "PERatio")]
    pub pe_ratio: Option<Value>,
    #[serde(rename = "MarketCapitalization")]
    pub market_capitalization: Option<Value>,
    #[serde(rename = "DividendYield")]
    pub dividend_yield: Option<Value>,
    #[serde(rename = "Sector")]
    pub sector: Option<Value>,
    #[serde(rename = "Note")]
    pub note: Option<Value>,
    #[serde(rename = "Information")]
    pub information: Option<Value>,
    #[serde(rename = "Error Message")]
    pub error_message: Option<Value>,
}

impl OverviewPayload {
    /// Advisory text the provider sends instead of data (rate limits, bad keys).
    pub fn provider_message(&self) -> Option<&str> {
        [&self.error_message, &self.note, &self.information]
            .into_iter()
            .find_map(|v| v.as_ref().and_then(Value::as_str))
    }
}

/// Why a single lookup attempt failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("response body is not a JSON object: {0}")]
    Decode(String),

    #[error("response has no Symbol field{}", .0.as_deref().map(|m| format!(" ({m})")).unwrap_or_default())]
    MissingSymbol(Option<String>),
}

/// Port for looking up one company overview per call.
pub trait QuotePort {
    fn fetch_overview(&self, symbol: &str) -> Result<OverviewPayload, FetchError>;
}
