//! Normalized per-symbol metrics snapshot.

use crate::domain::metric::{parse_metric, parse_text};
use crate::ports::quote_port::OverviewPayload;
use serde::Serialize;

/// One normalized company overview. Numeric fields use `0.0` for "no data".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockRecord {
    pub symbol: String,
    pub name: String,
    pub pe_ratio: f64,
    pub market_capitalization: f64,
    pub dividend_yield: f64,
    pub sector: String,
}

impl StockRecord {
    /// Normalize a provider payload. Returns `None` when the payload carries
    /// no usable `Symbol`.
    pub fn from_overview(payload: &OverviewPayload) -> Option<Self> {
        let symbol = parse_text(payload.symbol.as_ref());
        if symbol.is_empty() {
            return None;
        }

        Some(Self {
            symbol,
            name: parse_text(payload.name.as_ref()),
            pe_ratio: parse_metric(payload.pe_ratio.as_ref()),
            market_capitalization: parse_metric(payload.market_capitalization.as_ref()),
            dividend_yield: parse_metric(payload.dividend_yield.as_ref()),
            sector: parse_text(payload.sector.as_ref()),
        })
    }
}
