//! Threshold filter pipeline.
//!
//! Each stage is a pure function over a record slice. Stages compose in the
//! fixed order P/E, market cap, dividend yield via [`apply_filters`].

use crate::domain::metric::NO_DATA;
use crate::domain::stock::StockRecord;
use tracing::debug;

/// Optional thresholds for every stage. `None` means "not requested".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterCriteria {
    pub min_pe: Option<f64>,
    pub max_pe: Option<f64>,
    pub min_market_cap: Option<f64>,
    pub min_dividend_yield: Option<f64>,
}

impl FilterCriteria {
    pub fn has_pe_bounds(&self) -> bool {
        self.min_pe.is_some() || self.max_pe.is_some()
    }

    /// True when no stage would run.
    pub fn is_empty(&self) -> bool {
        !self.has_pe_bounds() && self.min_market_cap.is_none() && self.min_dividend_yield.is_none()
    }
}

/// Drops records without a P/E figure, then applies the inclusive bounds.
///
/// Not an identity when both bounds are `None`: zero-P/E records still go.
pub fn filter_by_pe_ratio(
    records: &[StockRecord],
    min_pe: Option<f64>,
    max_pe: Option<f64>,
) -> Vec<StockRecord> {
    records
        .iter()
        .filter(|r| r.pe_ratio != NO_DATA)
        .filter(|r| min_pe.is_none_or(|min| r.pe_ratio >= min))
        .filter(|r| max_pe.is_none_or(|max| r.pe_ratio <= max))
        .cloned()
        .collect()
}

pub fn filter_by_market_cap(records: &[StockRecord], min_cap: Option<f64>) -> Vec<StockRecord> {
    let Some(min_cap) = min_cap else {
        return records.to_vec();
    };
    records
        .iter()
        .filter(|r| r.market_capitalization != NO_DATA && r.market_capitalization >= min_cap)
        .cloned()
        .collect()
}

/// Keeps `dividend_yield >= min_yield`. Zero yields are not treated specially.
pub fn filter_by_dividend_yield(
    records: &[StockRecord],
    min_yield: Option<f64>,
) -> Vec<StockRecord> {
    let Some(min_yield) = min_yield else {
        return records.to_vec();
    };
    records
        .iter()
        .filter(|r| r.dividend_yield >= min_yield)
        .cloned()
        .collect()
}

/// Run every requested stage in order, skipping stages with no thresholds.
pub fn apply_filters(records: &[StockRecord], criteria: &FilterCriteria) -> Vec<StockRecord> {
    let mut current = records.to_vec();

    if criteria.has_pe_bounds() {
        current = filter_by_pe_ratio(&current, criteria.min_pe, criteria.max_pe);
        debug!(remaining = current.len(), "applied P/E filter");
    }
    if criteria.min_market_cap.is_some() {
        current = filter_by_market_cap(&current, criteria.min_market_cap);
        debug!(remaining = current.len(), "applied market cap filter");
    }
    if criteria.min_dividend_yield.is_some() {
        current = filter_by_dividend_yield(&current, criteria.min_dividend_yield);
        debug!(remaining = current.len(), "applied dividend yield filter");
    }

    current
}
