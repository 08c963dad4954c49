#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::time::Duration;
use stockscreen::domain::error::ScreenerError;
use stockscreen::domain::fetch::RetryPolicy;
pub use stockscreen::domain::stock::StockRecord;
use stockscreen::ports::export_port::ExportPort;
use stockscreen::ports::quote_port::{FetchError, OverviewPayload, QuotePort};

/// Quote port replaying a queue of attempt results per symbol. Symbols with no
/// queued result fail every attempt with a transport error.
pub struct MockQuotePort {
    scripts: RefCell<HashMap<String, VecDeque<Result<OverviewPayload, FetchError>>>>,
    calls: RefCell<Vec<String>>,
}

impl MockQuotePort {
    pub fn new() -> Self {
        Self {
            scripts: RefCell::new(HashMap::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_overview(self, overview: OverviewPayload) -> Self {
        let symbol = overview
            .symbol
            .as_ref()
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        self.with_results(&symbol, vec![Ok(overview)])
    }

    pub fn with_results(
        self,
        symbol: &str,
        results: Vec<Result<OverviewPayload, FetchError>>,
    ) -> Self {
        self.scripts
            .borrow_mut()
            .entry(symbol.to_string())
            .or_default()
            .extend(results);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self, symbol: &str) -> usize {
        self.calls.borrow().iter().filter(|s| *s == symbol).count()
    }
}

impl QuotePort for MockQuotePort {
    fn fetch_overview(&self, symbol: &str) -> Result<OverviewPayload, FetchError> {
        self.calls.borrow_mut().push(symbol.to_string());
        self.scripts
            .borrow_mut()
            .get_mut(symbol)
            .and_then(|q| q.pop_front())
            .unwrap_or_else(|| Err(FetchError::Transport("connection reset".into())))
    }
}

/// Export port that records what it was asked to write.
pub struct RecordingExportPort {
    pub exports: RefCell<Vec<(PathBuf, Vec<StockRecord>)>>,
    pub fail_with: Option<String>,
}

impl RecordingExportPort {
    pub fn new() -> Self {
        Self {
            exports: RefCell::new(Vec::new()),
            fail_with: None,
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            exports: RefCell::new(Vec::new()),
            fail_with: Some(reason.to_string()),
        }
    }
}

impl ExportPort for RecordingExportPort {
    fn export(&self, records: &[StockRecord], path: &Path) -> Result<(), ScreenerError> {
        self.exports
            .borrow_mut()
            .push((path.to_path_buf(), records.to_vec()));
        match &self.fail_with {
            Some(reason) => Err(ScreenerError::Export {
                path: path.display().to_string(),
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}

pub fn overview(symbol: &str, pe: &str, cap: &str, dividend_yield: &str) -> OverviewPayload {
    OverviewPayload {
        symbol: Some(symbol.into()),
        name: Some(format!("{symbol} Corporation").into()),
        pe_ratio: Some(pe.into()),
        market_capitalization: Some(cap.into()),
        dividend_yield: Some(dividend_yield.into()),
        sector: Some("TECHNOLOGY".into()),
        ..OverviewPayload::default()
    }
}

pub fn instant_policy(attempts: u32) -> RetryPolicy {
    RetryPolicy {
        attempts,
        delay: Duration::ZERO,
    }
}

pub fn symbols(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

pub fn record_symbols(records: &[StockRecord]) -> Vec<&str> {
    records.iter().map(|r| r.symbol.as_str()).collect()
}
