//! Retrieval loop: one overview lookup per symbol with fixed-delay retry.

use crate::domain::stock::StockRecord;
use crate::ports::quote_port::{FetchError, QuotePort};
use std::thread;
use std::time::Duration;
use tracing::{error, info, warn};

/// Attempt budget and pause between attempts for one symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            delay: Duration::from_secs(1),
        }
    }
}

/// Records resolved during one pass, in request order, plus the symbols that
/// exhausted their attempt budget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchOutcome {
    pub records: Vec<StockRecord>,
    pub failed: Vec<String>,
}

impl FetchOutcome {
    /// True when at least one symbol resolved.
    pub fn is_success(&self) -> bool {
        !self.records.is_empty()
    }
}

/// Resolve every symbol in order. Duplicates are fetched again; nothing is
/// deduplicated. A symbol whose attempts are all exhausted yields no record.
pub fn fetch_records(port: &dyn QuotePort, symbols: &[String], policy: &RetryPolicy) -> FetchOutcome {
    let mut outcome = FetchOutcome::default();

    for symbol in symbols {
        match fetch_one(port, symbol, policy) {
            Some(record) => outcome.records.push(record),
            None => outcome.failed.push(symbol.clone()),
        }
    }

    outcome
}

fn fetch_one(port: &dyn QuotePort, symbol: &str, policy: &RetryPolicy) -> Option<StockRecord> {
    let attempts = policy.attempts.max(1);

    for attempt in 1..=attempts {
        let result = port.fetch_overview(symbol).and_then(|payload| {
            StockRecord::from_overview(&payload)
                .ok_or_else(|| FetchError::MissingSymbol(payload.provider_message().map(String::from)))
        });

        match result {
            Ok(record) => {
                info!(symbol, attempt, "fetched overview");
                return Some(record);
            }
            Err(FetchError::Timeout) => {
                warn!(symbol, attempt, attempts, "request timed out");
            }
            Err(FetchError::Status(status)) => {
                warn!(symbol, attempt, attempts, status, "unexpected response status");
            }
            Err(e) => {
                warn!(symbol, attempt, attempts, error = %e, "lookup attempt failed");
            }
        }

        if attempt < attempts && !policy.delay.is_zero() {
            thread::sleep(policy.delay);
        }
    }

    error!(symbol, attempts, "giving up after all attempts failed");
    None
}
