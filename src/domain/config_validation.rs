//! Configuration validation.
//!
//! Rejects settings the fetcher or table cannot work with before any request
//! is made.

use crate::domain::config::ScreenerConfig;
use crate::domain::error::ScreenerError;

/// Longest pause allowed between attempts for one symbol.
pub const MAX_RETRY_DELAY_SECS: f64 = 300.0;

/// Shortest name column that still fits a one-character name plus `...`.
pub const MIN_NAME_LENGTH: i64 = 4;

pub fn validate_config(config: &ScreenerConfig) -> Result<(), ScreenerError> {
    validate_base_url(config)?;
    validate_timeout(config)?;
    validate_retry(config)?;
    validate_name_length(config)?;
    Ok(())
}

fn invalid(section: &str, key: &str, reason: &str) -> ScreenerError {
    ScreenerError::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

fn validate_base_url(config: &ScreenerConfig) -> Result<(), ScreenerError> {
    let url = config.base_url.trim();
    if url.is_empty() {
        return Err(invalid("api", "base_url", "base_url must not be empty"));
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(invalid(
            "api",
            "base_url",
            "base_url must start with http:// or https://",
        ));
    }
    Ok(())
}

fn validate_timeout(config: &ScreenerConfig) -> Result<(), ScreenerError> {
    if config.timeout_secs <= 0 {
        return Err(invalid(
            "request",
            "timeout_secs",
            "timeout_secs must be positive",
        ));
    }
    Ok(())
}

fn validate_retry(config: &ScreenerConfig) -> Result<(), ScreenerError> {
    if config.retry_attempts < 1 {
        return Err(invalid(
            "request",
            "retry_attempts",
            "retry_attempts must be at least 1",
        ));
    }
    let delay = config.retry_delay_secs;
    if !(0.0..=MAX_RETRY_DELAY_SECS).contains(&delay) {
        return Err(invalid(
            "request",
            "retry_delay_secs",
            "retry_delay_secs must be between 0 and 300",
        ));
    }
    Ok(())
}

fn validate_name_length(config: &ScreenerConfig) -> Result<(), ScreenerError> {
    if config.max_name_length < MIN_NAME_LENGTH {
        return Err(invalid(
            "output",
            "max_name_length",
            "max_name_length must be at least 4",
        ));
    }
    Ok(())
}
