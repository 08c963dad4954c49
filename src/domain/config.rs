//! Screener settings resolved from an optional INI file and the environment.

use crate::domain::fetch::RetryPolicy;
use crate::ports::config_port::ConfigPort;
use std::time::Duration;

pub const API_KEY_ENV: &str = "ALPHA_VANTAGE_API_KEY";
pub const DEFAULT_API_KEY: &str = "demo";
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";
pub const DEFAULT_SYMBOLS: [&str; 5] = ["AAPL", "GOOGL", "MSFT", "TSLA", "NVDA"];

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenerConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: i64,
    pub retry_attempts: i64,
    pub retry_delay_secs: f64,
    pub default_symbols: Vec<String>,
    pub max_name_length: i64,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            retry_attempts: 3,
            retry_delay_secs: 1.0,
            default_symbols: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            max_name_length: 19,
        }
    }
}

impl ScreenerConfig {
    /// Read every key from `config`, falling back to the defaults above.
    pub fn from_port(config: &dyn ConfigPort) -> Self {
        let defaults = Self::default();
        let default_symbols = config
            .get_string("screener", "symbols")
            .map(|s| parse_symbol_list(&s))
            .filter(|list| !list.is_empty())
            .unwrap_or(defaults.default_symbols);

        Self {
            api_key: config
                .get_string("api", "api_key")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.api_key),
            base_url: config
                .get_string("api", "base_url")
                .unwrap_or(defaults.base_url),
            timeout_secs: config.get_int("request", "timeout_secs", defaults.timeout_secs),
            retry_attempts: config.get_int("request", "retry_attempts", defaults.retry_attempts),
            retry_delay_secs: config.get_double(
                "request",
                "retry_delay_secs",
                defaults.retry_delay_secs,
            ),
            default_symbols,
            max_name_length: config.get_int("output", "max_name_length", defaults.max_name_length),
        }
    }

    /// Replace the API key with `value` when it is set and non-blank.
    pub fn with_api_key_override(mut self, value: Option<String>) -> Self {
        if let Some(key) = value.map(|k| k.trim().to_string()).filter(|k| !k.is_empty()) {
            self.api_key = key;
        }
        self
    }

    /// Apply the `ALPHA_VANTAGE_API_KEY` environment override.
    pub fn with_env_overrides(self) -> Self {
        self.with_api_key_override(std::env::var(API_KEY_ENV).ok())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1) as u64)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            attempts: self.retry_attempts.clamp(1, u32::MAX as i64) as u32,
            delay: Duration::try_from_secs_f64(self.retry_delay_secs.max(0.0))
                .unwrap_or(RetryPolicy::default().delay),
        }
    }

    pub fn name_width(&self) -> usize {
        self.max_name_length.max(0) as usize
    }
}

/// Split a comma or whitespace separated ticker list, upper-casing each entry.
pub fn parse_symbol_list(input: &str) -> Vec<String> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect()
}
