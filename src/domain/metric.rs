//! Tolerant numeric conversion for provider metric fields.
//!
//! The quote provider reports most numbers as JSON strings and uses the
//! literal `"None"` (occasionally `"-"`) when it has no figure. Every value
//! that cannot be read as a finite number collapses to the sentinel `0.0`.

use serde_json::Value;

/// Sentinel stored in a metric field when the provider had no usable figure.
pub const NO_DATA: f64 = 0.0;

const NO_DATA_MARKERS: [&str; 2] = ["None", "-"];

/// Convert a raw provider value into a metric, never failing.
pub fn parse_metric(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::String(raw)) => parse_metric_text(raw),
        Some(Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(NO_DATA),
        _ => NO_DATA,
    }
}

/// Convert a raw provider value into display text, never failing.
///
/// Strings are trimmed, numbers and booleans use their JSON form, anything
/// else becomes empty.
pub fn parse_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(raw)) => raw.trim().to_string(),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => v.to_string(),
        _ => String::new(),
    }
}

/// Text form of [`parse_metric`].
pub fn parse_metric_text(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() || NO_DATA_MARKERS.contains(&trimmed) {
        return NO_DATA;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => NO_DATA,
    }
}
