//! Console table rendering for screened results.
//!
//! Provides:
//! - Fixed-width result table with truncated company names
//! - Human-readable market cap, P/E and dividend yield cells
//! - Run summary (resolved, dropped, passed)

use crate::domain::fetch::FetchOutcome;
use crate::domain::stock::StockRecord;

const ELLIPSIS: &str = "...";

/// Cut `name` to at most `width` characters, ending in `...` when shortened.
pub fn truncate_name(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        return name.to_string();
    }
    if width <= ELLIPSIS.len() {
        return name.chars().take(width).collect();
    }
    let kept: String = name.chars().take(width - ELLIPSIS.len()).collect();
    format!("{kept}{ELLIPSIS}")
}

pub fn format_pe(pe: f64) -> String {
    if pe == 0.0 {
        "N/A".to_string()
    } else {
        format!("{pe:.2}")
    }
}

pub fn format_market_cap(cap: f64) -> String {
    const SCALES: [(f64, &str); 3] = [(1e12, "T"), (1e9, "B"), (1e6, "M")];

    if cap == 0.0 {
        return "N/A".to_string();
    }
    for (scale, suffix) in SCALES {
        if cap >= scale {
            return format!("${:.2}{suffix}", cap / scale);
        }
    }
    format!("${}", group_thousands(cap.round() as i64))
}

/// Provider yields are fractions; shown as a percentage.
pub fn format_dividend_yield(dividend_yield: f64) -> String {
    format!("{:.2}%", dividend_yield * 100.0)
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value < 0 {
        out.insert(0, '-');
    }
    out
}

pub fn format_table(records: &[StockRecord], name_width: usize) -> String {
    if records.is_empty() {
        return "No stocks match the given criteria.\n".to_string();
    }

    let name_width = name_width.max("Name".len());
    let sector_width = records
        .iter()
        .map(|r| r.sector.chars().count())
        .max()
        .unwrap_or(0)
        .max("Sector".len());

    let header = format!(
        "{:<8} {:<name_width$} {:>8} {:>12} {:>9} {:<sector_width$}",
        "Symbol", "Name", "P/E", "Market Cap", "Div Yield", "Sector",
    );
    let rule = "-".repeat(header.trim_end().len());

    let mut output = String::new();
    output.push_str(header.trim_end());
    output.push('\n');
    output.push_str(&rule);
    output.push('\n');

    for record in records {
        let line = format!(
            "{:<8} {:<name_width$} {:>8} {:>12} {:>9} {:<sector_width$}",
            record.symbol,
            truncate_name(&record.name, name_width),
            format_pe(record.pe_ratio),
            format_market_cap(record.market_capitalization),
            format_dividend_yield(record.dividend_yield),
            record.sector,
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}

pub fn format_summary(requested: usize, outcome: &FetchOutcome, passed: usize) -> String {
    let mut output = format!(
        "Resolved {} of {} symbols, {} passed filters\n",
        outcome.records.len(),
        requested,
        passed,
    );
    if !outcome.failed.is_empty() {
        output.push_str(&format!("Dropped: {}\n", outcome.failed.join(", ")));
    }
    output
}
