//! CLI definition and dispatch.

use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::adapters::alpha_vantage_adapter::AlphaVantageAdapter;
use crate::adapters::csv_export_adapter::CsvExportAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::table_report::{format_summary, format_table};
use crate::domain::config::{parse_symbol_list, ScreenerConfig};
use crate::domain::config_validation::validate_config;
use crate::domain::error::ScreenerError;
use crate::domain::fetch::{fetch_records, FetchOutcome, RetryPolicy};
use crate::domain::filter::{apply_filters, FilterCriteria};
use crate::domain::stock::StockRecord;
use crate::ports::export_port::ExportPort;
use crate::ports::quote_port::QuotePort;

#[derive(Parser, Debug)]
#[command(name = "stockscreen", about = "Screen stocks by P/E, market cap and dividend yield")]
pub struct Cli {
    /// Minimum P/E ratio
    #[arg(long, allow_negative_numbers = true)]
    pub min_pe: Option<f64>,
    /// Maximum P/E ratio
    #[arg(long, allow_negative_numbers = true)]
    pub max_pe: Option<f64>,
    /// Minimum market capitalization
    #[arg(long)]
    pub min_market_cap: Option<f64>,
    /// Minimum dividend yield (provider fraction, e.g. 0.02)
    #[arg(long, allow_negative_numbers = true)]
    pub min_dividend_yield: Option<f64>,
    /// Ticker symbols to screen
    #[arg(long, num_args = 1..)]
    pub symbols: Vec<String>,
    /// Write surviving rows to this CSV file
    #[arg(long)]
    pub export: Option<PathBuf>,
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            min_pe: self.min_pe,
            max_pe: self.max_pe,
            min_market_cap: self.min_market_cap,
            min_dividend_yield: self.min_dividend_yield,
        }
    }
}

/// Result of one screening run.
#[derive(Debug)]
pub struct ScreenReport {
    pub outcome: FetchOutcome,
    pub passed: Vec<StockRecord>,
    /// Export failures are reported, not raised.
    pub export_error: Option<ScreenerError>,
}

pub fn run(cli: Cli) -> ExitCode {
    init_logging(&cli.log_level);

    let config = match resolve_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let quote_port = match AlphaVantageAdapter::from_config(&config) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let symbols = resolve_symbols(&cli.symbols, &config);
    let criteria = cli.criteria();
    info!(symbols = symbols.len(), "screening {}", symbols.join(", "));

    let report = match run_screen(
        &quote_port,
        &CsvExportAdapter,
        &symbols,
        &criteria,
        &config.retry_policy(),
        cli.export.as_deref(),
    ) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{e}");
            return (&e).into();
        }
    };

    let stdout = std::io::stdout();
    if let Err(e) = write_report(&mut stdout.lock(), &report, symbols.len(), config.name_width()) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    if let Some(e) = &report.export_error {
        eprintln!("error: {e}");
    } else if let Some(path) = &cli.export {
        eprintln!("Exported {} rows to {}", report.passed.len(), path.display());
    }

    ExitCode::SUCCESS
}

/// Print the results table, a blank line and the run summary.
pub fn write_report(
    out: &mut impl Write,
    report: &ScreenReport,
    requested: usize,
    name_width: usize,
) -> Result<(), ScreenerError> {
    write!(out, "{}", format_table(&report.passed, name_width))?;
    writeln!(out)?;
    write!(
        out,
        "{}",
        format_summary(requested, &report.outcome, report.passed.len())
    )?;
    out.flush()?;
    Ok(())
}

/// Install the stderr `tracing` subscriber. `RUST_LOG` takes precedence over
/// `level`.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("stockscreen={level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Defaults, then the optional INI file, then the environment; validated.
pub fn resolve_config(path: Option<&Path>) -> Result<ScreenerConfig, ScreenerError> {
    let config = match path {
        Some(p) => {
            info!(path = %p.display(), "loading config");
            ScreenerConfig::from_port(&FileConfigAdapter::from_file(p)?)
        }
        None => ScreenerConfig::default(),
    }
    .with_env_overrides();

    validate_config(&config)?;
    Ok(config)
}

/// Explicit symbols win over the configured default list.
pub fn resolve_symbols(cli_symbols: &[String], config: &ScreenerConfig) -> Vec<String> {
    let explicit = parse_symbol_list(&cli_symbols.join(" "));
    if explicit.is_empty() {
        config.default_symbols.clone()
    } else {
        explicit
    }
}

/// Fetch, filter and optionally export. Fails only when no symbol resolved,
/// in which case nothing is filtered or exported.
pub fn run_screen(
    quote_port: &dyn QuotePort,
    export_port: &dyn ExportPort,
    symbols: &[String],
    criteria: &FilterCriteria,
    policy: &RetryPolicy,
    export_path: Option<&Path>,
) -> Result<ScreenReport, ScreenerError> {
    let outcome = fetch_records(quote_port, symbols, policy);
    if !outcome.is_success() {
        error!(requested = symbols.len(), "no data retrieved");
        return Err(ScreenerError::NoData {
            requested: symbols.len(),
        });
    }

    if criteria.is_empty() {
        info!("no filters requested");
    }
    let passed = apply_filters(&outcome.records, criteria);
    info!(
        fetched = outcome.records.len(),
        passed = passed.len(),
        "filtering complete"
    );

    let export_error = export_path.and_then(|path| {
        export_port
            .export(&passed, path)
            .inspect_err(|e| warn!(error = %e, "export failed"))
            .err()
    });

    Ok(ScreenReport {
        outcome,
        passed,
        export_error,
    })
}
