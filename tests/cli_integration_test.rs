//! CLI integration tests for the screening run orchestration.
//!
//! Tests cover:
//! - Config resolution from real INI files on disk
//! - Full run with a mock quote port and real CSV export
//! - No-data runs skip filtering and export
//! - Export failures are reported without aborting

mod common;

use common::*;
use std::io::Write;
use stockscreen::adapters::csv_export_adapter::CsvExportAdapter;
use stockscreen::cli;
use stockscreen::domain::error::ScreenerError;
use stockscreen::domain::filter::FilterCriteria;
use tempfile::TempDir;

fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

mod config_loading {
    use super::*;

    #[test]
    fn resolve_config_reads_file() {
        let file = write_temp_ini(
            r#"
[request]
timeout_secs = 10
retry_attempts = 5
retry_delay_secs = 0.5

[screener]
symbols = ibm,ko

[output]
max_name_length = 30
"#,
        );

        let config = cli::resolve_config(Some(file.path())).unwrap();

        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.retry_policy().attempts, 5);
        assert_eq!(config.default_symbols, vec!["IBM", "KO"]);
        assert_eq!(config.name_width(), 30);
    }

    #[test]
    fn resolve_config_without_file_uses_defaults() {
        let config = cli::resolve_config(None).unwrap();
        assert_eq!(config.default_symbols.len(), 5);
        assert_eq!(config.retry_policy().attempts, 3);
    }

    #[test]
    fn missing_file_is_a_parse_error() {
        let err = cli::resolve_config(Some(std::path::Path::new("/nonexistent/screener.ini")))
            .unwrap_err();
        assert!(matches!(err, ScreenerError::ConfigParse { .. }));
        assert_eq!(err.status(), 2);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let file = write_temp_ini("[request]\nretry_attempts = 0\n");
        let err = cli::resolve_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, ScreenerError::ConfigInvalid { key, .. } if key == "retry_attempts"));
    }

    #[test]
    fn oversized_retry_delay_is_rejected_before_use() {
        let file = write_temp_ini("[request]\nretry_delay_secs = 1e20\n");
        let err = cli::resolve_config(Some(file.path())).unwrap_err();
        assert!(
            matches!(err, ScreenerError::ConfigInvalid { key, .. } if key == "retry_delay_secs")
        );
    }
}

mod screening_run {
    use super::*;

    fn port() -> MockQuotePort {
        MockQuotePort::new()
            .with_overview(overview("AAPL", "28.4", "3.0e12", "0.0044"))
            .with_overview(overview("MSFT", "35.2", "3.1e12", "0.0072"))
            .with_overview(overview("KO", "24.9", "2.6e11", "0.031"))
    }

    #[test]
    fn filters_and_exports_survivors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("screen.csv");
        let criteria = FilterCriteria {
            max_pe: Some(30.0),
            ..FilterCriteria::default()
        };

        let report = cli::run_screen(
            &port(),
            &CsvExportAdapter,
            &symbols(&["AAPL", "MSFT", "KO"]),
            &criteria,
            &instant_policy(1),
            Some(path.as_path()),
        )
        .unwrap();

        assert_eq!(record_symbols(&report.passed), vec!["AAPL", "KO"]);
        assert!(report.export_error.is_none());

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("AAPL,"));
        assert!(lines[2].starts_with("KO,"));
    }

    #[test]
    fn no_criteria_passes_everything_through() {
        let report = cli::run_screen(
            &port(),
            &RecordingExportPort::new(),
            &symbols(&["AAPL", "MSFT"]),
            &FilterCriteria::default(),
            &instant_policy(1),
            None,
        )
        .unwrap();

        assert_eq!(report.passed, report.outcome.records);
    }

    #[test]
    fn no_data_skips_filtering_and_export() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("never.csv");
        let exporter = RecordingExportPort::new();

        let err = cli::run_screen(
            &MockQuotePort::new(),
            &exporter,
            &symbols(&["AAPL", "GOOGL"]),
            &FilterCriteria::default(),
            &instant_policy(3),
            Some(path.as_path()),
        )
        .unwrap_err();

        assert!(matches!(err, ScreenerError::NoData { requested: 2 }));
        assert!(exporter.exports.borrow().is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn export_failure_is_reported_not_raised() {
        let exporter = RecordingExportPort::failing("read-only file system");
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("screen.csv");

        let report = cli::run_screen(
            &port(),
            &exporter,
            &symbols(&["AAPL"]),
            &FilterCriteria::default(),
            &instant_policy(1),
            Some(path.as_path()),
        )
        .unwrap();

        assert_eq!(report.passed.len(), 1);
        assert!(matches!(report.export_error, Some(ScreenerError::Export { .. })));
        assert_eq!(exporter.exports.borrow().len(), 1);
    }

    #[test]
    fn export_receives_filtered_rows_only() {
        let exporter = RecordingExportPort::new();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("screen.csv");
        let criteria = FilterCriteria {
            min_dividend_yield: Some(0.01),
            ..FilterCriteria::default()
        };

        cli::run_screen(
            &port(),
            &exporter,
            &symbols(&["AAPL", "MSFT", "KO"]),
            &criteria,
            &instant_policy(1),
            Some(path.as_path()),
        )
        .unwrap();

        let exports = exporter.exports.borrow();
        assert_eq!(exports[0].0, path);
        assert_eq!(record_symbols(&exports[0].1), vec!["KO"]);
    }
}
