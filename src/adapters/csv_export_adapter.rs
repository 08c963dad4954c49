//! CSV export adapter.

use crate::domain::error::ScreenerError;
use crate::domain::stock::StockRecord;
use crate::ports::export_port::ExportPort;
use std::path::Path;

pub struct CsvExportAdapter;

impl CsvExportAdapter {
    fn export_error(path: &Path, reason: impl ToString) -> ScreenerError {
        ScreenerError::Export {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

impl ExportPort for CsvExportAdapter {
    /// Writes a header row even when `records` is empty.
    fn export(&self, records: &[StockRecord], path: &Path) -> Result<(), ScreenerError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)
            .map_err(|e| Self::export_error(path, e))?;

        writer
            .write_record([
                "symbol",
                "name",
                "pe_ratio",
                "market_capitalization",
                "dividend_yield",
                "sector",
            ])
            .map_err(|e| Self::export_error(path, e))?;

        for record in records {
            writer
                .serialize(record)
                .map_err(|e| Self::export_error(path, e))?;
        }

        writer.flush().map_err(|e| Self::export_error(path, e))?;
        Ok(())
    }
}
