//! Export port trait for screened results.

use crate::domain::error::ScreenerError;
use crate::domain::stock::StockRecord;
use std::path::Path;

/// Port for writing the surviving records to a tabular file.
pub trait ExportPort {
    fn export(&self, records: &[StockRecord], path: &Path) -> Result<(), ScreenerError>;
}
