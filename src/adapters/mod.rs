//! Concrete adapter implementations for ports.

pub mod alpha_vantage_adapter;
pub mod csv_export_adapter;
pub mod file_config_adapter;
pub mod table_report;
