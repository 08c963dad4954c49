//! Core domain types and logic.

pub mod stock;
pub mod metric;
pub mod fetch;
pub mod filter;
pub mod config;
pub mod config_validation;
pub mod error;
