//! Export module for expense-sync
//!
//! Provides data export in two formats:
//! - CSV: one row per expense (spreadsheet-compatible)
//! - JSON: machine-readable full export with metadata

pub mod csv;
pub mod json;

pub use self::csv::export_expenses_csv;
pub use self::json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
