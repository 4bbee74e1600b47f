//! JSON Export functionality
//!
//! Exports every expense to JSON with schema versioning and summary
//! metadata.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::storage::ExpenseStore;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All expenses, insertion order
    pub expenses: Vec<Expense>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of expenses
    pub expense_count: usize,

    /// Date range of expenses (earliest)
    pub earliest_expense: Option<DateTime<Utc>>,

    /// Date range of expenses (latest)
    pub latest_expense: Option<DateTime<Utc>>,
}

impl FullExport {
    /// Snapshot the store's current records
    pub fn from_store(store: &ExpenseStore) -> Self {
        Self::from_expenses(store.all())
    }

    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            earliest_expense: expenses.iter().map(|e| e.date).min(),
            latest_expense: expenses.iter().map(|e| e.date).max(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses,
            metadata,
        }
    }
}

/// Export all expenses to JSON
pub fn export_full_json<W: Write>(
    store: &ExpenseStore,
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<()> {
    let export = FullExport::from_store(store);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, ExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = ExpenseStore::open_in(&paths).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_metadata() {
        let (_temp, store) = create_test_store();
        let early = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        store.add_at("5", "bus", late).unwrap();
        store.add_at("7", "fruit", early).unwrap();

        let export = FullExport::from_store(&store);

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.expense_count, 2);
        assert_eq!(export.metadata.earliest_expense, Some(early));
        assert_eq!(export.metadata.latest_expense, Some(late));
    }

    #[test]
    fn test_export_full_json() {
        let (_temp, store) = create_test_store();
        store.add("12", "doctor visit").unwrap();

        let mut output = Vec::new();
        export_full_json(&store, &mut output, true).unwrap();

        let parsed: FullExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.expenses, store.all());
        assert_eq!(parsed.metadata.expense_count, 1);
    }

    #[test]
    fn test_empty_store_has_no_date_range() {
        let (_temp, store) = create_test_store();
        let export = FullExport::from_store(&store);
        assert_eq!(export.metadata.expense_count, 0);
        assert!(export.metadata.earliest_expense.is_none());
    }
}
