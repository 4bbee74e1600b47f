//! Storage layer for expense-sync
//!
//! Provides the expense store and the JSON file helpers it writes through,
//! with atomic writes and automatic directory creation.

pub mod expenses;
pub mod file_io;

pub use expenses::{CategoryBreakdown, CategoryTotals, ExpenseStore};
pub use file_io::{read_json, read_json_or_default, write_json_atomic};
