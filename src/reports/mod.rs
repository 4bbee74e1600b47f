//! Reports module for expense-sync
//!
//! Provides the monthly spending report with its per-category breakdown.

pub mod monthly;

pub use monthly::{CategoryShare, MonthlyReport};
