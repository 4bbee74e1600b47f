//! Core data models for expense-sync
//!
//! This module contains the data structures of the expense domain: the
//! expense record itself, its amount, category, identifier, and the calendar
//! month used for reporting.

pub mod amount;
pub mod category;
pub mod expense;
pub mod ids;
pub mod month;

pub use amount::{Amount, AmountParseError};
pub use category::{Category, UnknownCategory};
pub use expense::{Expense, ExpenseValidationError};
pub use ids::ExpenseId;
pub use month::{Month, MonthParseError};
