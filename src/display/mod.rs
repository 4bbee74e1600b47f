//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and reports for terminal
//! display.

pub mod expense;
pub mod report;

pub use expense::{
    format_date, format_date_in, format_expense_details, format_expense_list, format_expense_row,
};
pub use report::{format_amount, format_bar, format_percentage, separator, truncate};
