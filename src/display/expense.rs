//! Expense display formatting
//!
//! Provides utilities for formatting expenses for terminal display.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};

use super::report::{format_amount, truncate};
use crate::models::Expense;

/// Format a timestamp the way lists show it (`Jan 5, 2025`), in local time
pub fn format_date(at: DateTime<Utc>) -> String {
    format_date_in(at, &Local)
}

/// Format a timestamp on the calendar of `tz`
pub fn format_date_in<Tz: TimeZone>(at: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    at.with_timezone(tz).format("%b %-d, %Y").to_string()
}

/// Format a single expense as a list row
pub fn format_expense_row(expense: &Expense, currency: &str) -> String {
    format!(
        "{} {:<28} {:>14}  {:<16} {}",
        expense.category.icon(),
        truncate(&expense.detail, 28),
        format_amount(expense.amount, currency),
        expense.category.label(),
        format_date(expense.date)
    )
}

/// Format a list of expenses
pub fn format_expense_list(expenses: &[Expense], currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses yet.\n".to_string();
    }

    let mut output = String::new();
    for expense in expenses {
        output.push_str(&format_expense_row(expense, currency));
        output.push('\n');
    }
    output
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:  {}\n", expense.id));
    output.push_str(&format!("Detail:   {}\n", expense.detail));
    output.push_str(&format!("Amount:   {}\n", format_amount(expense.amount, currency)));
    output.push_str(&format!(
        "Category: {} {}\n",
        expense.category.icon(),
        expense.category
    ));
    output.push_str(&format!("Date:     {}\n", format_date(expense.date)));

    output
}
