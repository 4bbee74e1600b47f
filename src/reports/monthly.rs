//! Monthly Report
//!
//! Month-scoped totals and category breakdown, recomputed from the store on
//! every call.

use std::io::Write;

use chrono::NaiveDate;

use crate::display::{format_amount, format_bar, format_percentage, separator};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Amount, Category, Expense, Month};
use crate::storage::ExpenseStore;

/// One category's slice of a month
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    /// Category
    pub category: Category,
    /// Sum of amounts in this category
    pub total: Amount,
    /// Number of expenses in this category
    pub count: usize,
    /// Share of the month total, 0 when the month total is 0
    pub percentage: f64,
    /// The expenses themselves, insertion order
    pub expenses: Vec<Expense>,
}

/// Monthly Report
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    /// Month covered
    pub month: Month,
    /// Expenses in the month, insertion order
    pub expenses: Vec<Expense>,
    /// Sum of all amounts
    pub total: Amount,
    /// Number of expenses
    pub count: usize,
    /// Categories with spending, largest total first
    pub categories: Vec<CategoryShare>,
}

impl MonthlyReport {
    /// Generate the report for `month` from the store's current records
    pub fn generate(store: &ExpenseStore, month: Month) -> Self {
        Self::from_records(month, store.in_month(month))
    }

    /// Build the report from records already scoped to `month`
    pub fn from_records(month: Month, expenses: Vec<Expense>) -> Self {
        let total: Amount = expenses.iter().map(|e| e.amount).sum();

        let mut categories: Vec<CategoryShare> = ExpenseStore::category_breakdown(&expenses)
            .into_iter()
            .map(|(category, totals)| CategoryShare {
                category,
                total: totals.total,
                count: totals.count,
                percentage: percentage_of(totals.total, total),
                expenses: totals.records,
            })
            .collect();

        // Stable: equal totals keep category priority order
        categories.sort_by(|a, b| b.total.value().total_cmp(&a.total.value()));

        Self {
            month,
            count: expenses.len(),
            expenses,
            total,
            categories,
        }
    }

    /// First and last day of the month
    pub fn date_range(&self) -> (NaiveDate, NaiveDate) {
        (self.month.first_day(), self.month.last_day())
    }

    /// Whether the month has no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Share for one category, if it had spending
    pub fn category(&self, category: Category) -> Option<&CategoryShare> {
        self.categories.iter().find(|c| c.category == category)
    }

    /// Expenses sorted by date, newest first
    pub fn detailed(&self) -> Vec<&Expense> {
        let mut expenses: Vec<&Expense> = self.expenses.iter().collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        expenses
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();
        let (start, end) = self.date_range();

        output.push_str(&format!("Monthly Report: {}\n", self.month.long_name()));
        output.push_str(&separator(60));
        output.push('\n');
        output.push_str(&format!(
            "Period: {} - {}\n",
            start.format("%b %-d"),
            end.format("%b %-d, %Y")
        ));
        output.push_str(&format!("Total Spent: {}\n", format_amount(self.total, currency)));
        output.push_str(&format!("Expenses: {}\n\n", self.count));

        if self.categories.is_empty() {
            output.push_str("No expenses recorded this month.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<18} {:>14} {:>6} {:>7}  {}\n",
            "Category", "Amount", "Count", "%", ""
        ));
        output.push_str(&separator(60));
        output.push('\n');

        for share in &self.categories {
            output.push_str(&format!(
                "{:<18} {:>14} {:>6} {:>7}  {}\n",
                format!("{} {}", share.category.icon(), share.category),
                format_amount(share.total, currency),
                share.count,
                format_percentage(share.percentage),
                format_bar(share.percentage, 100.0, 10)
            ));
        }

        output.push_str(&separator(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<18} {:>14} {:>6}\n",
            "TOTAL",
            format_amount(self.total, currency),
            self.count
        ));

        output
    }

    /// Export the category breakdown to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> ExpenseResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        let month = self.month.to_string();

        csv_writer
            .write_record(["Month", "Category", "Amount", "Count", "Percentage"])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;

        for share in &self.categories {
            csv_writer
                .write_record([
                    month.clone(),
                    share.category.label().to_string(),
                    format!("{:.2}", share.total.value()),
                    share.count.to_string(),
                    format!("{:.2}", share.percentage),
                ])
                .map_err(|e| ExpenseError::Export(e.to_string()))?;
        }

        let total_pct = if self.total.is_zero() { "0.00" } else { "100.00" };
        csv_writer
            .write_record([
                month,
                "TOTAL".to_string(),
                format!("{:.2}", self.total.value()),
                self.count.to_string(),
                total_pct.to_string(),
            ])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;

        csv_writer
            .flush()
            .map_err(|e| ExpenseError::Export(e.to_string()))?;

        Ok(())
    }
}

fn percentage_of(part: Amount, whole: Amount) -> f64 {
    if whole.is_zero() {
        0.0
    } else {
        part.value() / whole.value() * 100.0
    }
}
