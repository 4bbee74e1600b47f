//! Expense record model
//!
//! An expense is immutable once created. The category is assigned by the
//! classifier at creation time and never recomputed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::category::Category;
use super::ids::ExpenseId;

/// A single expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Creation-time derived identifier
    pub id: ExpenseId,

    /// Non-negative amount
    pub amount: Amount,

    /// Trimmed, non-empty description
    pub detail: String,

    /// Creation timestamp (client clock)
    pub date: DateTime<Utc>,

    /// Category assigned at creation
    pub category: Category,
}

impl Expense {
    /// Build a record from already-validated parts
    pub fn new(
        id: ExpenseId,
        amount: Amount,
        detail: impl Into<String>,
        date: DateTime<Utc>,
        category: Category,
    ) -> Self {
        Self {
            id,
            amount,
            detail: detail.into(),
            date,
            category,
        }
    }

    /// Validate a record received from outside the store
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.detail.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDetail);
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.detail, self.amount, self.category)
    }
}

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDetail,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDetail => write!(f, "expense detail cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Expense {
        Expense::new(
            ExpenseId::from_raw(1_735_689_600_000),
            Amount::new(500.0).unwrap(),
            "grocery run",
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            Category::Groceries,
        )
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["id"], 1_735_689_600_000i64);
        assert_eq!(value["amount"], 500.0);
        assert_eq!(value["detail"], "grocery run");
        assert_eq!(value["category"], "Groceries");
        assert!(value["date"].as_str().unwrap().starts_with("2025-01-01T00:00:00"));
    }

    #[test]
    fn test_parses_iso_date_with_millis() {
        let json = r#"{"id": 1, "amount": 12.5, "detail": "taxi", "date": "2025-03-04T10:11:12.345Z", "category": "Transportation"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.category, Category::Transportation);
        assert_eq!(expense.date.timestamp_subsec_millis(), 345);
    }

    #[test]
    fn test_validate() {
        let mut expense = sample();
        assert!(expense.validate().is_ok());
        expense.detail = "  ".into();
        assert_eq!(expense.validate(), Err(ExpenseValidationError::EmptyDetail));
    }
}
