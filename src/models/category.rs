//! Expense categories
//!
//! The set is fixed. Variant order is the classification priority order and
//! is also the order used when categories are listed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the fixed expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    Shopping,
    Groceries,
    Fees,
    Petrol,
    CarMaintenance,
    Utilities,
    Healthcare,
    Entertainment,
    Transportation,
    Dining,
    Other,
}

impl Category {
    /// All categories in priority order
    pub const ALL: [Category; 11] = [
        Category::Shopping,
        Category::Groceries,
        Category::Fees,
        Category::Petrol,
        Category::CarMaintenance,
        Category::Utilities,
        Category::Healthcare,
        Category::Entertainment,
        Category::Transportation,
        Category::Dining,
        Category::Other,
    ];

    /// The wire/display label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Shopping => "Shopping",
            Self::Groceries => "Groceries",
            Self::Fees => "Fees",
            Self::Petrol => "Petrol",
            Self::CarMaintenance => "Car Maintenance",
            Self::Utilities => "Utilities",
            Self::Healthcare => "Healthcare",
            Self::Entertainment => "Entertainment",
            Self::Transportation => "Transportation",
            Self::Dining => "Dining",
            Self::Other => "Other",
        }
    }

    /// Short icon shown next to the category in reports
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Shopping => "🛍️",
            Self::Groceries => "🛒",
            Self::Fees => "📚",
            Self::Petrol => "⛽",
            Self::CarMaintenance => "🔧",
            Self::Utilities => "💡",
            Self::Healthcare => "⚕️",
            Self::Entertainment => "🎬",
            Self::Transportation => "🚗",
            Self::Dining => "🍽️",
            Self::Other => "📦",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl TryFrom<String> for Category {
    type Error = UnknownCategory;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

/// A category label outside the fixed set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category '{}'", self.0)
    }
}

impl std::error::Error for UnknownCategory {}
