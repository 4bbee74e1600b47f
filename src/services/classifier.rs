//! Keyword-based expense categorization
//!
//! Matching is a case-insensitive substring test over an ordered rule table.
//! The first rule with any matching keyword wins, so rule order decides ties
//! ("grocery shopping" lands in Shopping because `shop` is listed first).

use crate::models::Category;

/// Ordered `(category, keywords)` rules; order is significant
pub const DEFAULT_RULES: &[(Category, &[&str])] = &[
    (
        Category::Shopping,
        &["shop", "shopping", "clothes", "dress", "shoe", "fashion", "mall"],
    ),
    (
        Category::Groceries,
        &[
            "grocery",
            "groceries",
            "food",
            "vegetable",
            "fruit",
            "market",
            "supermarket",
        ],
    ),
    (
        Category::Fees,
        &["fee", "fees", "tuition", "school", "education", "course", "class"],
    ),
    (
        Category::Petrol,
        &["petrol", "gas", "fuel", "diesel", "gasoline"],
    ),
    (
        Category::CarMaintenance,
        &[
            "car",
            "vehicle",
            "maintenance",
            "repair",
            "service",
            "mechanic",
            "oil change",
            "tire",
        ],
    ),
    (
        Category::Utilities,
        &[
            "electric",
            "electricity",
            "water",
            "gas bill",
            "utility",
            "internet",
            "phone",
        ],
    ),
    (
        Category::Healthcare,
        &["doctor", "medicine", "medical", "hospital", "pharmacy", "health"],
    ),
    (
        Category::Entertainment,
        &["movie", "cinema", "game", "entertainment", "fun", "party"],
    ),
    (
        Category::Transportation,
        &["taxi", "uber", "bus", "train", "transport", "fare"],
    ),
    (
        Category::Dining,
        &["restaurant", "cafe", "coffee", "lunch", "dinner", "breakfast", "eat"],
    ),
];

/// Classifies free-text details into categories
#[derive(Debug, Clone, Copy)]
pub struct CategoryClassifier {
    rules: &'static [(Category, &'static [&'static str])],
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_RULES)
    }
}

impl CategoryClassifier {
    /// Create a classifier over an ordered rule table
    pub const fn new(rules: &'static [(Category, &'static [&'static str])]) -> Self {
        Self { rules }
    }

    /// The rule table in priority order
    pub fn rules(&self) -> &'static [(Category, &'static [&'static str])] {
        self.rules
    }

    /// Classify a detail string; never fails, falls back to `Other`
    pub fn classify(&self, detail: &str) -> Category {
        let lowered = detail.to_lowercase();

        self.rules
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Other)
    }
}

/// Classify with the default rule table
pub fn classify(detail: &str) -> Category {
    CategoryClassifier::default().classify(detail)
}
