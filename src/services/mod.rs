//! Business logic layer for expense-sync
//!
//! Services that sit between the models and the storage layer.

pub mod classifier;

pub use classifier::{classify, CategoryClassifier, DEFAULT_RULES};
