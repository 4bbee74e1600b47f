//! expense-sync - Local-first personal expense tracker
//!
//! This library provides the core of the expense-sync tracker: expenses are
//! stored in a local JSON file and opportunistically synchronized to a single
//! shared remote JSON document.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expense, amount, category, month)
//! - `services`: Keyword-based category classification
//! - `storage`: Local-first expense store and JSON file helpers
//! - `sync`: Remote transports, sync engine, and background pusher
//! - `reports`: Monthly report and category breakdown
//! - `export`: CSV and JSON export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `expense` binary
//! - `tracker`: Application context tying the pieces together
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_sync::config::{ExpensePaths, Settings};
//! use expense_sync::tracker::ExpenseTracker;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let tracker = ExpenseTracker::open(&paths, &settings)?;
//! let added = tracker.add("12.50", "lunch")?;
//! added.push.wait().await;
//! tracker.shutdown().await;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod sync;
pub mod tracker;

pub use error::{ExpenseError, ExpenseResult};
pub use tracker::{AddedExpense, ExpenseTracker};
