//! Configuration module for expense-sync
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Remote document store settings

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::{RemoteSettings, Settings};
