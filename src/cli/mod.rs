//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the tracker.

pub mod export;
pub mod expense;
pub mod report;
pub mod sync;

pub use export::{default_export_path, handle_export_command, ExportArgs, ExportFormat};
pub use expense::{handle_add_command, handle_recent_command, AddArgs, RecentArgs};
pub use report::{handle_report_command, ReportArgs};
pub use sync::{handle_push_command, handle_status_command, handle_sync_command, watch_status};
