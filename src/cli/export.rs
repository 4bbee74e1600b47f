//! CLI commands for data export
//!
//! Exports every expense as CSV or as a full JSON document.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::Utc;
use clap::{Args, ValueEnum};

use crate::config::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, export_full_json};
use crate::tracker::ExpenseTracker;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one row per expense)
    Csv,
    /// JSON format (full export with metadata)
    Json,
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path (defaults to a timestamped file in the export directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// Default export location: `<export_dir>/expenses-<timestamp>.<ext>`
pub fn default_export_path(paths: &ExpensePaths, format: ExportFormat) -> PathBuf {
    paths.export_dir().join(format!(
        "expenses-{}.{}",
        Utc::now().format("%Y%m%d-%H%M%S"),
        format.extension()
    ))
}

/// Handle `export`
pub fn handle_export_command(
    tracker: &ExpenseTracker,
    paths: &ExpensePaths,
    args: ExportArgs,
) -> ExpenseResult<()> {
    let output = match args.output {
        Some(output) => output,
        None => {
            std::fs::create_dir_all(paths.export_dir()).map_err(|e| {
                ExpenseError::Io(format!("Failed to create export directory: {}", e))
            })?;
            default_export_path(paths, args.format)
        }
    };

    let file = File::create(&output).map_err(|e| {
        ExpenseError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Csv => {
            export_expenses_csv(&tracker.store().all(), &mut writer)?;
        }
        ExportFormat::Json => {
            export_full_json(tracker.store(), &mut writer, args.pretty)?;
        }
    }
    writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    println!(
        "Exported {} expenses to: {}",
        tracker.store().len(),
        output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_export_path() {
        let paths = ExpensePaths::with_base_dir(PathBuf::from("/tmp/expense-test"));
        let path = default_export_path(&paths, ExportFormat::Json);

        assert!(path.starts_with(paths.export_dir()));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("json"));
    }
}
