//! CLI commands for reports
//!
//! Provides the monthly report with optional CSV export.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::display::format_expense_list;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Month;
use crate::tracker::ExpenseTracker;

/// Arguments for `report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Month to report on (e.g., "2025-01"), defaults to the current month
    #[arg(short, long)]
    pub month: Option<String>,

    /// Report on the month before the selected one
    #[arg(long)]
    pub prev: bool,

    /// Also list every expense, newest first
    #[arg(short, long)]
    pub detailed: bool,

    /// Export the category breakdown to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle `report`
pub fn handle_report_command(
    tracker: &ExpenseTracker,
    settings: &Settings,
    args: ReportArgs,
) -> ExpenseResult<()> {
    let mut month = match args.month {
        Some(m) => Month::parse(&m)
            .map_err(|e| ExpenseError::invalid_input(format!("Invalid month '{}': {}", m, e)))?,
        None => Month::current(),
    };
    if args.prev {
        month = month.prev();
    }

    let report = tracker.month_report(month);
    print!("{}", report.format_terminal(&settings.currency_symbol));

    if args.detailed && !report.is_empty() {
        println!();
        let detailed: Vec<_> = report.detailed().into_iter().cloned().collect();
        print!("{}", format_expense_list(&detailed, &settings.currency_symbol));
    }

    if let Some(output) = args.output {
        let file = File::create(&output).map_err(|e| {
            ExpenseError::Export(format!("Failed to create file {}: {}", output.display(), e))
        })?;
        report.export_csv(BufWriter::new(file))?;
        println!("\nReport exported to: {}", output.display());
    }

    Ok(())
}
