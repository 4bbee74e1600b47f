//! Expense CLI commands
//!
//! Implements adding expenses and listing the most recent ones.

use clap::Args;

use crate::config::Settings;
use crate::display::{format_amount, format_expense_details, format_expense_list};
use crate::error::ExpenseResult;
use crate::tracker::ExpenseTracker;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount spent (e.g., "12.50")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// What the money was spent on; the category is derived from this
    #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
    pub detail: Vec<String>,
}

/// Arguments for `recent`
#[derive(Args, Debug)]
pub struct RecentArgs {
    /// Number of expenses to show (defaults to the configured limit)
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Handle `add`: persist locally, then wait for the background push
pub async fn handle_add_command(
    tracker: &ExpenseTracker,
    settings: &Settings,
    args: AddArgs,
) -> ExpenseResult<()> {
    let detail = args.detail.join(" ");
    let added = tracker.add(&args.amount, &detail)?;

    println!("Added expense:");
    print!("{}", format_expense_details(&added.expense, &settings.currency_symbol));

    if added.push.wait().await {
        println!("Synced to remote.");
    } else {
        println!("Saved locally (offline); run 'expense push' once the remote is reachable.");
    }

    Ok(())
}

/// Handle `recent`
pub fn handle_recent_command(
    tracker: &ExpenseTracker,
    settings: &Settings,
    args: RecentArgs,
) -> ExpenseResult<()> {
    let limit = args.limit.unwrap_or(settings.recent_limit);
    let expenses = tracker.store().recent(limit);

    print!("{}", format_expense_list(&expenses, &settings.currency_symbol));

    if !expenses.is_empty() {
        let total = expenses.iter().map(|e| e.amount).sum();
        println!(
            "\nShowing {} of {} expenses, totalling {}",
            expenses.len(),
            tracker.store().len(),
            format_amount(total, &settings.currency_symbol)
        );
    }

    Ok(())
}
