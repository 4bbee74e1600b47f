use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_sync::cli::{
    handle_add_command, handle_export_command, handle_push_command, handle_recent_command,
    handle_report_command, handle_status_command, handle_sync_command, watch_status, AddArgs,
    ExportArgs, RecentArgs, ReportArgs,
};
use expense_sync::config::{ExpensePaths, Settings};
use expense_sync::ExpenseTracker;

/// Environment variable holding the log filter (e.g. `debug`, `expense_sync=info`)
const LOG_ENV: &str = "EXPENSE_SYNC_LOG";

#[derive(Parser)]
#[command(
    name = "expense",
    author = "Kaylee Beyene",
    version,
    about = "Local-first personal expense tracker",
    long_about = "expense-sync records expenses in a local JSON file, classifies them \
                  by keyword, and mirrors the whole list to a single remote JSON \
                  document whenever the remote is reachable."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an expense and push it to the remote
    Add(AddArgs),

    /// Show the most recent expenses
    #[command(alias = "ls")]
    Recent(RecentArgs),

    /// Monthly report with category breakdown
    Report(ReportArgs),

    /// Check connectivity, pull the remote document, check again
    Sync,

    /// Overwrite the remote document with the local expenses
    Push,

    /// Probe the remote and show connectivity
    Status {
        /// Keep running and report connectivity changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Export all expenses to a file
    Export(ExportArgs),

    /// Write the settings file; remote values from the environment are not stored
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let command = match cli.command {
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!("Updating existing settings at: {}", paths.base_dir().display());
            } else {
                println!("Initializing expense-sync at: {}", paths.base_dir().display());
            }
            let stored = Settings::load_stored(&paths)?;
            stored.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
            if stored.remote != settings.remote {
                println!("Remote values from the environment were not written to the file.");
            }
            if let (true, Some(id)) = (
                settings.remote.is_configured(),
                settings.remote.document_id.as_deref(),
            ) {
                println!("Remote document: {}", id);
            } else {
                println!("No remote configured; set document_id and master_key to enable sync.");
            }
            return Ok(());
        }
        Some(Commands::Config) => {
            print_config(&paths, &settings);
            return Ok(());
        }
        Some(command) => command,
        None => {
            println!("expense-sync - Local-first personal expense tracker");
            println!();
            println!("Run 'expense --help' for usage information.");
            return Ok(());
        }
    };

    let mut tracker = ExpenseTracker::open(&paths, &settings)?;

    let outcome = match command {
        Commands::Add(args) => handle_add_command(&tracker, &settings, args).await,
        Commands::Recent(args) => handle_recent_command(&tracker, &settings, args),
        Commands::Report(args) => handle_report_command(&tracker, &settings, args),
        Commands::Sync => {
            handle_sync_command(&tracker, &settings).await;
            Ok(())
        }
        Commands::Push => {
            handle_push_command(&tracker).await;
            Ok(())
        }
        Commands::Status { watch: false } => {
            handle_status_command(&tracker, &settings).await;
            Ok(())
        }
        Commands::Status { watch: true } => {
            tracker.start_monitor(&settings);
            watch_status(&tracker, &settings).await;
            Ok(())
        }
        Commands::Export(args) => handle_export_command(&tracker, &paths, args),
        Commands::Init | Commands::Config => Ok(()),
    };

    tracker.shutdown().await;
    outcome?;

    Ok(())
}

fn print_config(paths: &ExpensePaths, settings: &Settings) {
    println!("expense-sync Configuration");
    println!("==========================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Expenses file:    {}", paths.expenses_file().display());
    println!("Export directory: {}", paths.export_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!();
    println!("Settings:");
    println!("  API URL:           {}", settings.remote.api_url);
    println!(
        "  Document ID:       {}",
        settings.remote.document_id.as_deref().unwrap_or("(not set)")
    );
    println!("  Credential header: {}", settings.remote.credential_header);
    println!(
        "  Credential:        {}",
        if settings.remote.master_key.is_some() {
            "(set)"
        } else {
            "(not set)"
        }
    );
    println!("  Currency symbol:   {:?}", settings.currency_symbol);
    println!("  Recent limit:      {}", settings.recent_limit);
    println!("  Status interval:   {}s", settings.status_interval_secs);
}
