//! Sync CLI commands
//!
//! Manual pull, push and connectivity checks against the remote document.

use tokio::time::sleep;

use crate::config::Settings;
use crate::tracker::ExpenseTracker;

fn online_label(online: bool) -> &'static str {
    if online {
        "online"
    } else {
        "offline"
    }
}

/// Handle `sync`: check, pull, check
pub async fn handle_sync_command(tracker: &ExpenseTracker, settings: &Settings) {
    if !settings.remote.is_configured() {
        println!("No remote configured; working offline.");
    }

    let report = tracker.engine().sync_on_open().await;

    if report.pulled {
        println!("Pulled {} expenses from remote.", tracker.store().len());
    } else {
        println!("Pull failed; local expenses left unchanged.");
    }
    println!("Status: {}", online_label(report.online));
}

/// Handle `push`: overwrite the remote with the local list
pub async fn handle_push_command(tracker: &ExpenseTracker) {
    if tracker.engine().push().await {
        println!("Pushed {} expenses to remote.", tracker.store().len());
    } else {
        println!("Push failed; the remote was not updated.");
    }
    println!("Status: {}", online_label(tracker.connectivity()));
}

/// Handle `status`: probe the remote
pub async fn handle_status_command(tracker: &ExpenseTracker, settings: &Settings) {
    let online = tracker.engine().check_connectivity().await;

    println!("Status:   {}", online_label(online));
    println!("Remote:   {}", describe_remote(settings));
    println!("Expenses: {}", tracker.store().len());
}

/// Print connectivity changes observed by the background monitor; runs until interrupted
pub async fn watch_status(tracker: &ExpenseTracker, settings: &Settings) {
    let mut last = tracker.engine().check_connectivity().await;
    println!(
        "Status: {} (re-checking every {}s)",
        online_label(last),
        settings.status_interval().as_secs()
    );

    loop {
        sleep(settings.status_interval()).await;
        let online = tracker.connectivity();
        if online != last {
            println!("Status: {}", online_label(online));
            last = online;
        }
    }
}

fn describe_remote(settings: &Settings) -> String {
    match (&settings.remote.document_id, settings.remote.is_configured()) {
        (Some(id), true) => format!("{}/{}", settings.remote.api_url.trim_end_matches('/'), id),
        _ => "(not configured)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_remote() {
        let mut settings = Settings::default();
        assert_eq!(describe_remote(&settings), "(not configured)");

        settings.remote.document_id = Some("abc".into());
        settings.remote.master_key = Some("key".into());
        assert_eq!(describe_remote(&settings), "https://api.jsonbin.io/v3/b/abc");
    }
}
