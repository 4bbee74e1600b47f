//! Application context
//!
//! [`ExpenseTracker`] wires the store, the sync engine and the background
//! pusher together. It is constructed once by the caller and passed around;
//! nothing here is global.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::config::{ExpensePaths, Settings};
use crate::error::ExpenseResult;
use crate::models::{Expense, Month};
use crate::reports::MonthlyReport;
use crate::storage::ExpenseStore;
use crate::sync::{remote_from_settings, BackgroundPusher, PushTicket, RemoteDocument, SyncEngine};

/// A freshly added expense plus the push scheduled for it
#[derive(Debug)]
pub struct AddedExpense {
    pub expense: Expense,
    pub push: PushTicket,
}

/// Store, sync engine, and push worker for one session
pub struct ExpenseTracker {
    store: Arc<ExpenseStore>,
    engine: Arc<SyncEngine>,
    pusher: BackgroundPusher,
    monitor: Option<JoinHandle<()>>,
}

impl ExpenseTracker {
    /// Assemble a tracker from an opened store and a transport
    ///
    /// Must be called inside a tokio runtime; the push worker is spawned here.
    pub fn new(store: Arc<ExpenseStore>, remote: Arc<dyn RemoteDocument>) -> Self {
        let engine = Arc::new(SyncEngine::new(Arc::clone(&store), remote));
        let pusher = BackgroundPusher::spawn(Arc::clone(&engine));
        Self {
            store,
            engine,
            pusher,
            monitor: None,
        }
    }

    /// Open the store in the data directory and pick the configured remote
    pub fn open(paths: &ExpensePaths, settings: &Settings) -> ExpenseResult<Self> {
        let store = Arc::new(ExpenseStore::open_in(paths)?);
        let remote = remote_from_settings(&settings.remote)?;
        debug!(count = store.len(), "opened expense tracker");
        Ok(Self::new(store, remote))
    }

    pub fn store(&self) -> &Arc<ExpenseStore> {
        &self.store
    }

    pub fn engine(&self) -> &Arc<SyncEngine> {
        &self.engine
    }

    /// Add an expense locally, then schedule a push
    ///
    /// Returns once the record is persisted. Invalid input schedules nothing.
    pub fn add(&self, amount: &str, detail: &str) -> ExpenseResult<AddedExpense> {
        let expense = self.store.add(amount, detail)?;
        let push = self.pusher.request();
        Ok(AddedExpense { expense, push })
    }

    /// Start periodic connectivity checks; a running monitor is replaced
    pub fn start_monitor(&mut self, settings: &Settings) {
        if let Some(previous) = self.monitor.take() {
            previous.abort();
        }
        self.monitor = Some(
            self.engine
                .spawn_connectivity_monitor(settings.status_interval()),
        );
    }

    /// Last known reachability of the remote
    pub fn connectivity(&self) -> bool {
        self.store.connectivity()
    }

    /// Report for `month` from the current records
    pub fn month_report(&self, month: Month) -> MonthlyReport {
        MonthlyReport::generate(&self.store, month)
    }

    /// Stop the monitor and wait for queued pushes to finish
    pub async fn shutdown(self) {
        if let Some(monitor) = self.monitor {
            monitor.abort();
        }
        self.pusher.shutdown().await;
        debug!("expense tracker shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::sync::MemoryRemote;
    use std::time::Duration;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Arc<MemoryRemote>, ExpenseTracker) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Arc::new(ExpenseStore::open_in(&paths).unwrap());
        let remote = Arc::new(MemoryRemote::new());
        let tracker = ExpenseTracker::new(store, remote.clone());
        (temp_dir, remote, tracker)
    }

    #[tokio::test]
    async fn test_add_persists_then_pushes() {
        let (_temp, remote, tracker) = setup();

        let added = tracker.add("250", "taxi to airport").unwrap();
        assert_eq!(added.expense.category, Category::Transportation);

        assert!(added.push.wait().await);
        assert_eq!(remote.records().unwrap(), vec![added.expense]);
        assert!(tracker.connectivity());

        tracker.shutdown().await;
    }

    #[tokio::test]
    async fn test_add_offline_keeps_local_record() {
        let (_temp, remote, tracker) = setup();
        remote.set_reachable(false);

        let added = tracker.add("9.99", "movie night").unwrap();
        assert!(!added.push.wait().await);

        assert_eq!(tracker.store().len(), 1);
        assert!(!tracker.connectivity());
        assert_eq!(remote.write_count(), 0);

        tracker.shutdown().await;
    }

    #[tokio::test]
    async fn test_invalid_add_schedules_nothing() {
        let (_temp, remote, tracker) = setup();

        assert!(tracker.add("ten", "lunch").unwrap_err().is_invalid_input());
        tracker.shutdown().await;

        assert_eq!(remote.write_count(), 0);
    }

    #[tokio::test]
    async fn test_month_report_reflects_adds() {
        let (_temp, _remote, tracker) = setup();
        let first = tracker.add("100", "bus").unwrap();
        tracker.add("50", "cinema").unwrap();

        let report = tracker.month_report(Month::of(first.expense.date));
        assert_eq!(report.count, 2);
        assert_eq!(report.total.value(), 150.0);

        tracker.shutdown().await;
    }

    #[tokio::test]
    async fn test_open_without_remote_runs_offline() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let tracker = ExpenseTracker::open(&paths, &Settings::default()).unwrap();

        let added = tracker.add("3", "fruit").unwrap();
        assert!(!added.push.wait().await);
        assert!(paths.expenses_file().exists());

        tracker.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_monitor_stops_on_shutdown() {
        let (_temp, remote, mut tracker) = setup();
        let settings = Settings {
            status_interval_secs: 1,
            ..Settings::default()
        };

        tracker.start_monitor(&settings);
        tokio::time::sleep(Duration::from_millis(2500)).await;
        tracker.shutdown().await;
        let probes = remote.probe_count();
        assert_eq!(probes, 2);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(remote.probe_count(), probes);
    }
}
