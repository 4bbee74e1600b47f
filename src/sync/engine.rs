//! Reconciliation between the local store and the remote document
//!
//! Remote failures never escape this module: each operation reports a plain
//! `bool` and updates the store's connectivity flag. Local persistence
//! failures during a pull are logged at error level and also reported as
//! `false`.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::storage::ExpenseStore;

use super::remote::RemoteDocument;

/// Body returned by the remote `latest` endpoint
#[derive(Debug, Deserialize)]
struct RemoteEnvelope {
    record: Vec<Expense>,
}

/// Parse a fetched body into validated records
fn parse_envelope(body: &str) -> ExpenseResult<Vec<Expense>> {
    let envelope: RemoteEnvelope = serde_json::from_str(body)
        .map_err(|e| ExpenseError::RemoteRejected(format!("Malformed remote document: {}", e)))?;

    for expense in &envelope.record {
        expense.validate().map_err(|e| {
            ExpenseError::RemoteRejected(format!("Malformed remote record {}: {}", expense.id, e))
        })?;
    }

    Ok(envelope.record)
}

/// Outcome of the open-time sequence `check → pull → check`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    pub reachable_before: bool,
    pub pulled: bool,
    pub online: bool,
}

/// Keeps an [`ExpenseStore`] in step with one remote document
pub struct SyncEngine {
    store: Arc<ExpenseStore>,
    remote: Arc<dyn RemoteDocument>,
    /// At most one remote call in flight per engine
    gate: Mutex<()>,
}

impl SyncEngine {
    pub fn new(store: Arc<ExpenseStore>, remote: Arc<dyn RemoteDocument>) -> Self {
        Self {
            store,
            remote,
            gate: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &Arc<ExpenseStore> {
        &self.store
    }

    /// Probe the remote; sets and returns the connectivity flag
    pub async fn check_connectivity(&self) -> bool {
        let _guard = self.gate.lock().await;

        let online = match self.remote.probe().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "connectivity probe failed");
                false
            }
        };

        self.store.set_connectivity(online);
        online
    }

    /// Replace local records with the remote document
    ///
    /// Anything other than `{"record": [valid expenses]}` leaves local state
    /// untouched. Only transport errors mark the store offline.
    pub async fn pull(&self) -> bool {
        let _guard = self.gate.lock().await;

        let body = match self.remote.fetch().await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "pull failed");
                if matches!(e, ExpenseError::RemoteUnreachable(_)) {
                    self.store.set_connectivity(false);
                }
                return false;
            }
        };

        let records = match parse_envelope(&body) {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "pull ignored remote document");
                return false;
            }
        };

        let count = records.len();
        if let Err(e) = self.store.replace_all(records) {
            error!(error = %e, "failed to persist pulled expenses");
            return false;
        }

        self.store.set_connectivity(true);
        debug!(count, "pulled remote expenses");
        true
    }

    /// Overwrite the remote document with the full local list
    pub async fn push(&self) -> bool {
        let _guard = self.gate.lock().await;

        let records = self.store.all();
        let body = match serde_json::to_string(&records) {
            Ok(body) => body,
            Err(e) => {
                error!(error = %e, "failed to serialize expenses for push");
                return false;
            }
        };

        let online = match self.remote.replace(body).await {
            Ok(()) => {
                debug!(count = records.len(), "pushed expenses");
                true
            }
            Err(e) => {
                warn!(error = %e, "push failed");
                false
            }
        };

        self.store.set_connectivity(online);
        online
    }

    /// Run `check → pull → check`, the sequence used when a session opens
    pub async fn sync_on_open(&self) -> SyncReport {
        let reachable_before = self.check_connectivity().await;
        let pulled = self.pull().await;
        let online = self.check_connectivity().await;

        SyncReport {
            reachable_before,
            pulled,
            online,
        }
    }

    /// Re-probe the remote every `period` until the handle is aborted
    pub fn spawn_connectivity_monitor(self: &Arc<Self>, period: Duration) -> JoinHandle<()> {
        let engine = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let online = engine.check_connectivity().await;
                debug!(online, "connectivity monitor tick");
            }
        })
    }
}
