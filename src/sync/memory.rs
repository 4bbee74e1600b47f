//! In-memory remote document
//!
//! Behaves like the HTTP API (fetch wraps the stored array in
//! `{"record": ...}`) with switches for outages, rejections, canned bodies
//! and latency. Used by tests and for local experiments.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

use super::remote::RemoteDocument;

#[derive(Debug)]
struct MemoryState {
    document: String,
    reachable: bool,
    rejecting: bool,
    canned_fetch: Option<String>,
    latency: Option<Duration>,
    probes: usize,
    fetches: usize,
    writes: usize,
}

/// A remote document held in memory
#[derive(Debug)]
pub struct MemoryRemote {
    state: Mutex<MemoryState>,
}

impl Default for MemoryRemote {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryRemote {
    /// A reachable remote holding an empty array
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState {
                document: "[]".to_string(),
                reachable: true,
                rejecting: false,
                canned_fetch: None,
                latency: None,
                probes: 0,
                fetches: 0,
                writes: 0,
            }),
        }
    }

    /// A reachable remote already holding `records`
    pub fn with_records(records: &[Expense]) -> ExpenseResult<Self> {
        let remote = Self::new();
        remote.lock().document = serde_json::to_string(records)?;
        Ok(remote)
    }

    /// Simulate the network going up or down
    pub fn set_reachable(&self, reachable: bool) {
        self.lock().reachable = reachable;
    }

    /// Answer every call with a non-2xx status
    pub fn set_rejecting(&self, rejecting: bool) {
        self.lock().rejecting = rejecting;
    }

    /// Return `body` from fetch instead of the stored document
    pub fn set_fetch_body(&self, body: Option<String>) {
        self.lock().canned_fetch = body;
    }

    /// Delay every call by `latency`
    pub fn set_latency(&self, latency: Option<Duration>) {
        self.lock().latency = latency;
    }

    /// The stored document as raw JSON text
    pub fn document(&self) -> String {
        self.lock().document.clone()
    }

    /// The stored document parsed as expenses
    pub fn records(&self) -> ExpenseResult<Vec<Expense>> {
        Ok(serde_json::from_str(&self.lock().document)?)
    }

    pub fn probe_count(&self) -> usize {
        self.lock().probes
    }

    pub fn fetch_count(&self) -> usize {
        self.lock().fetches
    }

    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn delay(&self) {
        let latency = self.lock().latency;
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
    }

    fn check(state: &MemoryState) -> ExpenseResult<()> {
        if !state.reachable {
            return Err(ExpenseError::RemoteUnreachable("memory remote is offline".into()));
        }
        if state.rejecting {
            return Err(ExpenseError::RemoteRejected("memory remote answered HTTP 503".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl RemoteDocument for MemoryRemote {
    async fn probe(&self) -> ExpenseResult<()> {
        self.delay().await;
        let mut state = self.lock();
        state.probes += 1;
        Self::check(&state)
    }

    async fn fetch(&self) -> ExpenseResult<String> {
        self.delay().await;
        let mut state = self.lock();
        state.fetches += 1;
        Self::check(&state)?;
        Ok(match &state.canned_fetch {
            Some(body) => body.clone(),
            None => format!("{{\"record\":{}}}", state.document),
        })
    }

    async fn replace(&self, body: String) -> ExpenseResult<()> {
        self.delay().await;
        let mut state = self.lock();
        Self::check(&state)?;
        state.document = body;
        state.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_wraps_document() {
        let remote = MemoryRemote::new();
        remote.replace("[1,2]".into()).await.unwrap();

        assert_eq!(remote.fetch().await.unwrap(), r#"{"record":[1,2]}"#);
        assert_eq!(remote.write_count(), 1);
        assert_eq!(remote.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_offline_and_rejecting() {
        let remote = MemoryRemote::new();

        remote.set_reachable(false);
        assert!(matches!(
            remote.probe().await,
            Err(ExpenseError::RemoteUnreachable(_))
        ));

        remote.set_reachable(true);
        remote.set_rejecting(true);
        assert!(matches!(
            remote.replace("[]".into()).await,
            Err(ExpenseError::RemoteRejected(_))
        ));
        assert_eq!(remote.write_count(), 0);
        assert_eq!(remote.probe_count(), 1);
    }

    #[tokio::test]
    async fn test_canned_fetch_body() {
        let remote = MemoryRemote::new();
        remote.set_fetch_body(Some("garbage".into()));
        assert_eq!(remote.fetch().await.unwrap(), "garbage");
    }
}
