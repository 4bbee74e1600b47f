//! Remote synchronization for expense-sync
//!
//! The remote side is one shared JSON document. [`SyncEngine`] reconciles the
//! local store with it through a [`RemoteDocument`] transport, and
//! [`BackgroundPusher`] runs the push that follows every add.

pub mod engine;
pub mod http;
pub mod memory;
pub mod pusher;
pub mod remote;

use std::sync::Arc;

use tracing::debug;

use crate::config::RemoteSettings;
use crate::error::ExpenseResult;

pub use engine::{SyncEngine, SyncReport};
pub use http::HttpRemote;
pub use memory::MemoryRemote;
pub use pusher::{BackgroundPusher, PushTicket};
pub use remote::{OfflineRemote, RemoteDocument};

/// Pick the transport for the configured remote
///
/// Without a document id and credential the app runs offline.
pub fn remote_from_settings(settings: &RemoteSettings) -> ExpenseResult<Arc<dyn RemoteDocument>> {
    if settings.is_configured() {
        Ok(Arc::new(HttpRemote::new(settings)?))
    } else {
        debug!("no remote configured; running offline");
        Ok(Arc::new(OfflineRemote))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_settings_run_offline() {
        let remote = remote_from_settings(&RemoteSettings::default()).unwrap();
        assert!(remote.probe().await.unwrap_err().is_remote());
    }
}
