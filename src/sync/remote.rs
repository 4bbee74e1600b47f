//! Remote document transport
//!
//! The remote store is one shared JSON document. Transports move raw bodies;
//! interpreting them is the sync engine's job.

use async_trait::async_trait;

use crate::error::{ExpenseError, ExpenseResult};

/// A single remote document that can be probed, read, and overwritten
#[async_trait]
pub trait RemoteDocument: Send + Sync {
    /// Lightweight reachability check; `Ok` means a 2xx answer
    async fn probe(&self) -> ExpenseResult<()>;

    /// Fetch the latest document body (`{"record": [...]}`)
    async fn fetch(&self) -> ExpenseResult<String>;

    /// Overwrite the document with `body` (a JSON array of expenses)
    async fn replace(&self, body: String) -> ExpenseResult<()>;
}

/// Stand-in used when no remote is configured; every call is unreachable
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineRemote;

impl OfflineRemote {
    fn unreachable() -> ExpenseError {
        ExpenseError::RemoteUnreachable("no remote document configured".into())
    }
}

#[async_trait]
impl RemoteDocument for OfflineRemote {
    async fn probe(&self) -> ExpenseResult<()> {
        Err(Self::unreachable())
    }

    async fn fetch(&self) -> ExpenseResult<String> {
        Err(Self::unreachable())
    }

    async fn replace(&self, _body: String) -> ExpenseResult<()> {
        Err(Self::unreachable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_remote_is_always_unreachable() {
        let remote = OfflineRemote;
        assert!(matches!(
            remote.probe().await,
            Err(ExpenseError::RemoteUnreachable(_))
        ));
        assert!(remote.fetch().await.unwrap_err().is_remote());
        assert!(remote.replace("[]".into()).await.unwrap_err().is_remote());
    }
}
