//! Background push worker
//!
//! Adding an expense schedules a push without waiting for it. Requests that
//! arrive while a push is running are coalesced into the next one, since
//! every push sends the whole document anyway.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::engine::SyncEngine;

type Reply = oneshot::Sender<bool>;

/// Handle to a scheduled push
///
/// Dropping the ticket ignores the outcome; the push still happens.
#[derive(Debug)]
pub struct PushTicket {
    rx: oneshot::Receiver<bool>,
}

impl PushTicket {
    /// Wait for the push that covers this request
    ///
    /// Returns `false` if the worker went away before answering.
    pub async fn wait(self) -> bool {
        self.rx.await.unwrap_or(false)
    }
}

/// Runs pushes for one engine on a dedicated task, one at a time
pub struct BackgroundPusher {
    tx: mpsc::UnboundedSender<Reply>,
    worker: JoinHandle<()>,
}

impl BackgroundPusher {
    /// Start the worker on the current tokio runtime
    pub fn spawn(engine: Arc<SyncEngine>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(run(engine, rx));
        Self { tx, worker }
    }

    /// Schedule a push of the current local list
    pub fn request(&self) -> PushTicket {
        let (reply, rx) = oneshot::channel();
        if self.tx.send(reply).is_err() {
            warn!("push worker has stopped; push request dropped");
        }
        PushTicket { rx }
    }

    /// Stop accepting requests and wait for queued pushes to finish
    pub async fn shutdown(self) {
        drop(self.tx);
        if let Err(e) = self.worker.await {
            warn!(error = %e, "push worker ended abnormally");
        }
    }
}

async fn run(engine: Arc<SyncEngine>, mut rx: mpsc::UnboundedReceiver<Reply>) {
    while let Some(first) = rx.recv().await {
        let mut waiting = vec![first];
        while let Ok(next) = rx.try_recv() {
            waiting.push(next);
        }

        let pushed = engine.push().await;
        debug!(pushed, requests = waiting.len(), "background push finished");

        for reply in waiting {
            // Receiver may have dropped its ticket
            let _ = reply.send(pushed);
        }
    }
}
