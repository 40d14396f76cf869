//! Best-score persistence worker.
//!
//! Saves are queued on an unbounded channel and applied one at a time on a
//! blocking thread. When several saves are queued only the highest is
//! written, and since saves never run concurrently an older best can never
//! land after a newer one.
//!
//! Failures are logged and swallowed: the next new best retries naturally.

use std::sync::Arc;

use game_core::GameError;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::repository::ScoreStore;

/// Fire-and-forget sender used by the game worker.
#[derive(Clone)]
pub struct ScoreWriter {
    tx: mpsc::UnboundedSender<u64>,
}

impl ScoreWriter {
    pub fn save(&self, best: u64) {
        if self.tx.send(best).is_err() {
            warn!(
                target: "runtime::persistence",
                best,
                "Persistence worker stopped, best score not saved"
            );
        }
    }
}

/// Background task that owns the score store.
pub struct PersistenceWorker {
    store: Arc<dyn ScoreStore>,
    rx: mpsc::UnboundedReceiver<u64>,
}

impl PersistenceWorker {
    pub fn new(store: Arc<dyn ScoreStore>) -> (Self, ScoreWriter) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { store, rx }, ScoreWriter { tx })
    }

    /// Runs until every [`ScoreWriter`] is dropped and the queue is drained.
    pub async fn run(mut self) {
        while let Some(mut best) = self.rx.recv().await {
            while let Ok(next) = self.rx.try_recv() {
                best = best.max(next);
            }
            self.persist(best).await;
        }
        debug!(target: "runtime::persistence", "Persistence worker stopped");
    }

    async fn persist(&self, best: u64) {
        let store = Arc::clone(&self.store);
        match tokio::task::spawn_blocking(move || store.save(best)).await {
            Ok(Ok(())) => {
                debug!(target: "runtime::persistence", best, "Best score saved");
            }
            Ok(Err(err)) => {
                let error = GameError::from(err);
                warn!(target: "runtime::persistence", best, %error, "Failed to save best score");
            }
            Err(join) => {
                error!(target: "runtime::persistence", best, error = %join, "Score save task failed");
            }
        }
    }
}

/// Loads the stored best score; absence and failures both count as 0.
pub async fn load_best(store: Arc<dyn ScoreStore>) -> u64 {
    match tokio::task::spawn_blocking(move || store.load()).await {
        Ok(Ok(best)) => best.unwrap_or(0),
        Ok(Err(err)) => {
            warn!(target: "runtime::persistence", error = %err, "Failed to load best score, starting from 0");
            0
        }
        Err(join) => {
            error!(target: "runtime::persistence", error = %join, "Score load task failed");
            0
        }
    }
}
