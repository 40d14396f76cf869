//! High-level runtime orchestrator.
//!
//! The runtime owns background workers, wires up command/event channels, and
//! exposes a builder-based API for clients to drive the game.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use game_core::{GameConfig, GameMachine};

use crate::animation::DEFAULT_FRAME_INTERVAL;
use crate::api::{ImagePreloader, ItemSource, NoopPreloader, Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::repository::{InMemoryScoreStore, ScoreStore};
use crate::workers::{Command, GameWorker, PersistenceWorker, WorkerTimings, load_best};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Per-topic capacity; reveal frames arrive at the frame rate.
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Upper bound on every item fetch.
    pub fetch_timeout: Duration,
    pub frame_interval: Duration,
}

impl RuntimeConfig {
    pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            event_buffer_size: 256,
            command_buffer_size: 32,
            fetch_timeout: Self::DEFAULT_FETCH_TIMEOUT,
            frame_interval: DEFAULT_FRAME_INTERVAL,
        }
    }
}

/// Main runtime that orchestrates the game
///
/// Design: Runtime owns workers and coordinates execution.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    game_worker_handle: JoinHandle<()>,
    persistence_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully
    ///
    /// Waits for the game worker to stop (every handle clone must be dropped)
    /// and for queued score saves to be written.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.game_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        self.persistence_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    source: Option<Arc<dyn ItemSource>>,
    preloader: Arc<dyn ImagePreloader>,
    score_store: Arc<dyn ScoreStore>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            source: None,
            preloader: Arc::new(NoopPreloader),
            score_store: Arc::new(InMemoryScoreStore::new()),
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the required item source
    pub fn item_source(self, source: impl ItemSource + 'static) -> Self {
        self.shared_item_source(Arc::new(source))
    }

    /// Set the required item source from an existing shared instance
    pub fn shared_item_source(mut self, source: Arc<dyn ItemSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the image preloader (defaults to [`NoopPreloader`])
    pub fn preloader(mut self, preloader: impl ImagePreloader + 'static) -> Self {
        self.preloader = Arc::new(preloader);
        self
    }

    /// Set the best-score store (defaults to an in-memory store)
    pub fn score_store(self, store: impl ScoreStore + 'static) -> Self {
        self.shared_score_store(Arc::new(store))
    }

    /// Set the best-score store from an existing shared instance
    pub fn shared_score_store(mut self, store: Arc<dyn ScoreStore>) -> Self {
        self.score_store = store;
        self
    }

    /// Build the runtime
    ///
    /// Loads the stored best score and spawns the workers. No game is started
    /// until [`RuntimeHandle::start`] is called.
    pub async fn build(self) -> Result<Runtime> {
        let source = self.source.ok_or(RuntimeError::MissingItemSource)?;

        let best = load_best(Arc::clone(&self.score_store)).await;
        tracing::debug!(target: "runtime::worker", best, "Loaded best score");

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);
        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let (persistence_worker, scores) = PersistenceWorker::new(self.score_store);
        let persistence_worker_handle = tokio::spawn(persistence_worker.run());

        let game_worker = GameWorker::new(
            GameMachine::new(self.config.game_config, best),
            source,
            self.preloader,
            scores,
            event_bus,
            command_rx,
            WorkerTimings {
                fetch_timeout: self.config.fetch_timeout,
                frame_interval: self.config.frame_interval,
            },
        );
        let game_worker_handle = tokio::spawn(game_worker.run());

        Ok(Runtime {
            handle,
            game_worker_handle,
            persistence_worker_handle,
        })
    }
}
