//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! driving the game or streaming events from specific topics.
use std::collections::HashMap;

use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{Choice, GameSnapshot};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Begin a new game, abandoning whatever sequence was in flight.
    ///
    /// Resolves once the worker has reset the board and issued the pair fetch.
    pub async fn start(&self) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Start { reply: reply_tx }).await?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Submit the player's guess.
    ///
    /// Returns `false` when the guess was ignored because input is locked.
    pub async fn choose(&self, choice: Choice) -> Result<bool> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Choose {
            choice,
            reply: reply_tx,
        })
        .await?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Leave the error state by reloading a pair.
    ///
    /// Returns `false` when the game was not in the error state.
    pub async fn retry(&self) -> Result<bool> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Retry { reply: reply_tx }).await?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Query the current game state (read-only snapshot)
    pub async fn query_state(&self) -> Result<GameSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::QueryState { reply: reply_tx }).await?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::State` - snapshot after every observable state change
    /// - `Topic::Reveal` - animator frames for the displayed numbers
    /// - `Topic::Session` - game over and user-visible failures
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use runtime::Topic;
    ///
    /// let mut session_rx = handle.subscribe(Topic::Session);
    /// while let Ok(event) = session_rx.recv().await {
    ///     // Route to the game-over screen
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    async fn send(&self, command: Command) -> Result<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }
}
