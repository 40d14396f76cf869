//! Event loop orchestrating runtime events, user input, and rendering.
//!
//! This module coordinates three main concerns:
//! - Runtime event consumption and ViewModel updates (via ViewModelUpdater)
//! - Keyboard input processing (choices and screen navigation)
//! - Rendering using ViewModel

use std::collections::HashMap;

use anyhow::Result;
use game_core::GameSnapshot;
use runtime::{Event as RuntimeEvent, RuntimeHandle, Topic};
use tokio::{
    sync::{broadcast, broadcast::error::RecvError},
    time,
};

use crate::{config::CliConfig, input::InputHandler, presentation::terminal::Tui};
use client_frontend_core::{EventConsumer, ViewModelUpdater, view_model::ViewModel};

/// Event loop managing ViewModel state and coordinating UI updates.
///
/// - Owns the ViewModel (single source of truth for presentation state)
/// - Uses ViewModelUpdater service to apply runtime events incrementally
/// - Forwards choices, starts and retries to the runtime
pub struct EventLoop<C>
where
    C: EventConsumer,
{
    pub(crate) subscriptions: HashMap<Topic, broadcast::Receiver<RuntimeEvent>>,
    pub(crate) handle: RuntimeHandle,
    pub(crate) input: InputHandler,
    pub(crate) consumer: C,
    pub(crate) view_model: ViewModel,
    pub(crate) cli_config: CliConfig,
}

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    pub fn new(
        subscriptions: HashMap<Topic, broadcast::Receiver<RuntimeEvent>>,
        handle: RuntimeHandle,
        consumer: C,
        initial_state: &GameSnapshot,
        cli_config: CliConfig,
    ) -> Self {
        Self {
            subscriptions,
            handle,
            input: InputHandler::new(),
            consumer,
            view_model: ViewModel::from_snapshot(initial_state),
            cli_config,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<C> {
        self.render(terminal)?;

        let mut state_rx = self.subscriptions.remove(&Topic::State);
        let mut reveal_rx = self.subscriptions.remove(&Topic::Reveal);
        let mut session_rx = self.subscriptions.remove(&Topic::Session);
        let tick = self.cli_config.ui.tick;

        loop {
            let quit = tokio::select! {
                result = recv(&mut state_rx) => self.handle_runtime_event(result, terminal).await?,
                result = recv(&mut reveal_rx) => self.handle_runtime_event(result, terminal).await?,
                result = recv(&mut session_rx) => self.handle_runtime_event(result, terminal).await?,
                _ = time::sleep(tick) => self.handle_input_tick(terminal).await?,
            };
            if quit {
                break;
            }
        }

        Ok(self.consumer)
    }

    /// Handle runtime event and update ViewModel incrementally.
    async fn handle_runtime_event(
        &mut self,
        result: Result<RuntimeEvent, RecvError>,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match result {
            Ok(event) => {
                let impact = self.consumer.on_event(&event);
                let scope = ViewModelUpdater::update(&mut self.view_model, &event);

                if impact.requires_redraw || !scope.is_empty() {
                    self.render(terminal)?;
                }
                Ok(false)
            }
            Err(RecvError::Closed) => {
                tracing::warn!("Event stream closed");
                Ok(true)
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("Dropped {} stale events, resyncing", skipped);
                self.resync(terminal).await?;
                Ok(false)
            }
        }
    }

    /// Replace the view-model's game state with a fresh snapshot. Its revision
    /// makes events still queued from before the gap stale.
    async fn resync(&mut self, terminal: &mut Tui) -> Result<()> {
        let snapshot = self.handle.query_state().await?;
        self.view_model.apply_snapshot(snapshot.revision, &snapshot);
        self.render(terminal)
    }
}

/// Receive from an optional subscription; a missing topic never resolves.
async fn recv(
    rx: &mut Option<broadcast::Receiver<RuntimeEvent>>,
) -> Result<RuntimeEvent, RecvError> {
    match rx {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}
