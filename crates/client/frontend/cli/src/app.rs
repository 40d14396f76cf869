//! Glue code tying the runtime handle and terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use runtime::{RuntimeHandle, Topic};

use crate::config::CliConfig;
use crate::event::{CliEventConsumer, EventLoop};
use crate::presentation::terminal;
use client_frontend_core::{Frontend, FrontendConfig, message::MessageLog};

/// Terminal frontend. Owns only UI configuration; the game lives behind the
/// [`RuntimeHandle`] passed to [`Frontend::run`].
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        tracing::info!("CLI frontend starting...");

        // Subscribe before querying so no change between the two is missed.
        let subscriptions =
            handle.subscribe_multiple(&[Topic::State, Topic::Reveal, Topic::Session]);
        let initial_state = handle.query_state().await?;

        let mut messages = MessageLog::new(self.frontend_config.messages.capacity);
        messages.push_text("Welcome! Press Enter to play.");
        let consumer = CliEventConsumer::new(messages);

        let event_loop = EventLoop::new(
            subscriptions,
            handle,
            consumer,
            &initial_state,
            self.cli_config.clone(),
        );

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let result = event_loop.run(&mut terminal).await;

        tracing::info!("CLI frontend exiting");
        result.map(|_consumer| ())
    }
}
