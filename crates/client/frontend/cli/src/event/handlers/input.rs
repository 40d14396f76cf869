//! Input handling and screen navigation.

use anyhow::Result;
use client_frontend_core::{EventConsumer, Screen};
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use game_core::{Choice, Phase};
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{input::KeyAction, presentation::terminal::Tui};

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Poll for keyboard input and handle UI interactions.
    pub(in crate::event) async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal).await
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    /// Handle key press and dispatch to appropriate handler.
    pub(in crate::event) async fn handle_key_press(
        &mut self,
        key: KeyEvent,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match self.input.handle_key(key) {
            KeyAction::Quit => Ok(true),
            KeyAction::Choose(choice) => {
                self.choose(choice).await?;
                Ok(false)
            }
            KeyAction::Confirm => {
                self.confirm(terminal).await?;
                Ok(false)
            }
            KeyAction::Retry => {
                self.retry().await?;
                Ok(false)
            }
            KeyAction::None => Ok(false),
        }
    }

    async fn choose(&mut self, choice: Choice) -> Result<()> {
        if self.view_model.screen() != Screen::Game {
            return Ok(());
        }
        if !self.handle.choose(choice).await? {
            tracing::debug!(%choice, "Choice ignored while input is locked");
        }
        Ok(())
    }

    /// Enter means Play / Play Again outside a game and Try Again on its error screen.
    async fn confirm(&mut self, terminal: &mut Tui) -> Result<()> {
        if self.view_model.router.play() {
            self.consumer.message_log_mut().push_text("New game");
            self.handle.start().await?;
            self.render(terminal)?;
            return Ok(());
        }
        self.retry().await
    }

    async fn retry(&mut self) -> Result<()> {
        if self.view_model.screen() != Screen::Game || self.view_model.phase != Phase::Error {
            return Ok(());
        }
        if self.handle.retry().await? {
            self.view_model.error = None;
        }
        Ok(())
    }
}
