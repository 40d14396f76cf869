//! Rendering handlers.

use anyhow::Result;
use client_frontend_core::EventConsumer;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Render current state using ViewModel.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let ctx = ui::RenderContext {
            view_model: &self.view_model,
            messages: self.consumer.message_log(),
            message_panel_height: self.cli_config.ui.message_panel_height,
        };

        ui::render_with_view_model(terminal, &ctx)
    }
}
