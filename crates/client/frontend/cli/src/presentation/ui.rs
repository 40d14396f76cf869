//! UI rendering entry point composing widgets from the ViewModel.
use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::presentation::{terminal::Tui, theme::RatatuiTheme, widgets};
use client_frontend_core::{Screen, message::MessageLog, view_model::ViewModel};
use game_core::Phase;

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub view_model: &'a ViewModel,
    pub messages: &'a MessageLog,
    pub message_panel_height: u16,
}

/// Render the terminal UI for the active screen.
pub fn render_with_view_model(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme;

    terminal.draw(|frame| match ctx.view_model.screen() {
        Screen::Home => {
            widgets::home::render(frame, frame.area(), ctx.view_model, &theme);
        }
        Screen::GameOver { final_score } => {
            widgets::game_over::render(frame, frame.area(), final_score, ctx.view_model, &theme);
        }
        Screen::Game => render_game(frame, ctx, &theme),
    })?;

    Ok(())
}

/// Header, board (or loading / error panel), messages and footer.
fn render_game(frame: &mut Frame, ctx: &RenderContext, theme: &RatatuiTheme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                        // Header
            Constraint::Min(0),                           // Board
            Constraint::Length(ctx.message_panel_height), // Messages
            Constraint::Length(2),                        // Footer
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], ctx.view_model, theme);

    match ctx.view_model.phase {
        Phase::Loading => widgets::status::render_loading(frame, chunks[1], theme),
        Phase::Error => widgets::status::render_error(frame, chunks[1], ctx.view_model, theme),
        _ => render_board(frame, chunks[1], ctx.view_model, theme),
    }

    let recent: Vec<_> = ctx
        .messages
        .recent(ctx.message_panel_height.saturating_sub(2) as usize)
        .cloned()
        .collect();
    widgets::messages::render(frame, chunks[2], &recent, theme);

    widgets::footer::render(frame, chunks[3], ctx.view_model, theme);
}

fn render_board(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &RatatuiTheme) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    widgets::card::render(frame, halves[0], view_model, game_core::Slot::Left, theme);
    widgets::card::render(frame, halves[1], view_model, game_core::Slot::Right, theme);
}

/// Create a centered rectangle for panels.
pub(crate) fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
