//! Loading and error panels shown in place of the board.

use client_frontend_core::view_model::ViewModel;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::presentation::{theme::RatatuiTheme, ui::centered_rect};

pub fn render_loading(frame: &mut Frame, area: Rect, theme: &RatatuiTheme) {
    let panel = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("Loading Game...", theme.accent())),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(panel, centered_rect(50, 5, area));
}

pub fn render_error(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &RatatuiTheme) {
    let message = view_model
        .error
        .clone()
        .unwrap_or_else(|| "Failed to load game data.".to_string());

    let panel = Paragraph::new(vec![
        Line::from(Span::styled(
            "Error",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(message),
        Line::from(""),
        Line::from(Span::styled("Press Enter to Try Again", theme.accent())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::LightRed)),
    );

    frame.render_widget(panel, centered_rect(70, 9, area));
}
