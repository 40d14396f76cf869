//! Home screen with the Play prompt.

use client_frontend_core::view_model::ViewModel;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::presentation::{theme::RatatuiTheme, ui::centered_rect};

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &RatatuiTheme) {
    let lines = vec![
        Line::from(vec![
            Span::styled("THE ", theme.accent()),
            Span::styled("HIGHER", theme.higher()),
            Span::raw(" "),
            Span::styled("LOWER", theme.lower()),
            Span::styled(" GAME", theme.accent()),
        ]),
        Line::from(""),
        Line::from("Guess higher or lower?"),
        Line::from(""),
        Line::from(Span::styled(
            "A game of comparing search popularity, based on Google search data.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(format!("High Score: {}", view_model.score.best)),
        Line::from(""),
        Line::from(Span::styled("Press Enter to Play", theme.higher())),
        Line::from(Span::styled("q to quit", theme.muted())),
    ];

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(panel, centered_rect(80, 14, area));
}
