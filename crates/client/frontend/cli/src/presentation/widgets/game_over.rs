//! Game over screen with the final score and Play Again.

use client_frontend_core::view_model::ViewModel;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::{theme::RatatuiTheme, ui::centered_rect};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    final_score: u64,
    view_model: &ViewModel,
    theme: &RatatuiTheme,
) {
    let lines = vec![
        Line::from(Span::styled(
            "Game Over",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Your final score is: "),
            Span::styled(
                final_score.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("High Score: {}", view_model.score.best)),
        Line::from(""),
        Line::from(Span::styled("Press Enter to Play Again", theme.accent())),
        Line::from(Span::styled("q to quit", theme.muted())),
    ];

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(panel, centered_rect(60, 10, area));
}
