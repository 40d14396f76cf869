//! Header widget displaying the current and best score.

use client_frontend_core::view_model::ViewModel;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &RatatuiTheme) {
    let text = vec![Line::from(vec![
        Span::raw("Score: "),
        Span::styled(view_model.score.current.to_string(), theme.accent()),
        Span::raw(" | High Score: "),
        Span::styled(
            view_model.score.best.to_string(),
            Style::default().fg(Color::Yellow),
        ),
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(" Higher / Lower "));

    frame.render_widget(paragraph, area);
}
