//! Message log panel.

use client_frontend_core::{message::MessageEntry, view_model::PresentationMapper};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Render `recent` (newest first) with the newest entry at the bottom.
pub fn render(frame: &mut Frame, area: Rect, recent: &[MessageEntry], theme: &RatatuiTheme) {
    let lines: Vec<Line> = recent
        .iter()
        .rev()
        .map(|entry| Line::from(Span::styled(entry.text.clone(), theme.style_message(entry.level))))
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Messages "));

    frame.render_widget(paragraph, area);
}
