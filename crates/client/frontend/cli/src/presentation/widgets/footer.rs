//! Key hints for the game screen.

use client_frontend_core::view_model::ViewModel;
use game_core::Phase;
use ratatui::{Frame, layout::Rect, text::Line, widgets::Paragraph};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &RatatuiTheme) {
    let hint = match view_model.phase {
        Phase::Ready => "h/k/↑ higher   l/j/↓ lower   q quit",
        Phase::Error => "Enter/r try again   q quit",
        Phase::Loading => "Loading...   q quit",
        Phase::Revealing | Phase::Transitioning | Phase::GameOver => "q quit",
    };

    frame.render_widget(Paragraph::new(Line::styled(hint, theme.muted())), area);
}
