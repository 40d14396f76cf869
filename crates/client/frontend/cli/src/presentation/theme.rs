//! Ratatui theme implementation of PresentationMapper.

use client_frontend_core::{message::MessageLevel, view_model::PresentationMapper};
use game_core::RevealState;
use ratatui::style::{Color, Modifier, Style};

/// Ratatui-specific theme implementing PresentationMapper.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl PresentationMapper for RatatuiTheme {
    type Style = Style;

    fn style_message(&self, level: MessageLevel) -> Self::Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Success => Style::default().fg(Color::LightGreen),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    fn style_verdict(&self, reveal: RevealState) -> Self::Style {
        match reveal {
            RevealState::Neutral => Style::default().fg(Color::Gray),
            RevealState::Correct => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            RevealState::Incorrect => Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        }
    }

    fn style_metric(&self) -> Self::Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }
}

impl RatatuiTheme {
    pub fn higher(&self) -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn lower(&self) -> Style {
        Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent(&self) -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_colours() {
        let theme = RatatuiTheme;
        assert_eq!(theme.style_verdict(RevealState::Correct).fg, Some(Color::Green));
        assert_eq!(theme.style_verdict(RevealState::Incorrect).fg, Some(Color::Red));
        assert_eq!(theme.style_message(MessageLevel::Error).fg, Some(Color::LightRed));
    }
}
