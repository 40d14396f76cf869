//! Item card: name, the number (or the Higher/Lower prompt), verdict border.

use client_frontend_core::view_model::{MetricView, PresentationMapper, ViewModel};
use game_core::{RevealState, Slot};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    view_model: &ViewModel,
    slot: Slot,
    theme: &RatatuiTheme,
) {
    let Some(card) = view_model.card(slot) else {
        frame.render_widget(Block::default().borders(Borders::ALL), area);
        return;
    };

    // The verdict colours the card being judged.
    let border = if slot == Slot::Right {
        theme.style_verdict(view_model.reveal)
    } else {
        theme.style_verdict(RevealState::Neutral)
    };

    let mut name_style = Style::default().add_modifier(Modifier::BOLD);
    if view_model.is_sliding() {
        name_style = name_style.add_modifier(Modifier::DIM);
    }

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(card.name.clone(), name_style)),
        Line::from("has"),
    ];

    match view_model.metric(slot) {
        MetricView::Shown(text) => {
            lines.push(Line::from(Span::styled(text, theme.style_metric())));
            lines.push(Line::from(Span::styled(
                "average monthly searches",
                theme.muted(),
            )));
        }
        MetricView::Hidden => {
            lines.push(Line::from(vec![
                Span::styled("[h] Higher", theme.higher()),
                Span::raw("   "),
                Span::styled("[l] Lower", theme.lower()),
            ]));
            lines.push(Line::from(Span::styled(
                "average monthly searches than the left?",
                theme.muted(),
            )));
        }
    }

    if slot == Slot::Right {
        let verdict = match view_model.reveal {
            RevealState::Correct => Some("Correct!"),
            RevealState::Incorrect => Some("Wrong!"),
            RevealState::Neutral => None,
        };
        if let Some(verdict) = verdict {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                verdict,
                theme.style_verdict(view_model.reveal),
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(match slot {
                    Slot::Left => " Left ",
                    Slot::Right => " Right ",
                }),
        );

    frame.render_widget(paragraph, area);
}
