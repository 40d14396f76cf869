//! Maintains the CLI message log in response to runtime events.
use game_core::{GameSnapshot, Phase, RevealState};
use runtime::{Event, SessionEvent, StateEvent};

use client_frontend_core::{
    event::{EventConsumer, EventImpact},
    format::format_metric,
    message::{MessageEntry, MessageLevel, MessageLog},
};

/// Narrates verdicts, new best scores, failures and game over.
///
/// Only transitions are logged: the consumer remembers what it last saw so a
/// snapshot repeating the same verdict does not log it twice.
pub struct CliEventConsumer {
    log: MessageLog,
    revision: u64,
    reveal: RevealState,
    phase: Phase,
    best: Option<u64>,
}

impl CliEventConsumer {
    pub fn new(log: MessageLog) -> Self {
        Self {
            log,
            revision: 0,
            reveal: RevealState::Neutral,
            phase: Phase::Loading,
            best: None,
        }
    }

    fn on_snapshot(&mut self, revision: u64, snapshot: &GameSnapshot) -> EventImpact {
        if revision < self.revision {
            return EventImpact::none();
        }
        self.revision = revision;

        let mut impact = EventImpact::none();
        let round = Some(snapshot.score.current);

        if snapshot.reveal != self.reveal {
            match snapshot.reveal {
                RevealState::Correct => {
                    self.push_verdict(snapshot, round);
                    impact = EventImpact::redraw();
                }
                RevealState::Incorrect => {
                    let text = match snapshot.board.right() {
                        Some(item) => format!(
                            "Wrong! {} has {} searches.",
                            item.display_name,
                            format_metric(item.metric)
                        ),
                        None => "Wrong!".to_string(),
                    };
                    self.log.push(MessageEntry::new(text, round, MessageLevel::Error));
                    impact = EventImpact::redraw();
                }
                RevealState::Neutral => {}
            }
            self.reveal = snapshot.reveal;
        }

        let best = snapshot.score.best;
        if let Some(previous) = self.best
            && best > previous
        {
            self.log.push(MessageEntry::new(
                format!("New best score: {best}"),
                round,
                MessageLevel::Success,
            ));
            impact = EventImpact::redraw();
        }
        self.best = Some(best);

        if snapshot.phase == Phase::Loading && self.phase != Phase::Loading {
            self.log.push_text("Loading a new pair...");
            impact = EventImpact::redraw();
        }
        self.phase = snapshot.phase;

        impact
    }

    fn push_verdict(&mut self, snapshot: &GameSnapshot, round: Option<u64>) {
        let tie = snapshot
            .board
            .metrics()
            .is_some_and(|(left, right)| left == right);
        let text = if tie {
            format!("Tie! Counts as correct. Score {}", snapshot.score.current)
        } else {
            format!("Correct! Score {}", snapshot.score.current)
        };
        self.log.push(MessageEntry::new(text, round, MessageLevel::Success));
    }
}

impl EventConsumer for CliEventConsumer {
    fn on_event(&mut self, event: &Event) -> EventImpact {
        match event {
            Event::State(StateEvent::Changed { revision, snapshot }) => {
                self.on_snapshot(*revision, snapshot)
            }
            Event::Session(SessionEvent::GameOver(payload)) => {
                self.log.push(MessageEntry::new(
                    format!("Game over. Final score {}", payload.final_score),
                    Some(payload.final_score),
                    MessageLevel::Warning,
                ));
                EventImpact::redraw()
            }
            Event::Session(SessionEvent::Failed { message }) => {
                self.log.push(MessageEntry::new(
                    format!("{message}. Press Enter to try again."),
                    None,
                    MessageLevel::Error,
                ));
                EventImpact::redraw()
            }
            // Frames only move numbers; the view-model handles them.
            Event::Reveal(_) => EventImpact::none(),
        }
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }
}
