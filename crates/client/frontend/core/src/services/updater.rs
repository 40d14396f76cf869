//! ViewModelUpdater service layer for incremental updates.
//!
//! This service interprets Events from the runtime and applies them to the
//! ViewModel, reporting which parts changed so frontends can skip redundant
//! redraws.

use bitflags::bitflags;
use runtime::{Event, RevealEvent, SessionEvent, StateEvent};

use crate::view_model::ViewModel;

bitflags! {
    /// Tracks which parts of ViewModel have been updated.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct UpdateScope: u32 {
        /// The active screen changed (e.g. Game → GameOver).
        const SCREEN  = 0b00001;

        /// Cards were replaced, added or removed.
        const BOARD   = 0b00010;

        /// Displayed numbers changed.
        const NUMBERS = 0b00100;

        /// Current or best score changed.
        const SCORE   = 0b01000;

        /// Phase, verdict, input gate or error changed.
        const STATUS  = 0b10000;

        const ALL = Self::SCREEN.bits()
                  | Self::BOARD.bits()
                  | Self::NUMBERS.bits()
                  | Self::SCORE.bits()
                  | Self::STATUS.bits();
    }
}

impl Default for UpdateScope {
    fn default() -> Self {
        Self::empty()
    }
}

/// Stateless service applying runtime Events to a ViewModel.
pub struct ViewModelUpdater;

impl ViewModelUpdater {
    /// Update ViewModel based on runtime Event.
    ///
    /// Returns the UpdateScope that changed; empty for stale or no-op events.
    pub fn update(view_model: &mut ViewModel, event: &Event) -> UpdateScope {
        match event {
            Event::State(StateEvent::Changed { revision, snapshot }) => {
                let before = view_model.clone();
                if !view_model.apply_snapshot(*revision, snapshot) {
                    return UpdateScope::empty();
                }
                Self::diff(&before, view_model)
            }
            Event::Reveal(RevealEvent::Frame { slot, value }) => {
                if view_model.apply_frame(*slot, *value) {
                    UpdateScope::NUMBERS
                } else {
                    UpdateScope::empty()
                }
            }
            Event::Session(SessionEvent::GameOver(payload)) => {
                if view_model.router.game_over(*payload) {
                    UpdateScope::SCREEN
                } else {
                    UpdateScope::empty()
                }
            }
            Event::Session(SessionEvent::Failed { message }) => {
                if view_model.error.as_deref() == Some(message.as_str()) {
                    return UpdateScope::empty();
                }
                view_model.error = Some(message.clone());
                UpdateScope::STATUS
            }
        }
    }

    fn diff(before: &ViewModel, after: &ViewModel) -> UpdateScope {
        let mut scope = UpdateScope::empty();
        if before.left != after.left || before.right != after.right {
            scope |= UpdateScope::BOARD;
        }
        if before.displayed != after.displayed {
            scope |= UpdateScope::NUMBERS;
        }
        if before.score != after.score {
            scope |= UpdateScope::SCORE;
        }
        if before.phase != after.phase
            || before.reveal != after.reveal
            || before.input_enabled != after.input_enabled
            || before.error != after.error
        {
            scope |= UpdateScope::STATUS;
        }
        scope
    }
}

#[cfg(test)]
mod tests {
    use game_core::{
        Choice, GameConfig, GameMachine, GameOverPayload, Input, Item, ItemPair, Phase, Slot,
    };

    use super::*;
    use crate::screen::Screen;
    use crate::view_model::MetricView;

    fn state_event(revision: u64, machine: &GameMachine) -> Event {
        Event::State(StateEvent::Changed {
            revision,
            snapshot: Box::new(machine.snapshot()),
        })
    }

    fn ready_machine() -> GameMachine {
        let mut machine = GameMachine::new(GameConfig::default(), 7);
        machine.dispatch(Input::Start);
        let generation = machine.generation();
        machine.dispatch(Input::PairFetched {
            generation,
            result: Ok(ItemPair::new(
                Item::new("l", "Cricket", Some(1_500_000)),
                Item::new("r", "Kabaddi", None),
            )),
        });
        machine
    }

    #[test]
    fn snapshot_fills_cards_and_hides_right_number() {
        let machine = ready_machine();
        let mut view_model = ViewModel::default();

        let scope = ViewModelUpdater::update(&mut view_model, &state_event(2, &machine));

        assert!(scope.contains(UpdateScope::BOARD | UpdateScope::STATUS | UpdateScope::SCORE));
        assert_eq!(view_model.phase, Phase::Ready);
        assert_eq!(view_model.card(Slot::Left).unwrap().name, "Cricket");
        assert_eq!(view_model.metric(Slot::Left), MetricView::Shown("0".into()));
        assert_eq!(view_model.metric(Slot::Right), MetricView::Hidden);
        assert_eq!(view_model.score.best, 7);
    }

    #[test]
    fn stale_snapshot_is_ignored() {
        let machine = ready_machine();
        let mut view_model = ViewModel::default();
        ViewModelUpdater::update(&mut view_model, &state_event(5, &machine));

        let fresh = GameMachine::new(GameConfig::default(), 0);
        let scope = ViewModelUpdater::update(&mut view_model, &state_event(3, &fresh));

        assert!(scope.is_empty());
        assert_eq!(view_model.phase, Phase::Ready);
    }

    #[test]
    fn frames_update_visible_numbers_only() {
        let mut machine = ready_machine();
        let mut view_model = ViewModel::default();
        ViewModelUpdater::update(&mut view_model, &state_event(2, &machine));

        let left = Event::Reveal(RevealEvent::Frame {
            slot: Slot::Left,
            value: 1_234,
        });
        assert_eq!(
            ViewModelUpdater::update(&mut view_model, &left),
            UpdateScope::NUMBERS
        );
        assert_eq!(
            view_model.metric(Slot::Left),
            MetricView::Shown("1,234".into())
        );
        // Same value again is a no-op.
        assert!(ViewModelUpdater::update(&mut view_model, &left).is_empty());

        // Right number is hidden while the player can choose.
        let right = Event::Reveal(RevealEvent::Frame {
            slot: Slot::Right,
            value: 9,
        });
        assert!(ViewModelUpdater::update(&mut view_model, &right).is_empty());

        machine.dispatch(Input::Choose(Choice::Higher));
        ViewModelUpdater::update(&mut view_model, &state_event(3, &machine));
        assert_eq!(
            ViewModelUpdater::update(&mut view_model, &right),
            UpdateScope::NUMBERS
        );
        assert_eq!(view_model.metric(Slot::Right), MetricView::Shown("9".into()));
    }

    #[test]
    fn absent_metric_shows_sentinel_after_choice() {
        let mut machine = ready_machine();
        machine.dispatch(Input::Choose(Choice::Lower));
        let view_model = ViewModel::from_snapshot(&machine.snapshot());

        assert!(!view_model.input_enabled);
        assert_eq!(view_model.metric(Slot::Right), MetricView::Shown("N/A".into()));
    }

    #[test]
    fn game_over_routes_only_from_game_screen() {
        let mut view_model = ViewModel::default();
        let event = Event::Session(SessionEvent::GameOver(GameOverPayload { final_score: 3 }));

        assert!(ViewModelUpdater::update(&mut view_model, &event).is_empty());
        assert_eq!(view_model.screen(), Screen::Home);

        assert!(view_model.router.play());
        assert_eq!(
            ViewModelUpdater::update(&mut view_model, &event),
            UpdateScope::SCREEN
        );
        assert_eq!(view_model.screen(), Screen::GameOver { final_score: 3 });
    }

    #[test]
    fn failure_sets_error_once() {
        let mut view_model = ViewModel::default();
        let event = Event::Session(SessionEvent::Failed {
            message: "item data unavailable: timeout".into(),
        });

        assert_eq!(
            ViewModelUpdater::update(&mut view_model, &event),
            UpdateScope::STATUS
        );
        assert!(ViewModelUpdater::update(&mut view_model, &event).is_empty());
        assert_eq!(
            view_model.error.as_deref(),
            Some("item data unavailable: timeout")
        );
    }

    #[test]
    fn resynced_snapshot_outranks_queued_events() {
        let mut machine = ready_machine();
        let mut view_model = ViewModel::from_snapshot(&machine.snapshot());
        assert_eq!(view_model.revision, machine.revision());
        let queued = state_event(machine.revision(), &machine);

        machine.dispatch(Input::Choose(Choice::Higher));
        let snapshot = machine.snapshot();
        assert!(view_model.apply_snapshot(snapshot.revision, &snapshot));

        // An event published before the resync must not roll the board back.
        assert!(ViewModelUpdater::update(&mut view_model, &queued).is_empty());
        assert_eq!(view_model.phase, Phase::Revealing);
        assert!(!view_model.input_enabled);
    }
}
