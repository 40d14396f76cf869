//! View-model derived from runtime snapshots and reveal frames.
use game_core::{DisplayedValues, GameSnapshot, Item, Phase, RevealState, ScoreState, Slot};

use crate::format::format_metric;
use crate::screen::{Router, Screen};

/// Static part of a card: what the item is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub name: String,
    pub image_ref: Option<String>,
}

impl CardView {
    fn from_item(item: &Item) -> Self {
        Self {
            name: item.display_name.clone(),
            image_ref: item.image_ref.clone(),
        }
    }
}

/// What a card shows where its number goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MetricView {
    /// The player has not chosen yet; the Higher/Lower prompt goes here.
    Hidden,
    /// Formatted count, or the `N/A` sentinel.
    Shown(String),
}

/// Presentation state owned by a frontend.
///
/// Updated from runtime events by [`ViewModelUpdater`](crate::ViewModelUpdater).
#[derive(Clone, Debug, Default)]
pub struct ViewModel {
    pub router: Router,
    /// Revision of the last applied snapshot; older snapshots are ignored.
    pub revision: u64,
    pub phase: Phase,
    pub left: Option<CardView>,
    pub right: Option<CardView>,
    pub displayed: DisplayedValues,
    pub score: ScoreState,
    pub reveal: RevealState,
    pub input_enabled: bool,
    pub error: Option<String>,
}

impl ViewModel {
    /// Build from the snapshot returned by `RuntimeHandle::query_state`.
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Self {
        let mut view_model = Self {
            revision: snapshot.revision,
            ..Self::default()
        };
        view_model.copy_snapshot(snapshot);
        view_model
    }

    pub fn screen(&self) -> Screen {
        self.router.screen()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// True while the board slides the right item into the left slot.
    pub fn is_sliding(&self) -> bool {
        self.phase == Phase::Transitioning
    }

    pub fn card(&self, slot: Slot) -> Option<&CardView> {
        match slot {
            Slot::Left => self.left.as_ref(),
            Slot::Right => self.right.as_ref(),
        }
    }

    /// The number to render for `slot`. The right number stays hidden while
    /// the player can still choose.
    pub fn metric(&self, slot: Slot) -> MetricView {
        if slot == Slot::Right && self.input_enabled {
            return MetricView::Hidden;
        }
        MetricView::Shown(format_metric(self.displayed.get(slot)))
    }

    /// Apply a snapshot; returns false if it is older than the current one.
    pub fn apply_snapshot(&mut self, revision: u64, snapshot: &GameSnapshot) -> bool {
        if revision < self.revision {
            return false;
        }
        self.revision = revision;
        self.copy_snapshot(snapshot);
        true
    }

    /// Apply an animator frame; frames for an absent or hidden card are dropped.
    pub fn apply_frame(&mut self, slot: Slot, value: u64) -> bool {
        if self.card(slot).is_none() || self.metric(slot) == MetricView::Hidden {
            return false;
        }
        if self.displayed.get(slot) == Some(value) {
            return false;
        }
        self.displayed.set(slot, Some(value));
        true
    }

    fn copy_snapshot(&mut self, snapshot: &GameSnapshot) {
        self.phase = snapshot.phase;
        self.left = snapshot.board.left().map(CardView::from_item);
        self.right = snapshot.board.right().map(CardView::from_item);
        self.displayed = snapshot.displayed;
        self.score = snapshot.score;
        self.reveal = snapshot.reveal;
        self.input_enabled = snapshot.input_enabled;
        self.error = snapshot.last_error.as_ref().map(ToString::to_string);
    }
}

/// Framework-agnostic styling hooks implemented by each frontend's theme.
pub trait PresentationMapper {
    type Style;

    /// Style of a message log entry.
    fn style_message(&self, level: crate::message::MessageLevel) -> Self::Style;

    /// Border style of a card given the verdict shown on the board.
    fn style_verdict(&self, reveal: RevealState) -> Self::Style;

    /// Style of a revealed number.
    fn style_metric(&self) -> Self::Style;
}
