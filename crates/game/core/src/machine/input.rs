use core::fmt;

use crate::error::GameError;
use crate::evaluate::Choice;
use crate::item::{Item, ItemPair, Slot};

/// Epoch of a game sequence.
///
/// Every `start` (and `retry`) opens a new generation. Completions tagged with
/// an older generation belong to a superseded sequence and are dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Generation(pub u64);

impl Generation {
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gen#{}", self.0)
    }
}

/// Delayed steps scheduled by the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Timer {
    /// The right reveal has had time to finish; show correct/incorrect.
    Verdict,
    /// Start the advance sequence after a correct verdict.
    Advance,
    /// The slide finished; commit the new board.
    TransitionDone,
    /// Hand the final score to the successor screen.
    GameOver,
}

/// Everything that can drive the machine.
///
/// Commands come from the player; the remaining variants are completions of
/// effects the machine asked for earlier, tagged with the generation they
/// were issued under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// Begin a new game (resets the current score).
    Start,
    /// Leave the error state by reloading a pair (keeps the current score).
    Retry,
    /// The player's guess.
    Choose(Choice),
    PairFetched {
        generation: Generation,
        result: Result<ItemPair, GameError>,
    },
    Prefetched {
        generation: Generation,
        result: Result<Item, GameError>,
    },
    /// Result of the direct fetch issued when the prefetch cache was empty.
    NextFetched {
        generation: Generation,
        result: Result<Item, GameError>,
    },
    TimerElapsed {
        generation: Generation,
        timer: Timer,
    },
    /// An animator frame for `slot`, from reveal run `run`.
    Frame {
        generation: Generation,
        slot: Slot,
        run: u64,
        value: u64,
    },
}

impl Input {
    /// Generation tag of a completion; `None` for player commands.
    pub fn generation(&self) -> Option<Generation> {
        match self {
            Input::Start | Input::Retry | Input::Choose(_) => None,
            Input::PairFetched { generation, .. }
            | Input::Prefetched { generation, .. }
            | Input::NextFetched { generation, .. }
            | Input::TimerElapsed { generation, .. }
            | Input::Frame { generation, .. } => Some(*generation),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Input::Start => "start",
            Input::Retry => "retry",
            Input::Choose(_) => "choose",
            Input::PairFetched { .. } => "pair_fetched",
            Input::Prefetched { .. } => "prefetched",
            Input::NextFetched { .. } => "next_fetched",
            Input::TimerElapsed { .. } => "timer_elapsed",
            Input::Frame { .. } => "frame",
        }
    }
}
