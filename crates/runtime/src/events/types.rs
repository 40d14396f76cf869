//! Event types for different topics.

use game_core::{GameOverPayload, GameSnapshot, Slot};
use serde::{Deserialize, Serialize};

/// Observable state changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StateEvent {
    /// The machine changed; `revision` increases monotonically per runtime.
    Changed {
        revision: u64,
        snapshot: Box<GameSnapshot>,
    },
}

/// Accepted animator output for a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealEvent {
    Frame { slot: Slot, value: u64 },
}

/// Run-level signals for screen routing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Emitted exactly once per run, after the game-over delay.
    GameOver(GameOverPayload),

    /// A fetch failed and the game is waiting for a retry.
    Failed { message: String },
}
