use crate::board::Board;
use crate::error::GameError;
use crate::reveal::{AnimationState, DisplayedValues, RevealState};
use crate::score::ScoreState;

use super::input::Generation;
use super::phase::Phase;

/// Read-only copy of everything a renderer needs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    /// Machine revision this snapshot was taken at.
    pub revision: u64,
    pub generation: Generation,
    pub phase: Phase,
    pub board: Board,
    pub displayed: DisplayedValues,
    pub reveal: RevealState,
    pub animation: AnimationState,
    pub score: ScoreState,
    pub input_enabled: bool,
    pub last_error: Option<GameError>,
}

impl GameSnapshot {
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }
}
