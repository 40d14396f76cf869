//! Error taxonomy shared by the state machine and its drivers.
//!
//! Only [`GameError::DataUnavailable`] is ever shown to the player. The other
//! variants are handled where they occur: an empty prefetch cache falls back to
//! a direct fetch, and a failed best-score save is logged and retried on the
//! next high score.

use core::fmt;

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameError {
    /// A fetch failed, timed out, or returned an item that failed validation.
    #[error("item data unavailable: {0}")]
    DataUnavailable(String),

    /// An advance was attempted before a prefetch resolved.
    #[error("prefetch cache is empty")]
    EmptyCache,

    /// The best score could not be written to the score store.
    #[error("failed to persist best score: {0}")]
    PersistenceFailure(String),
}

impl GameError {
    pub fn data_unavailable(reason: impl fmt::Display) -> Self {
        Self::DataUnavailable(reason.to_string())
    }

    pub fn persistence(reason: impl fmt::Display) -> Self {
        Self::PersistenceFailure(reason.to_string())
    }
}
