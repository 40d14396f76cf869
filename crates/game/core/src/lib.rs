//! Deterministic rules and state for the higher/lower comparison game.
//!
//! `game-core` defines the canonical game rules (round evaluation, scoring,
//! prefetching, reveal interpolation) and the progression state machine. It is
//! a pure "functional core": every state change flows through
//! [`GameMachine::dispatch`], which returns the [`Effect`]s an outer shell must
//! perform (fetches, timers, animations, persistence). No I/O happens here.
pub mod board;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod item;
pub mod machine;
pub mod prefetch;
pub mod reveal;
pub mod score;

pub use board::Board;
pub use config::{GameConfig, Timings};
pub use error::GameError;
pub use evaluate::{Choice, Verdict, evaluate};
pub use item::{Item, ItemId, ItemPair, Slot};
pub use machine::{
    Effect, GameMachine, GameOverPayload, GameSnapshot, Generation, Input, Phase, Timer,
};
pub use prefetch::PrefetchCache;
pub use reveal::{AnimationState, DisplayedValues, RevealState, interpolate, progress};
pub use score::{ScoreState, ScoreTracker};
