//! Worker tasks that back the runtime orchestration.
//!
//! The game worker owns the state machine and executes its effects, while the
//! persistence worker offloads score saves.

mod game;
mod persistence;

pub use game::{Command, GameWorker, WorkerTimings};
pub use persistence::{PersistenceWorker, load_best};
