use crate::error::GameError;
use crate::item::Slot;

use super::input::{Generation, Timer};

/// Payload of the terminal game-over transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOverPayload {
    pub final_score: u64,
}

/// Side effects requested by the machine, executed by the runtime in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Abort every outstanding fetch, timer and animator run.
    CancelPending,
    /// Fetch the opening pair; answer with `Input::PairFetched`.
    FetchPair { generation: Generation },
    /// Warm the prefetch cache; answer with `Input::Prefetched`.
    Prefetch { generation: Generation },
    /// Direct fetch after an empty cache; answer with `Input::NextFetched`.
    FetchNext { generation: Generation },
    /// Answer with `Input::TimerElapsed` after `delay_ms`.
    Schedule {
        generation: Generation,
        timer: Timer,
        delay_ms: u64,
    },
    /// Run the number animator for `slot`, answering with `Input::Frame`.
    /// A no-op when either bound is absent.
    Animate {
        generation: Generation,
        slot: Slot,
        run: u64,
        start: Option<u64>,
        end: Option<u64>,
        duration_ms: u64,
    },
    /// An accepted animator frame, to be shown by the presentation layer.
    Display { slot: Slot, value: u64 },
    /// Fire-and-forget image preload.
    Preload { image_ref: String },
    /// Fire-and-forget best-score save.
    PersistBest { best: u64 },
    /// Terminal signal, emitted exactly once per run.
    GameOver(GameOverPayload),
    /// A user-visible failure; the machine is now in `Phase::Error`.
    Failed { error: GameError },
}
