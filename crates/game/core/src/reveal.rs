//! Reveal state and the interpolation behind the number count-up.

use core::time::Duration;

use crate::item::Slot;

/// Verdict affordance shown after a guess.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RevealState {
    #[default]
    Neutral,
    Correct,
    Incorrect,
}

/// What the board is visibly doing. Input is only accepted while `Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AnimationState {
    #[default]
    Idle,
    Revealing,
    Transitioning,
}

/// Numbers currently shown in each slot. `None` renders as a sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayedValues {
    pub left: Option<u64>,
    pub right: Option<u64>,
}

impl DisplayedValues {
    pub fn get(&self, slot: Slot) -> Option<u64> {
        match slot {
            Slot::Left => self.left,
            Slot::Right => self.right,
        }
    }

    pub fn set(&mut self, slot: Slot, value: Option<u64>) {
        match slot {
            Slot::Left => self.left = value,
            Slot::Right => self.right = value,
        }
    }
}

/// Fraction of a reveal that has elapsed. A zero duration is always complete.
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    elapsed.as_secs_f64() / duration.as_secs_f64()
}

/// Value shown at `progress` of a count from `start` to `end`:
/// `floor(start + (end - start) * progress)`, kept within the two bounds.
pub fn interpolate(start: u64, end: u64, progress: f64) -> u64 {
    let progress = progress.clamp(0.0, 1.0);
    let value = (start as f64 + (end as f64 - start as f64) * progress).floor();

    let (low, high) = if start <= end {
        (start, end)
    } else {
        (end, start)
    };

    // `as` saturates for out-of-range floats, the clamp handles rounding drift.
    (value.max(0.0) as u64).clamp(low, high)
}
