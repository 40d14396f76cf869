//! Number reveal animator.
//!
//! Drives [`game_core::interpolate`] off the tokio clock. Every run is an
//! independent task with no shared state; the game worker tags each run so
//! frames from a superseded run are discarded by the state machine.

use std::time::Duration;

use game_core::{interpolate, progress};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Default frame cadence (about 60 frames per second).
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Counts from `start` to `end` over `duration`, calling `on_frame` per tick.
///
/// Intermediate values are non-decreasing (non-increasing when counting
/// down), repeated values are skipped, and `end` is delivered exactly once as
/// the final frame.
pub async fn run<F>(start: u64, end: u64, duration: Duration, frame_interval: Duration, mut on_frame: F)
where
    F: FnMut(u64),
{
    let started = Instant::now();
    let mut ticker = tokio::time::interval(frame_interval.max(Duration::from_millis(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut last = None;
    loop {
        ticker.tick().await;

        let progress = progress(started.elapsed(), duration);
        if progress >= 1.0 {
            on_frame(end);
            return;
        }

        let value = interpolate(start, end, progress);
        if value != end && last != Some(value) {
            on_frame(value);
            last = Some(value);
        }
    }
}

/// Spawns an animator run on the current runtime.
///
/// Returns `None` without emitting anything when either bound is absent.
pub fn animate<F>(
    start: Option<u64>,
    end: Option<u64>,
    duration: Duration,
    frame_interval: Duration,
    on_frame: F,
) -> Option<JoinHandle<()>>
where
    F: FnMut(u64) + Send + 'static,
{
    let (start, end) = start.zip(end)?;
    Some(tokio::spawn(run(start, end, duration, frame_interval, on_frame)))
}
