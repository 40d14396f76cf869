use std::sync::{Arc, Mutex};
use std::time::Duration;

use runtime::animation::{self, DEFAULT_FRAME_INTERVAL};

type Frames = Arc<Mutex<Vec<u64>>>;

async fn collect(start: Option<u64>, end: Option<u64>, duration_ms: u64) -> Option<Vec<u64>> {
    let frames: Frames = Arc::default();
    let sink = Arc::clone(&frames);
    let task = animation::animate(
        start,
        end,
        Duration::from_millis(duration_ms),
        DEFAULT_FRAME_INTERVAL,
        move |value| sink.lock().unwrap().push(value),
    )?;
    task.await.unwrap();
    let values = frames.lock().unwrap().clone();
    Some(values)
}

#[tokio::test(start_paused = true)]
async fn counts_up_and_ends_exactly_once() {
    let frames = collect(Some(0), Some(1000), 1000).await.unwrap();

    assert_eq!(frames.first(), Some(&0));
    assert_eq!(frames.last(), Some(&1000));
    assert_eq!(frames.iter().filter(|&&v| v == 1000).count(), 1);
    assert!(frames.windows(2).all(|w| w[0] < w[1]), "{frames:?}");
    // Roughly one frame per 16ms tick.
    assert!(frames.len() > 30, "only {} frames", frames.len());
}

#[tokio::test(start_paused = true)]
async fn counts_down_monotonically() {
    let frames = collect(Some(500), Some(100), 400).await.unwrap();

    assert_eq!(frames.last(), Some(&100));
    assert_eq!(frames.iter().filter(|&&v| v == 100).count(), 1);
    assert!(frames.windows(2).all(|w| w[0] > w[1]), "{frames:?}");
    assert!(frames.iter().all(|&v| (100..=500).contains(&v)));
}

#[tokio::test(start_paused = true)]
async fn equal_bounds_emit_only_the_end() {
    assert_eq!(collect(Some(80), Some(80), 1000).await, Some(vec![80]));
}

#[tokio::test(start_paused = true)]
async fn zero_duration_jumps_to_end() {
    assert_eq!(collect(Some(0), Some(42), 0).await, Some(vec![42]));
}

#[tokio::test(start_paused = true)]
async fn absent_bound_is_a_no_op() {
    assert_eq!(collect(None, Some(5), 1000).await, None);
    assert_eq!(collect(Some(0), None, 1000).await, None);
}

#[tokio::test(start_paused = true)]
async fn runs_are_independent() {
    let (left, right) = tokio::join!(
        collect(Some(0), Some(100), 1000),
        collect(Some(0), Some(250), 500)
    );
    assert_eq!(left.unwrap().last(), Some(&100));
    assert_eq!(right.unwrap().last(), Some(&250));
}
