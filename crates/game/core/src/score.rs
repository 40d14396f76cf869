//! Current and best score bookkeeping.

/// Score pair exposed to the presentation layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreState {
    pub current: u64,
    pub best: u64,
}

/// Tracks the running score and the best score.
///
/// `best` never decreases. Persisting it is the caller's job: [`on_correct`]
/// hands back the new best whenever one is reached.
///
/// [`on_correct`]: ScoreTracker::on_correct
#[derive(Clone, Debug, Default)]
pub struct ScoreTracker {
    state: ScoreState,
}

impl ScoreTracker {
    /// Starts a session from the best score loaded from storage.
    pub fn new(best: u64) -> Self {
        Self {
            state: ScoreState { current: 0, best },
        }
    }

    pub fn state(&self) -> ScoreState {
        self.state
    }

    pub fn current(&self) -> u64 {
        self.state.current
    }

    pub fn best(&self) -> u64 {
        self.state.best
    }

    /// Records a correct guess. Returns the new best if it was just raised.
    #[must_use = "a raised best score must be persisted"]
    pub fn on_correct(&mut self) -> Option<u64> {
        self.state.current = self.state.current.saturating_add(1);
        if self.state.current > self.state.best {
            self.state.best = self.state.current;
            Some(self.state.best)
        } else {
            None
        }
    }

    /// Starts a new run. The best score is kept.
    pub fn reset(&mut self) {
        self.state.current = 0;
    }
}
