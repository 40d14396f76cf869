//! In-memory ScoreStore implementation for tests and local runs.

use std::sync::RwLock;

use super::error::{RepositoryError, Result};
use super::traits::ScoreStore;

/// In-memory implementation of ScoreStore.
///
/// Optionally fails every save, so tests can exercise the
/// swallowed-persistence-failure path.
#[derive(Default)]
pub struct InMemoryScoreStore {
    best: RwLock<Option<u64>>,
    saves: RwLock<Vec<u64>>,
    fail_saves: bool,
}

impl InMemoryScoreStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a best score.
    pub fn with_best(best: u64) -> Self {
        Self {
            best: RwLock::new(Some(best)),
            ..Self::default()
        }
    }

    /// Create a store whose saves always fail.
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    /// Every value passed to a successful `save`, in order.
    pub fn saves(&self) -> Vec<u64> {
        self.saves
            .read()
            .map(|saves| saves.clone())
            .unwrap_or_default()
    }
}

impl ScoreStore for InMemoryScoreStore {
    fn load(&self) -> Result<Option<u64>> {
        let best = self.best.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(*best)
    }

    fn save(&self, best: u64) -> Result<()> {
        if self.fail_saves {
            return Err(RepositoryError::Io(std::io::Error::other(
                "score store rejected the write",
            )));
        }
        *self.best.write().map_err(|_| RepositoryError::LockPoisoned)? = Some(best);
        self.saves
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?
            .push(best);
        Ok(())
    }
}
