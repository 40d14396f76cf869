//! Repository contracts for the persisted best score.

use super::error::Result;

/// Storage for the best score.
///
/// A single scalar with last-write-wins semantics. Implementations are
/// synchronous; the runtime calls them from a blocking task so file I/O never
/// stalls the game worker.
pub trait ScoreStore: Send + Sync {
    /// Load the stored best score, `None` if nothing has been saved yet.
    fn load(&self) -> Result<Option<u64>>;

    /// Replace the stored best score.
    fn save(&self, best: u64) -> Result<()>;
}
