//! Repository layer for data that outlives a run.
//!
//! The only persisted value is the best score. Item data comes from
//! providers, not repositories.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileScoreStore;
pub use memory::InMemoryScoreStore;
pub use traits::ScoreStore;
