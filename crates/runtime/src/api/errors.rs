//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, repositories, and item providers
//! so clients can bubble them up with consistent context.
use std::time::Duration;

use game_core::GameError;
use thiserror::Error;
use tokio::sync::oneshot;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("game worker command channel closed")]
    CommandChannelClosed,

    #[error("game worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("runtime worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("runtime requires an item source to be configured before building")]
    MissingItemSource,
}

/// Failures raised by item providers.
///
/// Every variant is surfaced to the game as [`GameError::DataUnavailable`].
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("malformed response: {0}")]
    Parse(String),

    #[error("invalid item: {0}")]
    InvalidItem(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("no scripted response left")]
    Exhausted,
}

impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ProviderError::Parse(error.to_string())
        } else {
            ProviderError::Network(error.to_string())
        }
    }
}

impl From<ProviderError> for GameError {
    fn from(error: ProviderError) -> Self {
        GameError::data_unavailable(error)
    }
}
