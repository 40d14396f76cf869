//! Asynchronous abstractions over the game's external collaborators.
//!
//! Runtime users plug in [`ItemSource`] and [`ImagePreloader`]
//! implementations so the game can run against the live API, a bundled
//! catalog, or scripted fixtures.
use async_trait::async_trait;
use game_core::{Item, ItemPair};

use super::errors::ProviderError;

pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// Remote (or local) supplier of comparable items.
///
/// Implementations must be safe to call concurrently: the runtime may have a
/// pair fetch and a prefetch in flight at the same time.
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// Fetch the two items that open a game.
    async fn fetch_pair(&self) -> ProviderResult<ItemPair>;

    /// Fetch a single item for the next round.
    async fn fetch_one(&self) -> ProviderResult<Item>;
}

/// Fire-and-forget image warmer.
///
/// Failures are the implementation's concern; callers never wait on or
/// observe the outcome.
pub trait ImagePreloader: Send + Sync {
    fn preload(&self, image_ref: &str);
}

/// Preloader that does nothing. Used by headless frontends and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPreloader;

impl ImagePreloader for NoopPreloader {
    fn preload(&self, _image_ref: &str) {}
}
