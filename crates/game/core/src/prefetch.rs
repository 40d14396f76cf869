//! One-item look-ahead cache that hides fetch latency during board advances.
//!
//! The cache itself never performs I/O. Warming is a two-step protocol:
//! [`PrefetchCache::begin_warm`] reserves the (single) outstanding warm-up,
//! and the driver later calls [`PrefetchCache::fill`] or
//! [`PrefetchCache::abandon`] with the fetch result.

use crate::error::GameError;
use crate::item::Item;

#[derive(Clone, Debug, Default)]
pub struct PrefetchCache {
    next: Option<Item>,
    warming: bool,
}

impl PrefetchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves a warm-up. Returns false if one is already in flight or an
    /// item is already cached, in which case no fetch should be issued.
    pub fn begin_warm(&mut self) -> bool {
        if self.warming || self.next.is_some() {
            return false;
        }
        self.warming = true;
        true
    }

    /// Stores the result of a warm-up.
    pub fn fill(&mut self, item: Item) {
        self.warming = false;
        self.next = Some(item);
    }

    /// Releases the warm-up reservation after a failed fetch.
    pub fn abandon(&mut self) {
        self.warming = false;
    }

    /// Returns and clears the cached item.
    pub fn take(&mut self) -> Result<Item, GameError> {
        self.next.take().ok_or(GameError::EmptyCache)
    }

    pub fn is_warming(&self) -> bool {
        self.warming
    }

    pub fn is_ready(&self) -> bool {
        self.next.is_some()
    }

    /// Drops the cached item and any reservation.
    pub fn clear(&mut self) {
        self.next = None;
        self.warming = false;
    }
}
