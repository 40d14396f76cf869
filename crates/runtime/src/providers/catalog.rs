//! Offline item source drawing from a fixed catalog.

use std::sync::Mutex;

use async_trait::async_trait;
use game_core::{Item, ItemPair};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use super::wire::WireItem;
use crate::api::{ItemSource, ProviderError, ProviderResult};

/// Catalog bundled with the binary, in the API's wire format.
const BUNDLED: &str = include_str!("../../assets/catalog.json");

/// Serves random items from an in-memory list.
///
/// A pair always holds two distinct catalog entries. Single items are drawn
/// independently, so the same item can come back in a later round just as it
/// can from the live API.
pub struct CatalogItemSource {
    items: Vec<Item>,
    rng: Mutex<StdRng>,
}

impl CatalogItemSource {
    /// Builds a source over `items`. At least two items are required.
    pub fn new(items: Vec<Item>) -> ProviderResult<Self> {
        Self::with_rng(items, StdRng::from_entropy())
    }

    /// Deterministic source for tests.
    pub fn with_seed(items: Vec<Item>, seed: u64) -> ProviderResult<Self> {
        Self::with_rng(items, StdRng::seed_from_u64(seed))
    }

    fn with_rng(items: Vec<Item>, rng: StdRng) -> ProviderResult<Self> {
        if items.len() < 2 {
            return Err(ProviderError::InvalidItem(format!(
                "catalog needs at least two items, got {}",
                items.len()
            )));
        }
        Ok(Self {
            items,
            rng: Mutex::new(rng),
        })
    }

    /// Parses a JSON array of wire items.
    pub fn from_json(json: &str, base_url: &str) -> ProviderResult<Self> {
        let wire: Vec<WireItem> =
            serde_json::from_str(json).map_err(|e| ProviderError::Parse(e.to_string()))?;
        let items = wire
            .into_iter()
            .map(|item| item.into_item(base_url))
            .collect::<ProviderResult<Vec<_>>>()?;
        Self::new(items)
    }

    /// The catalog shipped with the binary.
    pub fn bundled() -> ProviderResult<Self> {
        Self::from_json(BUNDLED, "")
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn draw_pair(&self) -> ItemPair {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let picked = index::sample(&mut *rng, self.items.len(), 2);
        ItemPair::new(
            self.items[picked.index(0)].clone(),
            self.items[picked.index(1)].clone(),
        )
    }

    fn draw_one(&self) -> Item {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let at = rng.gen_range(0..self.items.len());
        self.items[at].clone()
    }
}

#[async_trait]
impl ItemSource for CatalogItemSource {
    async fn fetch_pair(&self) -> ProviderResult<ItemPair> {
        Ok(self.draw_pair())
    }

    async fn fetch_one(&self) -> ProviderResult<Item> {
        Ok(self.draw_one())
    }
}
