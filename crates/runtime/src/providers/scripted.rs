//! Item source that replays queued responses.
//!
//! Used by tests (and demos) to drive the game through exact sequences of
//! successes, failures, slow responses and hung requests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use game_core::{Item, ItemPair};

use crate::api::{ItemSource, ProviderError, ProviderResult};

/// One queued answer.
#[derive(Debug, Clone)]
pub enum Scripted<T> {
    Ready(T),
    Fail(String),
    /// Resolve with the value after the delay.
    Delay(Duration, T),
    /// Never resolve; the runtime's fetch timeout has to fire.
    Hang,
}

#[derive(Default)]
struct Script {
    pairs: VecDeque<Scripted<ItemPair>>,
    singles: VecDeque<Scripted<Item>>,
    pair_requests: usize,
    single_requests: usize,
}

/// Cloneable [`ItemSource`] over shared queues; clones see the same script.
///
/// An empty queue answers with [`ProviderError::Exhausted`].
#[derive(Clone, Default)]
pub struct ScriptedItemSource {
    script: Arc<Mutex<Script>>,
}

impl ScriptedItemSource {
    pub fn new() -> Self {
        Self::default()
    }

    fn script(&self) -> MutexGuard<'_, Script> {
        self.script
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn push_pair(&self, response: Scripted<ItemPair>) -> &Self {
        self.script().pairs.push_back(response);
        self
    }

    pub fn push_item(&self, response: Scripted<Item>) -> &Self {
        self.script().singles.push_back(response);
        self
    }

    /// Queue a ready pair.
    pub fn pair(&self, left: Item, right: Item) -> &Self {
        self.push_pair(Scripted::Ready(ItemPair::new(left, right)))
    }

    /// Queue a ready single item.
    pub fn item(&self, item: Item) -> &Self {
        self.push_item(Scripted::Ready(item))
    }

    /// Number of `fetch_pair` calls served so far.
    pub fn pair_requests(&self) -> usize {
        self.script().pair_requests
    }

    /// Number of `fetch_one` calls served so far.
    pub fn item_requests(&self) -> usize {
        self.script().single_requests
    }

    async fn play<T>(next: Option<Scripted<T>>) -> ProviderResult<T> {
        match next {
            Some(Scripted::Ready(value)) => Ok(value),
            Some(Scripted::Fail(reason)) => Err(ProviderError::Network(reason)),
            Some(Scripted::Delay(delay, value)) => {
                tokio::time::sleep(delay).await;
                Ok(value)
            }
            Some(Scripted::Hang) => std::future::pending().await,
            None => Err(ProviderError::Exhausted),
        }
    }
}

#[async_trait]
impl ItemSource for ScriptedItemSource {
    async fn fetch_pair(&self) -> ProviderResult<ItemPair> {
        let next = {
            let mut script = self.script();
            script.pair_requests += 1;
            script.pairs.pop_front()
        };
        Self::play(next).await
    }

    async fn fetch_one(&self) -> ProviderResult<Item> {
        let next = {
            let mut script = self.script();
            script.single_requests += 1;
            script.singles.pop_front()
        };
        Self::play(next).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_in_order_then_runs_dry() {
        let source = ScriptedItemSource::new();
        source
            .item(Item::new("a", "Alpha", Some(1)))
            .push_item(Scripted::Fail("boom".into()));

        assert_eq!(source.fetch_one().await.unwrap().id.as_str(), "a");
        assert!(matches!(
            source.fetch_one().await,
            Err(ProviderError::Network(_))
        ));
        assert!(matches!(
            source.fetch_one().await,
            Err(ProviderError::Exhausted)
        ));
        assert_eq!(source.item_requests(), 3);
        assert_eq!(source.pair_requests(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn delayed_response_waits() {
        let source = ScriptedItemSource::new();
        source.push_item(Scripted::Delay(
            Duration::from_secs(3),
            Item::new("slow", "Slow", None),
        ));

        let started = tokio::time::Instant::now();
        let item = source.fetch_one().await.unwrap();
        assert_eq!(item.id.as_str(), "slow");
        assert!(started.elapsed() >= Duration::from_secs(3));
    }
}
