//! Builds the runtime and config bundle used by front-ends.
use std::sync::Arc;

use anyhow::{Context, Result};
use runtime::{
    CatalogItemSource, FileScoreStore, HttpImagePreloader, HttpItemSource, InMemoryScoreStore,
    ItemSource, NoopPreloader, Runtime, ScoreStore,
};

use crate::config::BootstrapConfig;

/// Builder that assembles the runtime and its adapters for clients.
///
/// Without overrides the item source follows `config.offline` (bundled
/// catalog or HTTP API) and the best score lives in a file under the data
/// directory.
#[derive(Default)]
pub struct RuntimeBuilder {
    config: BootstrapConfig,
    item_source: Option<Arc<dyn ItemSource>>,
    score_store: Option<Arc<dyn ScoreStore>>,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: BootstrapConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the configured item source (e.g., a scripted source).
    pub fn item_source(mut self, source: impl ItemSource + 'static) -> Self {
        self.item_source = Some(Arc::new(source));
        self
    }

    /// Replace the file-backed score store.
    pub fn score_store(mut self, store: impl ScoreStore + 'static) -> Self {
        self.score_store = Some(Arc::new(store));
        self
    }

    pub async fn build(self) -> Result<RuntimeSetup> {
        let config = self.config;

        let item_source = match self.item_source {
            Some(source) => source,
            None => default_item_source(&config)?,
        };
        let score_store = self
            .score_store
            .unwrap_or_else(|| default_score_store(&config));

        let mut builder = Runtime::builder()
            .config(config.runtime_config())
            .shared_item_source(item_source)
            .shared_score_store(score_store);

        builder = if config.preload_images && !config.offline {
            builder.preloader(HttpImagePreloader::default())
        } else {
            builder.preloader(NoopPreloader)
        };

        let runtime = builder.build().await.context("Failed to build runtime")?;

        Ok(RuntimeSetup { config, runtime })
    }
}

pub struct RuntimeSetup {
    pub config: BootstrapConfig,
    pub runtime: Runtime,
}

fn default_item_source(config: &BootstrapConfig) -> Result<Arc<dyn ItemSource>> {
    if config.offline {
        let catalog = CatalogItemSource::bundled().context("Bundled catalog is unusable")?;
        tracing::info!(items = catalog.len(), "Serving items from the bundled catalog");
        return Ok(Arc::new(catalog));
    }

    let source = HttpItemSource::new(config.api_url.as_str())
        .with_context(|| format!("Failed to create HTTP client for {}", config.api_url))?;
    tracing::info!(base_url = source.base_url(), "Serving items from the API");
    Ok(Arc::new(source))
}

/// File store under the data directory, or memory if the directory is unusable.
fn default_score_store(config: &BootstrapConfig) -> Arc<dyn ScoreStore> {
    let dir = config.data_dir();
    match FileScoreStore::new(&dir) {
        Ok(store) => {
            tracing::info!(path = %store.path().display(), "Best score file");
            Arc::new(store)
        }
        Err(error) => {
            tracing::warn!(
                dir = %dir.display(),
                %error,
                "Cannot use data directory; best score will not survive this session"
            );
            Arc::new(InMemoryScoreStore::new())
        }
    }
}
