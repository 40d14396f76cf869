//! Item source backed by the higher/lower REST API.

use async_trait::async_trait;
use game_core::{Item, ItemPair};
use serde::de::DeserializeOwned;

use super::wire::{WireItem, WirePair};
use crate::api::{ItemSource, ProviderError, ProviderResult};

pub const DEFAULT_BASE_URL: &str = "https://higher-lower-react.onrender.com";

const PAIR_PATH: &str = "/api/random-games/";
const SINGLE_PATH: &str = "/api/random-games/single/";

/// The API sits behind an ngrok tunnel in some deployments; without this
/// header the tunnel answers with an HTML interstitial.
const NGROK_SKIP_HEADER: &str = "ngrok-skip-browser-warning";

/// HTTP implementation of [`ItemSource`].
///
/// Timeouts are applied by the runtime around each call, so the client itself
/// is built without one.
pub struct HttpItemSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpItemSource {
    pub fn new(base_url: impl Into<String>) -> ProviderResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("higher-lower/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ProviderResult<T> {
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!(target: "runtime::providers", url = %url, "Requesting items");

        let response = self
            .client
            .get(&url)
            .header(NGROK_SKIP_HEADER, "true")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                url,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))
    }
}

#[async_trait]
impl ItemSource for HttpItemSource {
    async fn fetch_pair(&self) -> ProviderResult<ItemPair> {
        let pair: WirePair = self.get_json(PAIR_PATH).await?;
        let pair = pair.into_pair(&self.base_url)?;

        tracing::debug!(
            target: "runtime::providers",
            left = %pair.left.id,
            right = %pair.right.id,
            "Fetched item pair"
        );

        Ok(pair)
    }

    async fn fetch_one(&self) -> ProviderResult<Item> {
        let item: WireItem = self.get_json(SINGLE_PATH).await?;
        let item = item.into_item(&self.base_url)?;

        tracing::debug!(target: "runtime::providers", id = %item.id, "Fetched single item");

        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalised() {
        let source = HttpItemSource::new("https://api.example.com///").unwrap();
        assert_eq!(source.base_url(), "https://api.example.com");
    }
}
