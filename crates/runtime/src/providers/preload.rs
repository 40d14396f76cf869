//! HTTP image warmer.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::api::ImagePreloader;

/// Fetches each image once in a background task and discards the body, so the
/// HTTP cache (or CDN edge) is warm by the time a frontend renders it.
///
/// A URL stays recorded only while its preload is in flight or succeeded; a
/// failed preload is released so the next offer tries again.
#[derive(Clone)]
pub struct HttpImagePreloader {
    client: reqwest::Client,
    seen: Arc<Mutex<HashSet<String>>>,
}

impl HttpImagePreloader {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            seen: Arc::default(),
        }
    }

    /// Records `url` and returns true the first time it is offered.
    fn first_sighting(&self, url: &str) -> bool {
        let mut seen = self.seen.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        seen.insert(url.to_string())
    }
}

fn release(seen: &Mutex<HashSet<String>>, url: &str) {
    let mut seen = seen.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    seen.remove(url);
}

impl Default for HttpImagePreloader {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

impl ImagePreloader for HttpImagePreloader {
    fn preload(&self, image_ref: &str) {
        if !self.first_sighting(image_ref) {
            return;
        }
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::debug!(target: "runtime::providers", url = image_ref, "No runtime, skipping preload");
            return;
        };

        let client = self.client.clone();
        let seen = Arc::clone(&self.seen);
        let url = image_ref.to_string();
        handle.spawn(async move {
            match client.get(&url).send().await {
                Ok(response) if response.status().is_success() => {
                    let status = response.status();
                    // Drain the body so the connection can be reused.
                    let _ = response.bytes().await;
                    tracing::trace!(target: "runtime::providers", url = %url, %status, "Preloaded image");
                }
                Ok(response) => {
                    let status = response.status();
                    tracing::debug!(target: "runtime::providers", url = %url, %status, "Image preload rejected");
                    release(&seen, &url);
                }
                Err(error) => {
                    tracing::debug!(target: "runtime::providers", url = %url, %error, "Image preload failed");
                    release(&seen, &url);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_url_is_fetched_once() {
        let preloader = HttpImagePreloader::default();
        assert!(preloader.first_sighting("https://img.example/a.png"));
        assert!(!preloader.first_sighting("https://img.example/a.png"));
        assert!(preloader.first_sighting("https://img.example/b.png"));
    }

    #[test]
    fn released_url_is_offered_again() {
        let preloader = HttpImagePreloader::default();
        assert!(preloader.first_sighting("https://img.example/a.png"));
        release(&preloader.seen, "https://img.example/a.png");
        assert!(preloader.first_sighting("https://img.example/a.png"));
    }

    #[tokio::test]
    async fn failed_preload_is_retried_on_next_offer() {
        // Nothing listens on the discard port, so the request fails fast.
        let url = "http://127.0.0.1:9/missing.png";
        let preloader = HttpImagePreloader::default();
        preloader.preload(url);

        tokio::time::timeout(std::time::Duration::from_secs(10), async {
            while preloader.seen.lock().unwrap().contains(url) {
                tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("failed preload releases its url");
        assert!(preloader.first_sighting(url));
    }

    #[test]
    fn preload_outside_a_runtime_is_harmless() {
        HttpImagePreloader::default().preload("https://img.example/a.png");
    }
}
