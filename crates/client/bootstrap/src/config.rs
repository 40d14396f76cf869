//! Client runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use game_core::{GameConfig, Timings};
use runtime::{DEFAULT_BASE_URL, RuntimeConfig};

use crate::dirs;

/// Configuration required to bootstrap a client runtime.
#[derive(Clone, Debug)]
pub struct BootstrapConfig {
    /// Base URL of the item API; relative image paths resolve against it.
    pub api_url: String,
    pub fetch_timeout: Duration,
    /// Overrides the platform data directory.
    pub data_dir: Option<PathBuf>,
    pub preload_images: bool,
    /// Serve items from the bundled catalog instead of the API.
    pub offline: bool,
    pub session_id: Option<String>,
    pub timings: Timings,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            fetch_timeout: RuntimeConfig::DEFAULT_FETCH_TIMEOUT,
            data_dir: None,
            preload_images: true,
            offline: false,
            session_id: None,
            timings: Timings::default(),
        }
    }
}

impl BootstrapConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HIGHER_LOWER_API_URL` - Item API base URL (default: hosted API)
    /// - `HIGHER_LOWER_FETCH_TIMEOUT_MS` - Per-fetch timeout (default: 10000)
    /// - `HIGHER_LOWER_DATA_DIR` - Directory for the best score (default: platform-specific)
    /// - `HIGHER_LOWER_PRELOAD_IMAGES` - Warm item images over HTTP (default: true)
    /// - `HIGHER_LOWER_OFFLINE` - Use the bundled catalog (default: false)
    /// - `HIGHER_LOWER_SESSION_ID` - Session identifier for log files (default: auto-generated)
    /// - `HIGHER_LOWER_REVEAL_MS` - Count-up duration of both reveals (default: 1000)
    /// - `HIGHER_LOWER_VERDICT_DELAY_MS` - Choice to verdict delay (default: 1200)
    /// - `HIGHER_LOWER_TRANSITION_MS` - Board slide duration (default: 800)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    ///
    /// Values that fail to parse are logged and the default is kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = read_string(&lookup, "HIGHER_LOWER_API_URL") {
            config.api_url = url;
        }

        if let Some(ms) = read_env::<u64, _>(&lookup, "HIGHER_LOWER_FETCH_TIMEOUT_MS") {
            config.fetch_timeout = Duration::from_millis(ms.max(1));
        }

        config.data_dir = read_string(&lookup, "HIGHER_LOWER_DATA_DIR").map(PathBuf::from);

        if let Some(enable) = read_env_bool(&lookup, "HIGHER_LOWER_PRELOAD_IMAGES") {
            config.preload_images = enable;
        }

        if let Some(enable) = read_env_bool(&lookup, "HIGHER_LOWER_OFFLINE") {
            config.offline = enable;
        }

        config.session_id = read_string(&lookup, "HIGHER_LOWER_SESSION_ID");

        // Both count-ups share one knob.
        if let Some(ms) = read_env::<u64, _>(&lookup, "HIGHER_LOWER_REVEAL_MS") {
            config.timings.initial_reveal_ms = ms;
            config.timings.reveal_ms = ms;
        }
        if let Some(ms) = read_env::<u64, _>(&lookup, "HIGHER_LOWER_VERDICT_DELAY_MS") {
            config.timings.verdict_delay_ms = ms;
        }
        if let Some(ms) = read_env::<u64, _>(&lookup, "HIGHER_LOWER_TRANSITION_MS") {
            config.timings.transition_ms = ms;
        }

        config
    }

    /// Directory holding the best score.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(dirs::data_dir)
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            game_config: GameConfig::with_timings(self.timings),
            fetch_timeout: self.fetch_timeout,
            ..RuntimeConfig::default()
        }
    }
}

fn read_string<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key)?;
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn read_env<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = read_string(lookup, key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring unparseable environment value");
            None
        }
    }
}

fn read_env_bool<F>(lookup: &F, key: &str) -> Option<bool>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = read_string(lookup, key)?;
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => {
            tracing::warn!(key, value = %raw, "Ignoring unparseable environment flag");
            None
        }
    }
}
