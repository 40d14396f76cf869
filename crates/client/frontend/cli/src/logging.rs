//! File-based tracing setup.
//!
//! The terminal belongs to the UI, so logs go to a per-session file instead
//! of stderr.
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "client.log";

/// Install the global subscriber writing to `<log dir>/<session>/client.log`.
///
/// Keep the returned guard alive for the whole program; dropping it flushes
/// and stops the background writer.
pub fn setup_logging(session_id: &Option<String>) -> Result<WorkerGuard> {
    let session_id = session_id.clone().unwrap_or_else(default_session_id);
    let session_log_dir = session_dir(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory: {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/{}", session_log_dir.display(), LOG_FILE);

    Ok(guard)
}

/// Directory holding the logs of `session_id`.
pub fn session_dir(session_id: &str) -> PathBuf {
    client_bootstrap::dirs::log_dir().join(session_id)
}

fn default_session_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{timestamp}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_session_ids_are_prefixed() {
        let id = default_session_id();
        assert!(id.starts_with("session_"));
        assert!(id["session_".len()..].parse::<u64>().is_ok());
    }

    #[test]
    fn session_dir_is_under_log_dir() {
        let dir = session_dir("abc");
        assert!(dir.ends_with("logs/abc"));
    }
}
