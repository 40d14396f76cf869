//! Platform-specific directory utilities
//!
//! Follows platform conventions for cache and data directories, with a local
//! fallback when no home directory can be determined.

use std::path::PathBuf;

const APP_NAME: &str = "higher-lower";

/// Get the platform-specific data directory (holds `high_score.json`)
///
/// - macOS: `~/Library/Application Support/higher-lower`
/// - Linux: `~/.local/share/higher-lower` (or `$XDG_DATA_HOME/higher-lower`)
/// - Windows: `%APPDATA%\higher-lower\data`
/// - Fallback: `./.higher-lower`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".").join(format!(".{APP_NAME}")))
}

/// Get the platform-specific log directory
///
/// - macOS: `~/Library/Caches/higher-lower/logs`
/// - Linux: `~/.cache/higher-lower/logs` (or `$XDG_CACHE_HOME/higher-lower/logs`)
/// - Windows: `%LOCALAPPDATA%\higher-lower\cache\logs`
/// - Fallback: `./.higher-lower/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".").join(format!(".{APP_NAME}")))
        .join("logs")
}
