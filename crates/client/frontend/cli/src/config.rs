//! CLI-specific configuration for terminal UI.
use std::env;
use std::time::Duration;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HIGHER_LOWER_TICK_MS` - Input poll interval in milliseconds (default: 16)
    /// - `HIGHER_LOWER_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 7)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("HIGHER_LOWER_TICK_MS") {
            config.ui.tick = Duration::from_millis(ms.max(1));
        }

        if let Some(height) = read_env::<u16>("HIGHER_LOWER_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// How often the keyboard is polled.
    pub tick: Duration,
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(16),
            message_panel_height: 7,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
