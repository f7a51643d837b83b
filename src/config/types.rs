use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Initial workbench state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Initial shift key, `0..=25` (default: 3).
    #[serde(default = "default_shift")]
    pub shift: u8,
    /// Initial input text.
    #[serde(default = "default_text")]
    pub text: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            shift: default_shift(),
            text: default_text(),
        }
    }
}

/// UI pacing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event-loop tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn default_shift() -> u8 {
    3
}

fn default_text() -> String {
    "HELLO WORLD".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}
