//! Startup configuration: initial text and shift, UI pacing.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, Defaults, UiConfig};
