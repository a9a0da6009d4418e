//! Dashboard configuration.
//!
//! Loaded from `config.toml` under the platform config directory, validated,
//! then overridden by command-line flags.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, CatalogConfig, Config, StartRoute, UiConfig, DEFAULT_CATEGORIES};
