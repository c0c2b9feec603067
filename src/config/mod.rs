//! Configuration loading and validation.
//!
//! TOML file at `~/.config/usertally/config.toml`; every field has a
//! default, so a missing file means a fully defaulted config.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, UiConfig};
