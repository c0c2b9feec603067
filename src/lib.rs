//! Terminal screen for a single remote metric: the total user count.
//!
//! Structure:
//! - [`api`]: HTTP client for the `totalUser` endpoint
//! - [`fetch`]: background worker turning refresh commands into intents
//! - [`ui`]: MVI state machine, event loop, rendering
//! - [`config`]: TOML configuration with command-line overrides
//! - [`logging`]: env-gated file tracing

pub mod api;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod ui;
