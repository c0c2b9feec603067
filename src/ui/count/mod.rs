//! User-count screen feature.
//!
//! MVI state machine for the fetch lifecycle:
//! - `state.rs`: the observable (is_loading, error, total_users) triple
//!   and its render phase
//! - `intent.rs`: fetch lifecycle events
//! - `reducer.rs`: pure transitions; terminal intents always release the
//!   loading flag

mod intent;
mod reducer;
mod state;

pub use intent::CountIntent;
pub use reducer::{CountReducer, UNKNOWN_ERROR_MESSAGE};
pub use state::{CountPhase, CountState};
