//! Model-View-Intent (MVI) primitives for the UI layer.
//!
//! Unidirectional data flow: every change to what the screen shows goes
//! through a reducer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: complete, immutable description of what to render
//! - **Intent**: user actions (key presses) and system events (fetch
//!   results)
//! - **Reducer**: pure function turning (state, intent) into the next
//!   state; all I/O happens around the dispatch, never inside it

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
