//! Intents for the user-count screen.

use crate::ui::mvi::Intent;

/// Events driving the user-count reducer.
///
/// One fetch cycle emits `FetchStarted` followed by exactly one of the two
/// terminal intents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountIntent {
    /// A refresh was handed to the fetch worker; a fetch is now in flight.
    FetchStarted,

    /// The fetch resolved with a count.
    FetchResolved { total_users: u64 },

    /// The fetch failed with a displayable message.
    FetchFailed { message: String },
}

impl Intent for CountIntent {}
