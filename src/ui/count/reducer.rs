//! Reducer for the user-count screen.

use crate::ui::mvi::Reducer;

use super::intent::CountIntent;
use super::state::CountState;

/// Message stored when a failure carries no text of its own.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

/// Reducer for the fetch lifecycle: idle → loading → resolved/failed.
///
/// Pure function; issuing the actual HTTP request is handled by the caller
/// around the dispatch call. Both terminal intents clear `is_loading`, so
/// the loading flag is released on every exit path of a fetch.
pub struct CountReducer;

impl Reducer for CountReducer {
    type State = CountState;
    type Intent = CountIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CountIntent::FetchStarted => CountState {
                is_loading: true,
                error: None,
                total_users: state.total_users,
            },

            CountIntent::FetchResolved { total_users } => CountState {
                is_loading: false,
                error: None,
                total_users: Some(total_users),
            },

            CountIntent::FetchFailed { message } => CountState {
                is_loading: false,
                error: Some(if message.is_empty() {
                    UNKNOWN_ERROR_MESSAGE.to_string()
                } else {
                    message
                }),
                total_users: state.total_users,
            },
        }
    }
}
