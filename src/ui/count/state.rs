//! State for the user-count screen.

use crate::ui::mvi::UiState;

/// Observable state of the user-count screen.
///
/// `is_loading` is true exactly while a fetch is in flight. `error` and
/// `total_users` hold the outcome of past fetches: a failure records its
/// message but keeps the previously fetched count, which stays hidden
/// behind the error (see [`CountState::phase`]) until a fetch succeeds
/// again.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CountState {
    /// A fetch is in flight.
    pub is_loading: bool,
    /// Displayable message of the last failure, cleared when a fetch
    /// starts.
    pub error: Option<String>,
    /// Most recently fetched count, if any fetch has succeeded.
    pub total_users: Option<u64>,
}

impl UiState for CountState {}

/// The four mutually exclusive render phases of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountPhase {
    /// Nothing fetched yet and nothing in flight.
    Pending,
    /// A fetch is in flight.
    Loading,
    /// The last fetch failed.
    Failed,
    /// A count is available.
    Ready,
}

impl CountState {
    /// Classify the state for rendering.
    ///
    /// Precedence is loading, then error, then value: a refresh issued on
    /// top of an error or a stale count shows the spinner, and an error
    /// masks a preserved count until the next success.
    pub fn phase(&self) -> CountPhase {
        if self.is_loading {
            CountPhase::Loading
        } else if self.error.is_some() {
            CountPhase::Failed
        } else if self.total_users.is_some() {
            CountPhase::Ready
        } else {
            CountPhase::Pending
        }
    }
}
