use crate::ui::count::{CountIntent, CountReducer, CountState};
use crate::ui::mvi::Reducer;
use tokio::sync::mpsc;

/// Commands handed to the fetch worker.
#[derive(Debug)]
pub enum FetchCommand {
    Refresh,
}

pub type FetchCommandSender = mpsc::Sender<FetchCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// User-count fetch lifecycle (MVI pattern).
    count: CountState,
    /// Full URL shown in the header.
    endpoint: String,
    fetch_sender: Option<FetchCommandSender>,
    /// Animation counter advanced by the event-loop tick; drives the
    /// spinner frames.
    spinner_tick: usize,
}

impl App {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            count: CountState::default(),
            endpoint: endpoint.into(),
            fetch_sender: None,
            spinner_tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn spinner_tick(&self) -> usize {
        self.spinner_tick
    }

    /// Advance animations.
    pub fn on_tick(&mut self) {
        self.spinner_tick = self.spinner_tick.wrapping_add(1);
    }

    /// Attach the command channel to the fetch worker (called from runtime).
    pub fn set_fetch_sender(&mut self, sender: FetchCommandSender) {
        self.fetch_sender = Some(sender);
    }

    // ========================================================================
    // User-count methods (MVI pattern)
    // ========================================================================

    /// Get the current user-count state.
    pub fn count(&self) -> &CountState {
        &self.count
    }

    /// Dispatch an intent to the user-count reducer.
    pub fn dispatch_count(&mut self, intent: CountIntent) {
        dispatch_mvi!(self, count, CountReducer, intent);
    }

    /// Request a refresh of the user count.
    ///
    /// `FetchStarted` is dispatched only once the command is actually in
    /// the worker's queue; a dead worker surfaces as a failed fetch instead
    /// of a loading state that never resolves. Requesting while a fetch is
    /// in flight starts a second concurrent fetch, and the later completion
    /// wins.
    pub fn request_refresh(&mut self) {
        let Some(sender) = &self.fetch_sender else {
            return;
        };

        match sender.try_send(FetchCommand::Refresh) {
            Ok(()) => self.dispatch_count(CountIntent::FetchStarted),
            Err(err) => self.dispatch_count(CountIntent::FetchFailed {
                message: format!("refresh not dispatched: {err}"),
            }),
        }
    }
}
