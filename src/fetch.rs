//! Background driver for user-count fetches.
//!
//! The UI thread never performs network I/O: it sends [`FetchCommand`]s
//! here and receives terminal [`CountIntent`]s back through the event
//! channel. Each command spawns its own task, so overlapping refreshes run
//! concurrently and the latest completion wins; there is no queue and no
//! deduplication.

use std::sync::mpsc::Sender;

use tokio::sync::mpsc::Receiver;
use tracing::warn;

use crate::api::ApiClient;
use crate::ui::app::FetchCommand;
use crate::ui::count::CountIntent;
use crate::ui::events::AppEvent;

/// Consume refresh commands until the UI drops its sender.
pub async fn run(client: ApiClient, mut commands: Receiver<FetchCommand>, events: Sender<AppEvent>) {
    while let Some(command) = commands.recv().await {
        match command {
            FetchCommand::Refresh => {
                let client = client.clone();
                let events = events.clone();
                tokio::spawn(async move {
                    let intent = fetch_cycle(&client).await;
                    // A send failure means the UI is gone; the result is
                    // simply discarded.
                    let _ = events.send(AppEvent::Count(intent));
                });
            }
        }
    }
}

/// One fetch cycle, from request to terminal intent.
pub async fn fetch_cycle(client: &ApiClient) -> CountIntent {
    match client.total_users().await {
        Ok(payload) => CountIntent::FetchResolved {
            total_users: payload.total_users,
        },
        Err(err) => {
            warn!(error = %err, "user count fetch failed");
            CountIntent::FetchFailed {
                message: err.to_string(),
            }
        }
    }
}
