use crate::api::ApiClient;
use crate::config::Config;
use crate::fetch;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

/// Capacity of the refresh command channel. The worker spawns a fetch as
/// soon as a command arrives, so the buffer only absorbs key-repeat bursts.
const FETCH_COMMAND_BUFFER: usize = 8;

pub fn run(config: Config) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let client = ApiClient::new(&config.api.base_url);
    info!(endpoint = client.endpoint(), "starting user-count screen");

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_ms);
    let events = EventHandler::new(tick_rate);

    let mut app = App::new(client.endpoint());
    let (fetch_tx, fetch_rx) = mpsc::channel(FETCH_COMMAND_BUFFER);
    runtime.spawn(fetch::run(client, fetch_rx, events.sender()));
    app.set_fetch_sender(fetch_tx);

    // The screen fetches once as soon as it appears; afterwards only the
    // refresh key triggers fetches.
    app.request_refresh();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {
                // Next draw reflows against the new frame size.
            }
            Ok(AppEvent::Count(intent)) => app.dispatch_count(intent),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    // Drops in-flight fetches without waiting; their results are not
    // observable once the screen is gone.
    runtime.shutdown_background();
    drop(guard);
    Ok(())
}
