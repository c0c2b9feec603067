use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_PATH_ENV: &str = "USERTALLY_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default: the TUI owns the terminal, and log lines
/// on stdout would corrupt the display. Set `USERTALLY_LOG` to a file path
/// to enable a tracing file layer; `RUST_LOG` controls the filter (default
/// `info`).
///
/// Log files are created with unique names so simultaneous instances never
/// interleave writes: `{path}.{timestamp}.{pid}`
pub fn init_tracing() {
    let Ok(log_path) = std::env::var(LOG_PATH_ENV) else {
        return;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{log_path}.{timestamp}.{pid}");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {unique_path}");
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
