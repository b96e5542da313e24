use std::path::Path;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file when `--log` is not given.
pub const LOG_ENV_VAR: &str = "REGION_SELECTOR_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default because stderr belongs to the TUI.
/// `explicit` (from `--log`) wins over the `REGION_SELECTOR_LOG` env var.
///
/// Log files get unique names so that concurrent instances don't clobber
/// each other: `{path}.{timestamp}.{pid}`
pub fn init_tracing(explicit: Option<&Path>) {
    let log_path = match explicit {
        Some(path) => path.display().to_string(),
        None => match std::env::var(LOG_ENV_VAR) {
            Ok(path) if !path.is_empty() => path,
            _ => return,
        },
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
