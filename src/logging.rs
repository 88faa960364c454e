use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Initialize tracing with optional file output.
///
/// Logging is off by default: the TUI owns stdout, so log lines there would
/// corrupt the display. Set `VITRINE_LOG` to a file path to enable it; the
/// actual file gets a `.{pid}` suffix so concurrent instances don't clobber
/// each other's output.
pub fn init_tracing() {
    let Some(log_path) = std::env::var("VITRINE_LOG").ok() else {
        return;
    };

    let unique_path = PathBuf::from(format!("{}.{}", log_path, std::process::id()));
    let file = match std::fs::File::create(&unique_path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: failed to create log file {}: {err}", unique_path.display());
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true)
        .init();
}
