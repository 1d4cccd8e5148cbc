use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// Ensure the standard `~/.media-dash/` directory hierarchy exists.
///
/// Creates the following directories if absent (including any missing parents):
/// - `~/.media-dash/`
/// - `~/.media-dash/logs/`
/// - `~/.media-dash/exports/`
pub fn ensure_directories() -> anyhow::Result<()> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let dash_dir = home.join(".media-dash");
    std::fs::create_dir_all(&dash_dir)?;
    std::fs::create_dir_all(dash_dir.join("logs"))?;
    std::fs::create_dir_all(dash_dir.join("exports"))?;
    Ok(())
}

/// Default directory for exported CSV files when `--export-dir` is absent.
pub fn default_export_dir() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".media-dash").join("exports")
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"info"` if the level string is not recognised.
///
/// The `log_file` parameter is accepted for forward-compatibility but file
/// logging is not yet wired – all output currently goes to stderr.
pub fn setup_logging(log_level: &str, _log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let upper = log_level.to_uppercase();
    let normalised = match upper.as_str() {
        "DEBUG" | "CRITICAL" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" => "error",
        other => other,
    };

    let filter = EnvFilter::try_new(normalised).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer().with_target(false).with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

// ── Data-path discovery ────────────────────────────────────────────────────────

/// Attempt to locate the usage CSV on the local system.
///
/// Checks the following paths in order and returns the first that exists:
/// 1. `./data.csv`
/// 2. `~/.media-dash/data.csv`
///
/// Returns `None` when neither path exists.
pub fn discover_data_path() -> Option<PathBuf> {
    let mut candidates = vec![PathBuf::from("data.csv")];
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".media-dash").join("data.csv"));
    }
    candidates.into_iter().find(|p| p.exists())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
