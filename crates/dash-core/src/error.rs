use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by Media Dash.
#[derive(Error, Debug)]
pub enum DashError {
    /// The source file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV document could not be parsed.
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The source file's header row does not carry the expected columns.
    #[error("Malformed header in {path}: found [{found}]")]
    MalformedHeader { path: PathBuf, found: String },

    /// No usage CSV could be located.
    #[error("Data file not found: {0}")]
    DataPathNotFound(PathBuf),

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the dash crates.
pub type Result<T> = std::result::Result<T, DashError>;
