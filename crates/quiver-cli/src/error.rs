//! Error types for the Quiver CLI

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced at the command-line boundary
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No resolution strategy produced a runnable command.
    #[error("no executable command '{command}' found")]
    CommandNotFound { command: String },

    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Invalid runtime target moniker in config or environment.
    #[error("Invalid runtime target moniker: {moniker}")]
    InvalidRuntimeTarget { moniker: String },

    #[error("Could not determine a home directory for the package cache")]
    NoHomeDir,

    #[error("Failed to launch {executable}: {source}")]
    Launch {
        executable: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Resolver(#[from] quiver_resolver::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
