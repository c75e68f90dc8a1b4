//! Error types for quiver-resolver

use std::path::PathBuf;

/// Result type for quiver-resolver operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during tool command resolution.
///
/// Non-applicability (no command name, no project descriptor, package absent
/// from the restore graph) is not an error; resolvers report it as `Ok(None)`
/// so callers can try the next resolution strategy.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The restore graph references the package but no candidate package
    /// root contains its entry assembly.
    #[error("Could not find command assemblies for package '{package}'.")]
    AssembliesNotFound { package: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The runtime dependency manifest could not be serialized.
    #[error("Failed to serialize runtime dependency manifest: {0}")]
    ManifestSerialize(#[from] serde_json::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
