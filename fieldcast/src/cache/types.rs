//! Error types for the artifact cache.

use std::path::PathBuf;
use thiserror::Error;

/// Cache-related errors.
#[derive(Debug, Error)]
pub enum CacheError {
    /// I/O error while writing a staged artifact
    #[error("Cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Atomic replace of the canonical path failed
    #[error("Failed to promote staged artifact to '{path}': {source}")]
    Promote {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Canonical path has no parent directory to stage into
    #[error("Canonical path '{0}' has no parent directory")]
    NoParentDirectory(PathBuf),
}
