//! Staged writes with atomic promotion.
//!
//! The staging file is created in the same directory as the canonical path
//! so that promotion is a same-filesystem rename. Uniqueness of the staging
//! name is delegated to [`tempfile::NamedTempFile`], which generates a
//! random suffix; two concurrent workers can never collide on a staging
//! path. If a [`StagedArtifact`] is dropped without being promoted, the
//! staging file is removed and the canonical path is left untouched.

use super::types::CacheError;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// A fully written staging file awaiting promotion.
///
/// Created by [`write_staged`]. The payload is flushed and synced to disk
/// before this value exists, so the only remaining step is the rename.
#[derive(Debug)]
#[must_use = "a staged artifact does nothing until promoted"]
pub struct StagedArtifact {
    file: NamedTempFile,
    canonical: PathBuf,
}

impl StagedArtifact {
    /// Path of the staging file.
    pub fn staging_path(&self) -> &Path {
        self.file.path()
    }

    /// Canonical path this artifact will be promoted to.
    pub fn canonical_path(&self) -> &Path {
        &self.canonical
    }

    /// Atomically replace the canonical path with the staged content.
    ///
    /// This is a single rename on the same filesystem. A concurrent reader
    /// of the canonical path observes either the previous complete artifact
    /// or this one, never an intermediate state. On error the staging file
    /// is removed and the canonical path is left as it was.
    pub fn promote(self) -> Result<PathBuf, CacheError> {
        let staging = self.file.path().to_path_buf();
        match self.file.persist(&self.canonical) {
            Ok(_) => {
                debug!(
                    staging = %staging.display(),
                    canonical = %self.canonical.display(),
                    "promoted staged artifact"
                );
                Ok(self.canonical)
            }
            Err(err) => {
                // persist() hands the temp file back; dropping it removes
                // the staging file.
                drop(err.file);
                Err(CacheError::Promote {
                    path: self.canonical,
                    source: err.error,
                })
            }
        }
    }

    /// Remove the staging file without touching the canonical path.
    pub fn discard(self) {
        debug!(staging = %self.file.path().display(), "discarding staged artifact");
        // Dropping the NamedTempFile deletes the staging file.
    }
}

/// Write `payload` to a uniquely named staging file next to `canonical`.
///
/// Parent directories are created as needed. The payload is fully flushed
/// and synced before returning, so a subsequent [`StagedArtifact::promote`]
/// can never expose a truncated file.
pub fn write_staged(canonical: &Path, payload: &[u8]) -> Result<StagedArtifact, CacheError> {
    let dir = canonical
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| CacheError::NoParentDirectory(canonical.to_path_buf()))?;
    std::fs::create_dir_all(dir)?;

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(payload)?;
    file.flush()?;
    file.as_file().sync_all()?;

    debug!(
        staging = %file.path().display(),
        bytes = payload.len(),
        "wrote staged artifact"
    );

    Ok(StagedArtifact {
        file,
        canonical: canonical.to_path_buf(),
    })
}

/// Stage and promote in one step.
///
/// Convenience for workers whose payload is already complete in memory.
pub fn publish(canonical: &Path, payload: &[u8]) -> Result<PathBuf, CacheError> {
    write_staged(canonical, payload)?.promote()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_staged_places_file_in_canonical_directory() {
        let dir = TempDir::new().unwrap();
        let canonical = dir.path().join("kspb").join("wx.json");

        let staged = write_staged(&canonical, b"{}").unwrap();

        assert_eq!(staged.staging_path().parent(), canonical.parent());
        assert!(staged.staging_path().exists());
        assert!(!canonical.exists());
    }

    #[test]
    fn test_promote_makes_content_canonical() {
        let dir = TempDir::new().unwrap();
        let canonical = dir.path().join("wx.json");

        let staged = write_staged(&canonical, b"first").unwrap();
        let staging_path = staged.staging_path().to_path_buf();
        let promoted = staged.promote().unwrap();

        assert_eq!(promoted, canonical);
        assert_eq!(std::fs::read(&canonical).unwrap(), b"first");
        assert!(!staging_path.exists());
    }

    #[test]
    fn test_promote_replaces_previous_generation() {
        let dir = TempDir::new().unwrap();
        let canonical = dir.path().join("current.jpg");

        publish(&canonical, b"generation-1").unwrap();
        publish(&canonical, b"generation-2").unwrap();

        assert_eq!(std::fs::read(&canonical).unwrap(), b"generation-2");
    }

    #[test]
    fn test_discard_removes_staging_and_preserves_canonical() {
        let dir = TempDir::new().unwrap();
        let canonical = dir.path().join("wx.json");
        publish(&canonical, b"old").unwrap();

        let staged = write_staged(&canonical, b"new").unwrap();
        let staging_path = staged.staging_path().to_path_buf();
        staged.discard();

        assert!(!staging_path.exists());
        assert_eq!(std::fs::read(&canonical).unwrap(), b"old");
    }

    #[test]
    fn test_drop_without_promote_cleans_up_staging_file() {
        let dir = TempDir::new().unwrap();
        let canonical = dir.path().join("wx.json");

        let staging_path = {
            let staged = write_staged(&canonical, b"payload").unwrap();
            staged.staging_path().to_path_buf()
        };

        assert!(!staging_path.exists());
        assert!(!canonical.exists());
    }

    #[test]
    fn test_concurrent_staging_paths_never_collide() {
        let dir = TempDir::new().unwrap();
        let canonical = dir.path().join("wx.json");

        let a = write_staged(&canonical, b"a").unwrap();
        let b = write_staged(&canonical, b"b").unwrap();

        assert_ne!(a.staging_path(), b.staging_path());

        a.promote().unwrap();
        b.promote().unwrap();
        assert_eq!(std::fs::read(&canonical).unwrap(), b"b");
    }

    #[test]
    fn test_write_staged_rejects_bare_path() {
        let err = write_staged(Path::new(""), b"x").unwrap_err();
        assert!(matches!(err, CacheError::NoParentDirectory(_)));
    }
}
