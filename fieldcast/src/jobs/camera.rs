//! Camera snapshot worker.

use super::source::DataSource;
use crate::cache::{camera_current_path, camera_frame_path, write_staged};
use crate::pool::{Worker, WorkerContext, WorkerError};
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;
use tracing::info;

/// Fetches a camera frame and publishes both the timestamped original and
/// the `current.jpg` alias, each through its own staged file.
///
/// Arguments: `[station, camera_index]`.
pub struct CameraSnapshotWorker {
    cache_dir: PathBuf,
    source: Arc<dyn DataSource>,
}

impl CameraSnapshotWorker {
    /// Creates a worker publishing into `cache_dir`.
    pub fn new(cache_dir: impl Into<PathBuf>, source: Arc<dyn DataSource>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            source,
        }
    }

    async fn snapshot(
        &self,
        ctx: &WorkerContext,
        station: &str,
        camera: u8,
    ) -> Result<(), WorkerError> {
        let frame = self.source.fetch_frame(station, camera).await?;

        if ctx.is_cancelled() {
            return Err(WorkerError::Cancelled);
        }

        let stamp = chrono::Utc::now().timestamp();
        let original = camera_frame_path(&self.cache_dir, station, camera, stamp);
        write_staged(&original, &frame)?.promote()?;

        // The alias is a second independent promotion so a reader of
        // current.jpg also never sees a partial frame.
        let current = camera_current_path(&self.cache_dir, station, camera);
        write_staged(&current, &frame)?.promote()?;

        info!(
            key = %ctx.key(),
            original = %original.display(),
            bytes = frame.len(),
            "camera frame published"
        );
        Ok(())
    }
}

impl Worker for CameraSnapshotWorker {
    fn name(&self) -> &str {
        "CameraSnapshot"
    }

    fn run<'a>(
        &'a self,
        ctx: &'a WorkerContext,
        args: &'a [String],
    ) -> Pin<Box<dyn Future<Output = Result<(), WorkerError>> + Send + 'a>> {
        Box::pin(async move {
            let station = args
                .first()
                .ok_or_else(|| WorkerError::InvalidArgs("missing station argument".into()))?;
            let camera: u8 = args
                .get(1)
                .and_then(|a| a.parse().ok())
                .ok_or_else(|| WorkerError::InvalidArgs("missing or invalid camera index".into()))?;
            self.snapshot(ctx, station, camera).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::camera_directory;
    use crate::jobs::FileSource;
    use crate::pool::{PoolConfig, WorkerPool};
    use tempfile::TempDir;

    fn seed_frame(spool: &TempDir, station: &str, camera: u8, payload: &[u8]) {
        let dir = spool.path().join(station);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(format!("cam{}.jpg", camera)), payload).unwrap();
    }

    #[tokio::test]
    async fn test_snapshot_publishes_original_and_current_alias() {
        let spool = TempDir::new().unwrap();
        let cache = TempDir::new().unwrap();
        seed_frame(&spool, "kspb", 0, b"frame-bytes");

        let worker = CameraSnapshotWorker::new(
            cache.path(),
            Arc::new(FileSource::new(spool.path())),
        );
        let mut pool = WorkerPool::new(PoolConfig::default(), Arc::new(worker));
        pool.add_job("kspb/cam0", vec!["kspb".into(), "0".into()]);
        let stats = pool.drain().await;

        assert_eq!(stats.completed, 1);

        let current = camera_current_path(cache.path(), "kspb", 0);
        assert_eq!(std::fs::read(&current).unwrap(), b"frame-bytes");

        // Exactly one timestamped original next to the alias.
        let originals: Vec<_> = std::fs::read_dir(camera_directory(cache.path(), "kspb", 0))
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with("_original.jpg"))
            .collect();
        assert_eq!(originals.len(), 1);
        assert_eq!(std::fs::read(originals[0].path()).unwrap(), b"frame-bytes");
    }

    #[tokio::test]
    async fn test_invalid_camera_index_fails() {
        let spool = TempDir::new().unwrap();
        let cache = TempDir::new().unwrap();

        let worker = CameraSnapshotWorker::new(
            cache.path(),
            Arc::new(FileSource::new(spool.path())),
        );
        let mut pool = WorkerPool::new(PoolConfig::default(), Arc::new(worker));
        pool.add_job("kspb/cam-bad", vec!["kspb".into(), "many".into()]);
        let stats = pool.drain().await;

        assert_eq!(stats.failed, 1);
    }
}
