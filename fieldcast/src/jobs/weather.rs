//! Weather refresh worker.

use super::source::DataSource;
use crate::cache::{weather_path, write_staged};
use crate::pool::{Worker, WorkerContext, WorkerError};
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;
use tracing::info;

/// Fetches a station's weather payload and publishes it to the station's
/// canonical `wx.json` slot.
///
/// Arguments: `[station]`.
pub struct WeatherRefreshWorker {
    cache_dir: PathBuf,
    source: Arc<dyn DataSource>,
}

impl WeatherRefreshWorker {
    /// Creates a worker publishing into `cache_dir`.
    pub fn new(cache_dir: impl Into<PathBuf>, source: Arc<dyn DataSource>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            source,
        }
    }

    async fn refresh(&self, ctx: &WorkerContext, station: &str) -> Result<(), WorkerError> {
        let payload = self.source.fetch_weather(station).await?;

        // The fetch may have outlived a timeout race; skip publishing work
        // the controller has already discarded.
        if ctx.is_cancelled() {
            return Err(WorkerError::Cancelled);
        }

        let canonical = weather_path(&self.cache_dir, station);
        let staged = write_staged(&canonical, &payload)?;
        let promoted = staged.promote()?;

        info!(
            key = %ctx.key(),
            path = %promoted.display(),
            bytes = payload.len(),
            "weather artifact published"
        );
        Ok(())
    }
}

impl Worker for WeatherRefreshWorker {
    fn name(&self) -> &str {
        "WeatherRefresh"
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
            self.refresh(ctx, station).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::FileSource;
    use crate::pool::{PoolConfig, WorkerPool};
    use tempfile::TempDir;

    fn seed_spool(spool: &TempDir, station: &str, payload: &[u8]) {
        let dir = spool.path().join(station);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("wx.json"), payload).unwrap();
    }

    #[tokio::test]
    async fn test_weather_refresh_publishes_canonical_artifact() {
        let spool = TempDir::new().unwrap();
        let cache = TempDir::new().unwrap();
        seed_spool(&spool, "kspb", b"{\"wind\":\"240@8\"}");

        let worker = WeatherRefreshWorker::new(
            cache.path(),
            Arc::new(FileSource::new(spool.path())),
        );
        let mut pool = WorkerPool::new(PoolConfig::default(), Arc::new(worker));
        pool.add_job("kspb", vec!["kspb".into()]);
        let stats = pool.drain().await;

        assert_eq!(stats.completed, 1);
        let canonical = weather_path(cache.path(), "kspb");
        assert_eq!(std::fs::read(canonical).unwrap(), b"{\"wind\":\"240@8\"}");
    }

    #[tokio::test]
    async fn test_missing_source_counts_as_failure_and_leaves_no_artifact() {
        let spool = TempDir::new().unwrap();
        let cache = TempDir::new().unwrap();

        let worker = WeatherRefreshWorker::new(
            cache.path(),
            Arc::new(FileSource::new(spool.path())),
        );
        let mut pool = WorkerPool::new(PoolConfig::default(), Arc::new(worker));
        pool.add_job("kspb", vec!["kspb".into()]);
        let stats = pool.drain().await;

        assert_eq!(stats.failed, 1);
        assert!(!weather_path(cache.path(), "kspb").exists());
    }

    #[tokio::test]
    async fn test_missing_station_argument_fails_fast() {
        let spool = TempDir::new().unwrap();
        let cache = TempDir::new().unwrap();

        let worker = WeatherRefreshWorker::new(
            cache.path(),
            Arc::new(FileSource::new(spool.path())),
        );
        let mut pool = WorkerPool::new(PoolConfig::default(), Arc::new(worker));
        pool.add_job("broken", vec![]);
        let stats = pool.drain().await;

        assert_eq!(stats.failed, 1);
    }
}
