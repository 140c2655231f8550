//! Concrete refresh workers and the upstream source seam.
//!
//! A single pool instance carries both weather and camera jobs, so
//! [`RefreshWorker`] dispatches on the first job argument (`weather` or
//! `camera`) and job keys are namespaced by the caller (`kspb`,
//! `kspb/cam0`).

mod camera;
mod source;
mod weather;

pub use camera::CameraSnapshotWorker;
pub use source::{DataSource, FileSource, SourceError};
pub use weather::WeatherRefreshWorker;

use crate::pool::{Worker, WorkerContext, WorkerError};
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;

/// Variant tag for weather jobs.
pub const VARIANT_WEATHER: &str = "weather";

/// Variant tag for camera jobs.
pub const VARIANT_CAMERA: &str = "camera";

/// Dispatching worker routing jobs to the weather or camera worker.
///
/// Arguments: `[variant, station, ...]` where `variant` is
/// [`VARIANT_WEATHER`] or [`VARIANT_CAMERA`].
pub struct RefreshWorker {
    weather: WeatherRefreshWorker,
    camera: CameraSnapshotWorker,
}

impl RefreshWorker {
    /// Creates a dispatcher publishing into `cache_dir` from `source`.
    pub fn new(cache_dir: impl Into<PathBuf>, source: Arc<dyn DataSource>) -> Self {
        let cache_dir = cache_dir.into();
        Self {
            weather: WeatherRefreshWorker::new(cache_dir.clone(), Arc::clone(&source)),
            camera: CameraSnapshotWorker::new(cache_dir, source),
        }
    }
}

impl Worker for RefreshWorker {
    fn name(&self) -> &str {
        "Refresh"
    }

    fn run<'a>(
        &'a self,
        ctx: &'a WorkerContext,
        args: &'a [String],
    ) -> Pin<Box<dyn Future<Output = Result<(), WorkerError>> + Send + 'a>> {
        Box::pin(async move {
            let (variant, rest) = args
                .split_first()
                .ok_or_else(|| WorkerError::InvalidArgs("missing variant argument".into()))?;
            match variant.as_str() {
                VARIANT_WEATHER => self.weather.run(ctx, rest).await,
                VARIANT_CAMERA => self.camera.run(ctx, rest).await,
                other => Err(WorkerError::InvalidArgs(format!(
                    "unknown variant '{}'",
                    other
                ))),
            }
        })
    }
}
