//! Upstream data source seam.
//!
//! The actual weather-provider and camera-capture protocols live outside
//! this crate; workers only see the [`DataSource`] trait. [`FileSource`]
//! reads payloads from a local spool directory and is used by tests and
//! offline demo setups.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use thiserror::Error;

/// Errors from an upstream data source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Source has no payload for the requested station/camera
    #[error("No data available for '{station}': {detail}")]
    NotAvailable { station: String, detail: String },

    /// I/O error while reading the payload
    #[error("Source I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<SourceError> for crate::pool::WorkerError {
    fn from(err: SourceError) -> Self {
        Self::Fetch(Box::new(err))
    }
}

/// Provider of raw refresh payloads.
///
/// One fetch per worker invocation; implementations must not cache across
/// calls (workers are stateless by contract).
pub trait DataSource: Send + Sync + 'static {
    /// Fetches the current weather payload for a station.
    fn fetch_weather<'a>(
        &'a self,
        station: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>, SourceError>> + Send + 'a>>;

    /// Fetches the current frame for one of a station's cameras.
    fn fetch_frame<'a>(
        &'a self,
        station: &'a str,
        camera: u8,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>, SourceError>> + Send + 'a>>;
}

/// Data source backed by a local spool directory.
///
/// Layout: `<spool>/<station>/wx.json` and `<spool>/<station>/cam<idx>.jpg`.
pub struct FileSource {
    spool_dir: PathBuf,
}

impl FileSource {
    /// Creates a source reading from `spool_dir`.
    pub fn new(spool_dir: impl Into<PathBuf>) -> Self {
        Self {
            spool_dir: spool_dir.into(),
        }
    }

    fn station_file(&self, station: &str, filename: &str) -> PathBuf {
        self.spool_dir
            .join(crate::cache::normalize_station(station))
            .join(filename)
    }
}

impl DataSource for FileSource {
    fn fetch_weather<'a>(
        &'a self,
        station: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            let path = self.station_file(station, "wx.json");
            tokio::fs::read(&path).await.map_err(|err| {
                if err.kind() == std::io::ErrorKind::NotFound {
                    SourceError::NotAvailable {
                        station: station.to_string(),
                        detail: format!("no spool file at {}", path.display()),
                    }
                } else {
                    SourceError::Io(err)
                }
            })
        })
    }

    fn fetch_frame<'a>(
        &'a self,
        station: &'a str,
        camera: u8,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            let path = self.station_file(station, &format!("cam{}.jpg", camera));
            tokio::fs::read(&path).await.map_err(|err| {
                if err.kind() == std::io::ErrorKind::NotFound {
                    SourceError::NotAvailable {
                        station: station.to_string(),
                        detail: format!("no spool file at {}", path.display()),
                    }
                } else {
                    SourceError::Io(err)
                }
            })
        })
    }
}
