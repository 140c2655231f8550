//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file. These
//! are pure data types; parsing lives in [`super::parser`].

use super::defaults::{DEFAULT_CACHE_DIRECTORY, DEFAULT_LOG_LEVEL, DEFAULT_SPOOL_DIRECTORY};
use crate::pool::{DEFAULT_POOL_SIZE, DEFAULT_TIMEOUT_SECS};
use std::path::PathBuf;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    /// Scheduler settings
    pub scheduler: SchedulerSettings,
    /// Cache settings
    pub cache: CacheSettings,
    /// Data source settings
    pub source: SourceSettings,
    /// Monitored stations
    pub stations: StationsSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Scheduler configuration.
#[derive(Debug, Clone)]
pub struct SchedulerSettings {
    /// Maximum number of simultaneously running workers.
    /// Clamped to 1-32.
    pub pool_size: usize,
    /// Per-job timeout in seconds, measured from worker start.
    /// Clamped to 1-300.
    pub timeout_seconds: u64,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            pool_size: DEFAULT_POOL_SIZE,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Cache configuration.
#[derive(Debug, Clone)]
pub struct CacheSettings {
    /// Directory holding canonical artifacts, read concurrently by the
    /// display frontends.
    pub directory: PathBuf,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_CACHE_DIRECTORY),
        }
    }
}

/// Data source configuration.
#[derive(Debug, Clone)]
pub struct SourceSettings {
    /// Spool directory for the file-backed data source.
    pub spool_directory: PathBuf,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            spool_directory: PathBuf::from(DEFAULT_SPOOL_DIRECTORY),
        }
    }
}

/// One monitored station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationEntry {
    /// Station identifier (e.g. "kspb").
    pub ident: String,
    /// Number of webcams at this station.
    pub cameras: u8,
}

/// Stations to refresh.
#[derive(Debug, Clone, Default)]
pub struct StationsSettings {
    /// Stations in refresh order.
    pub entries: Vec<StationEntry>,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingSettings {
    /// Level filter when RUST_LOG is not set ("trace" .. "error").
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
