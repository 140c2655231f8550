//! The `refresh` command: one batch refresh run over all configured
//! stations and cameras.

use crate::error::CliError;
use clap::Args;
use fieldcast::config::ConfigFile;
use fieldcast::jobs::{FileSource, RefreshWorker, VARIANT_CAMERA, VARIANT_WEATHER};
use fieldcast::pool::{PoolConfig, WorkerPool};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Arguments for the refresh command.
#[derive(Debug, Args)]
pub struct RefreshArgs {
    /// Path to the config file (default: ~/.fieldcast/config.ini)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the cache directory from the config file
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Override the spool directory from the config file
    #[arg(long)]
    pub spool_dir: Option<PathBuf>,
}

/// Runs one refresh batch and prints the operator summary.
pub async fn execute(args: RefreshArgs) -> Result<(), CliError> {
    let config = match &args.config {
        Some(path) => ConfigFile::load_from(path)?,
        None => ConfigFile::load()?,
    };
    if config.stations.entries.is_empty() {
        return Err(CliError::NoStations);
    }

    let cache_dir = args.cache_dir.unwrap_or(config.cache.directory);
    let spool_dir = args.spool_dir.unwrap_or(config.source.spool_directory);

    let worker = RefreshWorker::new(cache_dir, Arc::new(FileSource::new(spool_dir)));
    let pool_config = PoolConfig::new(config.scheduler.pool_size, config.scheduler.timeout_seconds);
    let mut pool = WorkerPool::new(pool_config, Arc::new(worker));

    for station in &config.stations.entries {
        pool.add_job(
            station.ident.clone(),
            vec![VARIANT_WEATHER.to_string(), station.ident.clone()],
        );
        for camera in 0..station.cameras {
            pool.add_job(
                format!("{}/cam{}", station.ident, camera),
                vec![
                    VARIANT_CAMERA.to_string(),
                    station.ident.clone(),
                    camera.to_string(),
                ],
            );
        }
    }

    info!(
        stations = config.stations.entries.len(),
        pool_size = pool_config.pool_size,
        "starting refresh run"
    );
    let stats = pool.drain().await;

    // Pool-level summary is reserved for this controller; workers never
    // print it.
    println!("Refresh summary: {}", stats);
    println!("done");
    Ok(())
}
