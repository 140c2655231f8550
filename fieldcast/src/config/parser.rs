//! INI parsing for the config file.

use super::file::ConfigFileError;
use super::settings::{
    CacheSettings, ConfigFile, LoggingSettings, SchedulerSettings, SourceSettings, StationEntry,
    StationsSettings,
};
use crate::pool::{MAX_POOL_SIZE, MAX_TIMEOUT_SECS, MIN_POOL_SIZE, MIN_TIMEOUT_SECS};
use ini::Ini;
use std::path::PathBuf;
use tracing::warn;

/// Parses a loaded INI document into a [`ConfigFile`].
///
/// Missing sections and keys fall back to defaults. Numeric values outside
/// their documented ranges are clamped with a warning rather than rejected;
/// only unparseable values are errors.
pub fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    Ok(ConfigFile {
        scheduler: parse_scheduler(ini)?,
        cache: parse_cache(ini),
        source: parse_source(ini),
        stations: parse_stations(ini)?,
        logging: parse_logging(ini),
    })
}

fn parse_scheduler(ini: &Ini) -> Result<SchedulerSettings, ConfigFileError> {
    let mut settings = SchedulerSettings::default();
    let Some(section) = ini.section(Some("scheduler")) else {
        return Ok(settings);
    };

    if let Some(value) = section.get("pool_size") {
        let parsed: usize = value
            .parse()
            .map_err(|_| invalid("scheduler", "pool_size", value, "expected an integer"))?;
        settings.pool_size = clamp_with_warning("pool_size", parsed, MIN_POOL_SIZE, MAX_POOL_SIZE);
    }

    if let Some(value) = section.get("timeout_seconds") {
        let parsed: u64 = value
            .parse()
            .map_err(|_| invalid("scheduler", "timeout_seconds", value, "expected an integer"))?;
        settings.timeout_seconds =
            clamp_with_warning("timeout_seconds", parsed, MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS);
    }

    Ok(settings)
}

fn parse_cache(ini: &Ini) -> CacheSettings {
    let mut settings = CacheSettings::default();
    if let Some(value) = ini
        .section(Some("cache"))
        .and_then(|s| s.get("directory"))
    {
        settings.directory = PathBuf::from(value);
    }
    settings
}

fn parse_source(ini: &Ini) -> SourceSettings {
    let mut settings = SourceSettings::default();
    if let Some(value) = ini
        .section(Some("source"))
        .and_then(|s| s.get("spool_directory"))
    {
        settings.spool_directory = PathBuf::from(value);
    }
    settings
}

fn parse_stations(ini: &Ini) -> Result<StationsSettings, ConfigFileError> {
    let mut settings = StationsSettings::default();
    let Some(value) = ini.section(Some("stations")).and_then(|s| s.get("list")) else {
        return Ok(settings);
    };

    for raw in value.split(',') {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        settings.entries.push(parse_station_entry(raw, value)?);
    }
    Ok(settings)
}

/// Parses one `ident[:cameras]` list element.
fn parse_station_entry(raw: &str, full_value: &str) -> Result<StationEntry, ConfigFileError> {
    match raw.split_once(':') {
        None => Ok(StationEntry {
            ident: raw.to_ascii_lowercase(),
            cameras: 0,
        }),
        Some((ident, cameras)) => {
            let cameras: u8 = cameras.trim().parse().map_err(|_| {
                invalid(
                    "stations",
                    "list",
                    full_value,
                    &format!("invalid camera count in '{}'", raw),
                )
            })?;
            Ok(StationEntry {
                ident: ident.trim().to_ascii_lowercase(),
                cameras,
            })
        }
    }
}

fn parse_logging(ini: &Ini) -> LoggingSettings {
    let mut settings = LoggingSettings::default();
    if let Some(value) = ini.section(Some("logging")).and_then(|s| s.get("level")) {
        settings.level = value.to_string();
    }
    settings
}

fn clamp_with_warning<T: Ord + Copy + std::fmt::Display>(key: &str, value: T, min: T, max: T) -> T {
    let clamped = value.clamp(min, max);
    if clamped != value {
        warn!(%key, %value, %clamped, "config value out of range, clamping");
    }
    clamped
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
