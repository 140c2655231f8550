//! Configuration loading for Fieldcast.
//!
//! User configuration lives in `~/.fieldcast/config.ini`. Each `[section]`
//! maps to one settings struct; missing sections fall back to defaults and
//! numeric values are clamped to documented sane ranges.

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::{
    config_directory, config_file_path, CONFIG_FILE_NAME, DEFAULT_CACHE_DIRECTORY,
    DEFAULT_LOG_LEVEL, DEFAULT_SPOOL_DIRECTORY,
};
pub use file::ConfigFileError;
pub use settings::{
    CacheSettings, ConfigFile, LoggingSettings, SchedulerSettings, SourceSettings, StationEntry,
    StationsSettings,
};
pub use writer::to_config_string;
