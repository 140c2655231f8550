//! Default values and well-known paths for the config file.

use std::path::PathBuf;

/// Config file name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ini";

/// Default cache directory (relative to the working directory).
pub const DEFAULT_CACHE_DIRECTORY: &str = "cache";

/// Default spool directory for the file-backed data source.
pub const DEFAULT_SPOOL_DIRECTORY: &str = "spool";

/// Default log level filter.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Path to the config directory (`~/.fieldcast`).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".fieldcast")
}

/// Path to the config file (`~/.fieldcast/config.ini`).
pub fn config_file_path() -> PathBuf {
    config_directory().join(CONFIG_FILE_NAME)
}
