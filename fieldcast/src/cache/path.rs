//! Canonical cache path construction.
//!
//! One canonical path exists per (station, variant). Station identifiers are
//! normalized to lowercase so that `KSPB` and `kspb` resolve to the same
//! cache slot.

use std::path::{Path, PathBuf};

/// Filename of the weather artifact within a station directory.
const WEATHER_FILENAME: &str = "wx.json";

/// Filename of the most-recent-frame alias within a camera directory.
const CURRENT_FRAME_FILENAME: &str = "current.jpg";

/// Normalize a station identifier for use in cache paths.
pub fn normalize_station(station: &str) -> String {
    station.trim().to_ascii_lowercase()
}

/// Directory holding all cached artifacts for a station.
pub fn station_directory(cache_dir: &Path, station: &str) -> PathBuf {
    cache_dir.join(normalize_station(station))
}

/// Canonical path for a station's weather artifact.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use fieldcast::cache::weather_path;
///
/// let path = weather_path(&PathBuf::from("/cache"), "KSPB");
/// assert_eq!(path, PathBuf::from("/cache/kspb/wx.json"));
/// ```
pub fn weather_path(cache_dir: &Path, station: &str) -> PathBuf {
    station_directory(cache_dir, station).join(WEATHER_FILENAME)
}

/// Directory holding frames for one camera of a station.
pub fn camera_directory(cache_dir: &Path, station: &str, camera: u8) -> PathBuf {
    station_directory(cache_dir, station).join(camera.to_string())
}

/// Canonical path for a timestamped camera frame.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use fieldcast::cache::camera_frame_path;
///
/// let path = camera_frame_path(&PathBuf::from("/cache"), "kspb", 0, 1700000000);
/// assert_eq!(path, PathBuf::from("/cache/kspb/0/1700000000_original.jpg"));
/// ```
pub fn camera_frame_path(cache_dir: &Path, station: &str, camera: u8, stamp: i64) -> PathBuf {
    camera_directory(cache_dir, station, camera).join(format!("{}_original.jpg", stamp))
}

/// Canonical path for the most-recent-frame alias of a camera.
pub fn camera_current_path(cache_dir: &Path, station: &str, camera: u8) -> PathBuf {
    camera_directory(cache_dir, station, camera).join(CURRENT_FRAME_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_station_lowercases_and_trims() {
        assert_eq!(normalize_station(" KSPB "), "kspb");
        assert_eq!(normalize_station("k1a5"), "k1a5");
    }

    #[test]
    fn test_weather_path_layout() {
        let path = weather_path(&PathBuf::from("/var/cache/fieldcast"), "KSPB");
        assert_eq!(path, PathBuf::from("/var/cache/fieldcast/kspb/wx.json"));
    }

    #[test]
    fn test_camera_frame_path_layout() {
        let path = camera_frame_path(&PathBuf::from("/cache"), "KSPB", 1, 1700000042);
        assert_eq!(path, PathBuf::from("/cache/kspb/1/1700000042_original.jpg"));
    }

    #[test]
    fn test_camera_current_alias_shares_directory_with_frames() {
        let cache = PathBuf::from("/cache");
        let frame = camera_frame_path(&cache, "kspb", 0, 1700000000);
        let current = camera_current_path(&cache, "kspb", 0);
        assert_eq!(frame.parent(), current.parent());
    }
}
