//! Artifact cache: canonical path layout and atomic publication.
//!
//! Workers never write a canonical cache path directly. All output goes
//! through [`staging::write_staged`] followed by [`StagedArtifact::promote`],
//! which replaces the canonical file in a single same-filesystem rename.
//! Readers take no lock; they rely entirely on rename atomicity and will
//! observe either the previous complete artifact or the new one, never a
//! partial write.

mod path;
mod staging;
mod types;

pub use path::{
    camera_current_path, camera_directory, camera_frame_path, normalize_station, station_directory,
    weather_path,
};
pub use staging::{publish, write_staged, StagedArtifact};
pub use types::CacheError;
