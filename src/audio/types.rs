//! The engine capability and its error type.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors reported by an [`AudioEngine`].
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("audio output unavailable: {0}")]
    Output(String),

    #[error("failed to open {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("no track loaded")]
    NotLoaded,

    #[error("seek failed: {0}")]
    Seek(String),
}

/// Opaque audio output.
pub trait AudioEngine {
    /// Make `path` the current track. Fails if it cannot be opened or decoded.
    fn load(&mut self, path: &Path) -> Result<(), EngineError>;

    /// Start the loaded track at `start_secs`. When the track is already
    /// queued this seeks in place.
    fn play(&mut self, start_secs: u64) -> Result<(), EngineError>;

    fn pause(&mut self);

    fn resume(&mut self);

    fn stop(&mut self);

    fn set_volume(&mut self, volume: f32);

    /// Whether the engine still has audio queued for the current track.
    fn is_busy(&self) -> bool;
}

/// Clamp a volume to `0.0..=1.0`, mapping NaN to silence.
pub fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        0.0
    } else {
        volume.clamp(0.0, 1.0)
    }
}
