use std::collections::HashMap;
use std::path::{Path, PathBuf};

use lofty::prelude::AudioFile;
use tracing::{debug, warn};

/// Reads a track's duration in whole seconds.
pub trait DurationProbe {
    /// Return the length of `path` in seconds, or `None` when it cannot be read.
    fn probe(&self, path: &Path) -> Option<u64>;
}

/// Duration probe backed by the file's audio properties.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyProbe;

impl DurationProbe for LoftyProbe {
    fn probe(&self, path: &Path) -> Option<u64> {
        match lofty::read_from_path(path) {
            Ok(tagged) => Some(tagged.properties().duration().as_secs()),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read track length");
                None
            }
        }
    }
}

/// Lazily filled map from path to length in seconds.
///
/// Entries are never invalidated; an unreadable file is remembered as `0`.
pub struct LengthCache {
    probe: Box<dyn DurationProbe>,
    lengths: HashMap<PathBuf, u64>,
}

impl LengthCache {
    pub fn new(probe: impl DurationProbe + 'static) -> Self {
        Self {
            probe: Box::new(probe),
            lengths: HashMap::new(),
        }
    }

    /// Length of `path` in seconds, probing the file on first access.
    pub fn length_of(&mut self, path: &Path) -> u64 {
        if let Some(&secs) = self.lengths.get(path) {
            return secs;
        }
        let secs = self.probe.probe(path).unwrap_or(0);
        debug!(path = %path.display(), secs, "cached track length");
        self.lengths.insert(path.to_path_buf(), secs);
        secs
    }
}
