//! Track model, path intake and track length lookup.
//!
//! Paths come in from the command line or the add prompts; `intake` filters
//! them to audio files and `length` answers "how long is this song" once per
//! path.

mod intake;
mod length;
mod model;

pub use intake::{collect_paths, expand_home, is_audio_file};
pub use length::{DurationProbe, LengthCache, LoftyProbe};
pub use model::Track;

#[cfg(test)]
mod tests;
