//! Playback coordination.
//!
//! The coordinator owns the playlist, the render model the UI draws from and
//! the audio engine. UI events come in as method calls; a one-second tick
//! advances the displayed position and detects the end of a track.

mod machine;
mod state;
mod view;

pub use machine::PlaybackCoordinator;
pub use state::{PlayIcon, PlaybackState, TickOutcome};
pub use view::{View, format_mmss};
