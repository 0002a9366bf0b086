//! Audio output.
//!
//! `AudioEngine` is the capability the playback coordinator drives; it never
//! reports a position, only whether it is still producing sound.
//! `RodioEngine` implements it on top of a `rodio` output stream.

mod player;
mod sink;
mod types;

pub use player::RodioEngine;
pub use types::{AudioEngine, EngineError, clamp_volume};

#[cfg(test)]
mod tests;
