/// The playback state of the application.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Which glyph the play button shows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlayIcon {
    #[default]
    Play,
    Pause,
}

/// What the timer should do after a tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Fire again in one interval.
    Continue,
    /// Stop firing until playback starts again.
    Halt,
}
