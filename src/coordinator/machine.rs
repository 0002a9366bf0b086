use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::audio::{AudioEngine, clamp_volume};
use crate::library::LengthCache;
use crate::playlist::Playlist;

use super::state::{PlayIcon, PlaybackState, TickOutcome};
use super::view::{View, elapsed_text};

/// Keeps the audio engine, the playlist selection and the displayed position
/// consistent with each other.
///
/// Every handler re-reads the live selection and slider value instead of
/// trusting anything captured earlier, since the user can edit the playlist
/// or drag the slider between ticks. Failures never propagate: handlers
/// either act or leave the state as it was.
pub struct PlaybackCoordinator<E: AudioEngine> {
    engine: E,
    lengths: LengthCache,
    playlist: Playlist,
    view: View,
    state: PlaybackState,
    scrubbing: bool,
    ticking: bool,
    /// Track the engine currently holds, if it was started by us.
    loaded: Option<PathBuf>,
}

impl<E: AudioEngine> PlaybackCoordinator<E> {
    pub fn new(mut engine: E, lengths: LengthCache, volume: f32) -> Self {
        let volume = clamp_volume(volume);
        engine.set_volume(volume);
        Self {
            engine,
            lengths,
            playlist: Playlist::new(),
            view: View {
                volume,
                ..View::default()
            },
            state: PlaybackState::Stopped,
            scrubbing: false,
            ticking: false,
            loaded: None,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn is_scrubbing(&self) -> bool {
        self.scrubbing
    }

    /// Whether the one-second tick should keep firing.
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    // ---- transport -------------------------------------------------------

    /// Play button: start the selection, or toggle pause.
    pub fn play_pressed(&mut self) {
        match self.state {
            PlaybackState::Playing => {
                self.engine.pause();
                self.state = PlaybackState::Paused;
                self.view.play_icon = PlayIcon::Play;
                debug!("paused");
            }
            PlaybackState::Paused => {
                self.engine.resume();
                self.state = PlaybackState::Playing;
                self.view.play_icon = PlayIcon::Pause;
                self.ticking = true;
                debug!("resumed");
            }
            PlaybackState::Stopped => {
                if let Some(index) = self.playlist.selected() {
                    self.start_track(index);
                }
            }
        }
        self.refresh_nav();
    }

    /// Stop button: silence, clear the selection and reset the display.
    ///
    /// The tick notices `Stopped` on its next wake and stops rescheduling.
    pub fn stop_pressed(&mut self) {
        self.engine.stop();
        self.loaded = None;
        self.scrubbing = false;
        self.playlist.clear_selection();
        self.view.slider_value = 0;
        self.view.status.clear();
        self.view.play_icon = PlayIcon::Play;
        self.state = PlaybackState::Stopped;
        self.refresh_nav();
        debug!("stopped");
    }

    /// Forward button: play the entry after the selection, if there is one.
    pub fn next_pressed(&mut self) {
        let Some(index) = self.playlist.selected() else {
            return;
        };
        if self.playlist.is_last(index) {
            return;
        }
        self.start_track(index + 1);
        self.refresh_nav();
    }

    /// Back button: play the entry before the selection, if there is one.
    pub fn previous_pressed(&mut self) {
        let Some(index) = self.playlist.selected() else {
            return;
        };
        if index == 0 {
            return;
        }
        self.start_track(index - 1);
        self.refresh_nav();
    }

    pub fn volume_changed(&mut self, volume: f32) {
        let volume = clamp_volume(volume);
        self.view.volume = volume;
        self.engine.set_volume(volume);
    }

    // ---- position slider -------------------------------------------------

    pub fn scrub_start(&mut self) {
        self.scrubbing = true;
    }

    /// Move the slider while it is held. The value is clamped to the slider range.
    pub fn scrub_drag(&mut self, value: u64) {
        self.view.slider_value = value.min(self.view.slider_max);
    }

    /// Slider released: seek the selected track to the slider value.
    ///
    /// An in-place seek is tried first when the engine still has the selected
    /// track queued; otherwise, or when it fails, the selected track is
    /// reloaded and started at the same second. If that fails too nothing
    /// else changes.
    pub fn scrub_release(&mut self) {
        self.scrubbing = false;

        let Some(path) = self.selected_path() else {
            return;
        };
        let target = self.view.slider_value;

        let seeked = self.loaded.as_deref() == Some(path.as_path())
            && self.engine.is_busy()
            && match self.engine.play(target) {
                Ok(()) => true,
                Err(e) => {
                    debug!(error = %e, target, "in-place seek failed, reloading");
                    false
                }
            };

        if !seeked {
            let reloaded = self
                .engine
                .load(&path)
                .and_then(|()| self.engine.play(target));
            if let Err(e) = reloaded {
                warn!(path = %path.display(), target, error = %e, "seek failed");
                self.loaded = None;
                return;
            }
            self.loaded = Some(path.clone());
        }

        self.view.slider_max = self.lengths.length_of(&path);
        self.state = PlaybackState::Playing;
        self.view.play_icon = PlayIcon::Pause;
        self.ticking = true;
        debug!(target, "seeked");
    }

    // ---- timer -----------------------------------------------------------

    /// One-second tick.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state == PlaybackState::Stopped {
            self.ticking = false;
            return TickOutcome::Halt;
        }

        // The entry may have been deleted since the last tick.
        let Some(index) = self.playlist.selected() else {
            return TickOutcome::Continue;
        };
        let Some(path) = self.playlist.path_at(index).map(PathBuf::from) else {
            return TickOutcome::Continue;
        };
        let length = self.lengths.length_of(&path);
        let current = self.view.slider_value;

        if self.scrubbing || self.state == PlaybackState::Paused {
            self.view.status = elapsed_text(current, length);
            return TickOutcome::Continue;
        }

        if current + 1 > length && length > 0 {
            if self.playlist.is_last(index) {
                info!("end of playlist");
                self.stop_pressed();
                self.ticking = false;
                return TickOutcome::Halt;
            }
            if !self.start_track(index + 1) {
                // The finished track cannot be followed; do not keep retrying.
                self.stop_pressed();
                self.ticking = false;
                return TickOutcome::Halt;
            }
            self.refresh_nav();
            return TickOutcome::Continue;
        }

        let next = (current + 1).min(length);
        self.view.slider_max = length;
        self.view.slider_value = next;
        self.view.status = elapsed_text(next, length);
        TickOutcome::Continue
    }

    // ---- playlist --------------------------------------------------------

    /// Listbox selection changed.
    pub fn select(&mut self, index: usize) {
        self.playlist.select(index);
        self.refresh_nav();
    }

    pub fn select_next_row(&mut self) {
        self.playlist.select_next_row();
        self.refresh_nav();
    }

    pub fn select_prev_row(&mut self) {
        self.playlist.select_prev_row();
        self.refresh_nav();
    }

    pub fn add_one(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        debug!(path = %path.display(), "added track");
        self.playlist.add_one(path);
        self.refresh_nav();
    }

    /// Append `paths` in order; the nav buttons are recomputed once at the end.
    pub fn add_many<I, P>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let before = self.playlist.len();
        self.playlist.add_many(paths);
        let added = self.playlist.len() - before;
        debug!(added, "added tracks");
        self.refresh_nav();
        added
    }

    /// Remove the selected entry. Playback of it, if any, is not interrupted.
    pub fn delete_selected(&mut self) {
        if let Some(track) = self.playlist.delete_selected() {
            debug!(path = %track.path.display(), "removed track");
        }
        self.refresh_nav();
    }

    pub fn delete_all(&mut self) {
        self.playlist.delete_all();
        self.refresh_nav();
    }

    // ---- helpers ---------------------------------------------------------

    fn selected_path(&self) -> Option<PathBuf> {
        self.playlist.selected_path().map(PathBuf::from)
    }

    /// Load and play entry `index` from the top. On engine failure nothing
    /// changes and `false` is returned.
    fn start_track(&mut self, index: usize) -> bool {
        let Some(path) = self.playlist.path_at(index).map(PathBuf::from) else {
            return false;
        };

        if let Err(e) = self.engine.load(&path).and_then(|()| self.engine.play(0)) {
            warn!(path = %path.display(), error = %e, "failed to start track");
            return false;
        }

        let length = self.lengths.length_of(&path);
        self.loaded = Some(path.clone());
        self.playlist.select(index);
        self.view.slider_max = length;
        self.view.slider_value = 0;
        self.view.status.clear();
        self.view.play_icon = PlayIcon::Pause;
        self.state = PlaybackState::Playing;
        self.ticking = true;
        info!(index, path = %path.display(), "playing");
        true
    }

    fn refresh_nav(&mut self) {
        self.view.nav = self.playlist.nav_buttons();
    }
}
