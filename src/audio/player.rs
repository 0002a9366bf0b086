use std::path::{Path, PathBuf};
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, info};

use super::sink::{create_sink_at, decode};
use super::types::{AudioEngine, EngineError, clamp_volume};

/// [`AudioEngine`] backed by the default `rodio` output device.
///
/// `load` only validates and remembers the file; the sink is built on the
/// first `play` so the start offset can be applied while decoding.
pub struct RodioEngine {
    stream: OutputStream,
    loaded: Option<PathBuf>,
    sink: Option<Sink>,
    volume: f32,
}

impl RodioEngine {
    /// Open the default output device.
    pub fn new(volume: f32) -> Result<Self, EngineError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| EngineError::Output(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
        // but noisy for a TUI app.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            loaded: None,
            sink: None,
            volume: clamp_volume(volume),
        })
    }

    fn drop_sink(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
    }
}

impl AudioEngine for RodioEngine {
    fn load(&mut self, path: &Path) -> Result<(), EngineError> {
        decode(path)?;
        self.drop_sink();
        self.loaded = Some(path.to_path_buf());
        info!(path = %path.display(), "loaded track");
        Ok(())
    }

    fn play(&mut self, start_secs: u64) -> Result<(), EngineError> {
        let start = Duration::from_secs(start_secs);

        if let Some(sink) = self.sink.as_ref() {
            if sink.empty() {
                return Err(EngineError::Seek("track already finished".to_string()));
            }
            sink.try_seek(start)
                .map_err(|e| EngineError::Seek(e.to_string()))?;
            sink.play();
            debug!(start_secs, "seeked in place");
            return Ok(());
        }

        let path = self.loaded.as_deref().ok_or(EngineError::NotLoaded)?;
        let sink = create_sink_at(&self.stream, path, start)?;
        sink.set_volume(self.volume);
        sink.play();
        self.sink = Some(sink);
        debug!(path = %path.display(), start_secs, "started playback");
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(s) = self.sink.as_ref() {
            s.pause();
        }
    }

    fn resume(&mut self) {
        if let Some(s) = self.sink.as_ref() {
            s.play();
        }
    }

    fn stop(&mut self) {
        self.drop_sink();
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = clamp_volume(volume);
        if let Some(s) = self.sink.as_ref() {
            s.set_volume(self.volume);
        }
    }

    fn is_busy(&self) -> bool {
        self.sink.as_ref().is_some_and(|s| !s.empty())
    }
}
