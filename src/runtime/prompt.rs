use std::path::PathBuf;

use tracing::warn;

use crate::config::LibrarySettings;
use crate::library::{collect_paths, expand_home, is_audio_file};

/// Which add action an open prompt performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    AddOne,
    AddMany,
}

/// Path entry standing in for a file picker.
#[derive(Debug)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

impl Prompt {
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            input: String::new(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            PromptKind::AddOne => "add one song: file path",
            PromptKind::AddMany => "add many songs: directory or file path",
        }
    }

    /// Resolve the input into the paths to add. Empty input adds nothing.
    pub fn resolve(&self, settings: &LibrarySettings) -> Vec<PathBuf> {
        if self.input.trim().is_empty() {
            return Vec::new();
        }
        let path = expand_home(&self.input);
        match self.kind {
            PromptKind::AddOne => {
                if path.is_file() && is_audio_file(&path, settings) {
                    vec![path]
                } else {
                    warn!(path = %path.display(), "not an accepted audio file");
                    Vec::new()
                }
            }
            PromptKind::AddMany => collect_paths(&path, settings),
        }
    }
}
