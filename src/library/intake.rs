use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::LibrarySettings;

/// Return true if `path` carries one of the configured audio extensions.
pub fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Turn prompt input into a path, expanding a leading `~/` to `$HOME`.
pub fn expand_home(input: &str) -> PathBuf {
    let input = input.trim();
    if input == "~" {
        if let Some(home) = env::var_os("HOME") {
            return PathBuf::from(home);
        }
    }
    if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = env::var_os("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    PathBuf::from(input)
}

/// Resolve `path` into the audio files it names.
///
/// A file yields itself when it has an audio extension. A directory yields its
/// audio files sorted by path, descending into subdirectories only when
/// `settings.recursive` is set. Anything else yields nothing.
pub fn collect_paths(path: &Path, settings: &LibrarySettings) -> Vec<PathBuf> {
    if path.is_file() {
        if is_audio_file(path, settings) {
            return vec![path.to_path_buf()];
        }
        warn!(path = %path.display(), "not an accepted audio file");
        return Vec::new();
    }

    if !path.is_dir() {
        warn!(path = %path.display(), "no such file or directory");
        return Vec::new();
    }

    let mut walker = WalkDir::new(path).follow_links(settings.follow_links);
    if !settings.recursive {
        walker = walker.max_depth(1);
    }

    let mut found: Vec<PathBuf> = walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
        .map(|e| e.into_path())
        .filter(|p| p.is_file() && is_audio_file(p, settings))
        .collect();

    found.sort();
    debug!(dir = %path.display(), count = found.len(), "expanded directory");
    found
}
