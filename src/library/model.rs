use std::path::{Path, PathBuf};

/// A playlist entry: what the list shows and which file it plays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub display: String,
    pub path: PathBuf,
}

impl Track {
    /// Build a track whose display name is the file name without its extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display = display_name(&path);
        Self { display, path }
    }
}

fn display_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}
