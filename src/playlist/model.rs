//! The `Playlist` model.
//!
//! Display names and paths live together in one `Track`, so every mutation
//! keeps them index-aligned. The selection is cleared whenever the entry it
//! points at goes away.

use std::path::{Path, PathBuf};

use crate::library::Track;

use super::nav::NavButtons;

#[derive(Debug, Default)]
pub struct Playlist {
    tracks: Vec<Track>,
    selected: Option<usize>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Current selection, re-validated against the current length.
    pub fn selected(&self) -> Option<usize> {
        self.selected.filter(|&i| i < self.tracks.len())
    }

    /// Path of the selected track, if the selection is still in range.
    pub fn selected_path(&self) -> Option<&Path> {
        self.selected()
            .and_then(|i| self.tracks.get(i))
            .map(|t| t.path.as_path())
    }

    pub fn path_at(&self, index: usize) -> Option<&Path> {
        self.tracks.get(index).map(|t| t.path.as_path())
    }

    /// Select `index`; out-of-range indices leave the selection untouched.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.tracks.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.tracks.len()
    }

    /// Append one track.
    pub fn add_one(&mut self, path: impl Into<PathBuf>) {
        self.tracks.push(Track::from_path(path));
    }

    /// Append tracks in input order.
    pub fn add_many<I, P>(&mut self, paths: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.tracks.extend(paths.into_iter().map(Track::from_path));
    }

    /// Remove the selected track. Returns the removed entry, or `None` when
    /// nothing was selected.
    pub fn delete_selected(&mut self) -> Option<Track> {
        let index = self.selected()?;
        self.selected = None;
        Some(self.tracks.remove(index))
    }

    pub fn delete_all(&mut self) {
        self.tracks.clear();
        self.selected = None;
    }

    /// Move the selection down one row, wrapping to the top.
    pub fn select_next_row(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        self.selected = Some(match self.selected() {
            Some(i) if i + 1 < self.tracks.len() => i + 1,
            Some(_) => 0,
            None => 0,
        });
    }

    /// Move the selection up one row, wrapping to the bottom.
    pub fn select_prev_row(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        let last = self.tracks.len() - 1;
        self.selected = Some(match self.selected() {
            Some(0) | None => last,
            Some(i) => i - 1,
        });
    }

    pub fn nav_buttons(&self) -> NavButtons {
        NavButtons::compute(self.tracks.len(), self.selected())
    }
}
