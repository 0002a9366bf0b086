//! Playlist store: the ordered tracks the user added and the current selection.

mod model;
mod nav;

pub use model::Playlist;
pub use nav::NavButtons;
