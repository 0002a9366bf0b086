//! Render model written by the coordinator and read by the terminal UI.

use crate::playlist::NavButtons;

use super::state::PlayIcon;

/// Slider range before the first track reports its length.
const DEFAULT_SLIDER_MAX: u64 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    /// Displayed elapsed seconds; the single source of truth for position.
    pub slider_value: u64,
    pub slider_max: u64,
    pub status: String,
    pub play_icon: PlayIcon,
    pub nav: NavButtons,
    pub volume: f32,
}

impl Default for View {
    fn default() -> Self {
        Self {
            slider_value: 0,
            slider_max: DEFAULT_SLIDER_MAX,
            status: String::new(),
            play_icon: PlayIcon::Play,
            nav: NavButtons::compute(0, None),
            volume: 1.0,
        }
    }
}

/// Format whole seconds as `MM:SS`. Minutes are not wrapped into hours.
pub fn format_mmss(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

pub(super) fn elapsed_text(current: u64, length: u64) -> String {
    format!(
        "Time Elapsed: {} of {}",
        format_mmss(current),
        format_mmss(length)
    )
}
