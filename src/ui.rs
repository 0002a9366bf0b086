//! UI rendering helpers for the terminal user interface.
//!
//! This module renders the coordinator's `View` and playlist using `ratatui`
//! and reports where the clickable widgets ended up so mouse input can be
//! mapped back onto them.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::coordinator::{PlayIcon, PlaybackState, View, format_mmss};
use crate::playlist::Playlist;
use crate::skin::Skin;

/// Everything a frame needs besides the coordinator's view.
pub struct Chrome<'a> {
    pub skin: Skin,
    pub header_text: &'a str,
    pub scrub_seconds: u64,
    /// Title and current input of an open add prompt.
    pub prompt: Option<(&'a str, &'a str)>,
}

/// Screen areas that react to the mouse, as laid out by the last draw.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Hitboxes {
    /// Inner area of the playlist box.
    pub list: Rect,
    /// Playlist index shown on the first row of `list`.
    pub list_offset: usize,
    /// Inner area of the position slider.
    pub slider: Rect,
}

impl Hitboxes {
    /// Playlist index under screen row `row`, if any.
    pub fn list_index_at(&self, column: u16, row: u16, len: usize) -> Option<usize> {
        if !contains(self.list, column, row) {
            return None;
        }
        let index = self.list_offset + (row - self.list.y) as usize;
        (index < len).then_some(index)
    }

    /// Slider value under screen column `column`, clamped to `0..=max`.
    pub fn slider_value_at(&self, column: u16, max: u64) -> u64 {
        let width = self.slider.width.saturating_sub(1) as u64;
        if width == 0 {
            return 0;
        }
        let offset = column.saturating_sub(self.slider.x) as u64;
        (offset.min(width) * max + width / 2) / width
    }

    pub fn on_slider(&self, column: u16, row: u16) -> bool {
        contains(self.slider, column, row)
    }
}

fn contains(r: Rect, column: u16, row: u16) -> bool {
    column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
}

fn controls_text(scrub_seconds: u64) -> String {
    [
        "[j/k] select".to_string(),
        "[space/p] play/pause".to_string(),
        "[x] stop".to_string(),
        "[h/l] back/forward".to_string(),
        format!("[H/L] scrub -/+{scrub_seconds}s"),
        "[+/-] volume".to_string(),
        "[a/A] add song/songs".to_string(),
        "[d/D] delete/delete all".to_string(),
        "[t] skin".to_string(),
        "[q] quit".to_string(),
    ]
    .join(" | ")
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(3);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// First visible row so that `selected` sits near the middle of `height` rows.
fn window_start(total: usize, height: usize, selected: Option<usize>) -> usize {
    let Some(sel) = selected else {
        return 0;
    };
    if total <= height || height == 0 {
        return 0;
    }
    let half = height / 2;
    let start = sel.saturating_sub(half);
    start.min(total - height)
}

fn button<'a>(label: &'a str, enabled: bool, skin: &Skin) -> Span<'a> {
    let style = if enabled {
        Style::default().fg(skin.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(skin.disabled)
    };
    Span::styled(label, style)
}

/// Render the entire UI into `frame` and return the clickable areas.
pub fn draw(
    frame: &mut Frame,
    view: &View,
    playlist: &Playlist,
    state: PlaybackState,
    chrome: &Chrome,
) -> Hitboxes {
    let skin = chrome.skin;
    let base = Style::default().fg(skin.foreground).bg(skin.background);
    let border = Style::default().fg(skin.border);

    frame.render_widget(Block::default().style(base), frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(chrome.header_text)
        .alignment(Alignment::Center)
        .style(base)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(format!(" tunebox · {} ", skin.name))
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Playlist
    let list_block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" playlist ({}) ", playlist.len()));
    let list_inner = list_block.inner(chunks[1]);

    let total = playlist.len();
    let height = list_inner.height as usize;
    let selected = playlist.selected();
    let start = window_start(total, height, selected);
    let end = (start + height).min(total);

    let items: Vec<ListItem> = playlist.tracks()[start..end]
        .iter()
        .map(|t| ListItem::new(t.display.as_str()))
        .collect();
    let list = List::new(items)
        .style(base)
        .block(list_block)
        .highlight_style(
            Style::default()
                .fg(skin.background)
                .bg(skin.foreground)
                .add_modifier(Modifier::BOLD),
        );
    let mut list_state = ListState::default();
    list_state.select(selected.map(|s| s - start));
    frame.render_stateful_widget(list, chunks[1], &mut list_state);

    if playlist.is_empty() {
        let hint = Paragraph::new("no songs yet, press a or A to add some")
            .alignment(Alignment::Center)
            .style(Style::default().fg(skin.disabled).bg(skin.background));
        frame.render_widget(hint, list_inner);
    }

    // Transport
    let play_label = match view.play_icon {
        PlayIcon::Play => " ▶ Play ",
        PlayIcon::Pause => " ❚❚ Pause ",
    };
    let state_label = match state {
        PlaybackState::Stopped => "stopped",
        PlaybackState::Playing => "playing",
        PlaybackState::Paused => "paused",
    };
    let transport = Line::from(vec![
        button(" ⏮ Back ", view.nav.back, &skin),
        Span::raw("  "),
        button(play_label, true, &skin),
        Span::raw("  "),
        button(" ■ Stop ", true, &skin),
        Span::raw("  "),
        button(" Forward ⏭ ", view.nav.forward, &skin),
        Span::raw("    "),
        Span::styled(
            format!("Volume {:>3}%", (view.volume * 100.0).round() as u32),
            Style::default().fg(skin.foreground),
        ),
        Span::raw("  "),
        Span::styled(state_label, Style::default().fg(skin.disabled)),
    ]);
    let transport_par = Paragraph::new(transport).style(base).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" controls "),
    );
    frame.render_widget(transport_par, chunks[2]);

    // Position slider
    let slider_block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(" position ");
    let slider_inner = slider_block.inner(chunks[3]);
    let ratio = if view.slider_max == 0 {
        0.0
    } else {
        (view.slider_value as f64 / view.slider_max as f64).clamp(0.0, 1.0)
    };
    let gauge = Gauge::default()
        .block(slider_block)
        .style(base)
        .gauge_style(Style::default().fg(skin.accent).bg(skin.slider_track))
        .ratio(ratio)
        .label(format!(
            "{} / {}",
            format_mmss(view.slider_value),
            format_mmss(view.slider_max)
        ));
    frame.render_widget(gauge, chunks[3]);

    // Status label
    let status = Paragraph::new(view.status.as_str())
        .alignment(Alignment::Right)
        .style(base);
    frame.render_widget(status, chunks[4]);

    // Footer
    let footer = Paragraph::new(controls_text(chrome.scrub_seconds))
        .style(base)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(" keys ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[5]);

    // Prompt overlay
    if let Some((title, input)) = chrome.prompt {
        let area = centered_rect_sized(72, 3, chunks[1]);
        frame.render_widget(Clear, area);
        let prompt = Paragraph::new(format!("{input}▏"))
            .style(base)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(skin.accent))
                    .title(format!(" {title} (enter adds, esc cancels) ")),
            );
        frame.render_widget(prompt, area);
    }

    Hitboxes {
        list: list_inner,
        list_offset: start,
        slider: slider_inner,
    }
}
