use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info};

use crate::audio::AudioEngine;
use crate::config;
use crate::coordinator::PlaybackCoordinator;
use crate::skin::Skin;
use crate::ui::{self, Chrome, Hitboxes};

use super::prompt::{Prompt, PromptKind};
use super::scrub::KeyScrub;
use super::ticker::Ticker;

/// Period of the playback tick.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Upper bound on how long input polling blocks between redraws.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    pub skin: Skin,
    /// Open add prompt, if any; it captures all key input.
    pub prompt: Option<Prompt>,
    key_scrub: KeyScrub,
    /// True between a mouse press on the slider and its release.
    mouse_scrub: bool,
    ticker: Ticker,
    hitboxes: Hitboxes,
}

impl EventLoopState {
    pub fn new(skin: Skin, settings: &config::Settings) -> Self {
        Self {
            skin,
            prompt: None,
            key_scrub: KeyScrub::new(Duration::from_millis(settings.controls.scrub_release_ms)),
            mouse_scrub: false,
            ticker: Ticker::new(TICK_INTERVAL),
            hitboxes: Hitboxes::default(),
        }
    }
}

/// Main terminal event loop: drives the tick, draws, and dispatches input.
/// Returns `Ok(())` when the user quits.
pub fn run<E: AudioEngine>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    coordinator: &mut PlaybackCoordinator<E>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let now = Instant::now();

        state.ticker.follow(coordinator.is_ticking(), now);
        if state.ticker.is_due(now) {
            let outcome = coordinator.tick();
            state.ticker.fired(outcome, now);
        }

        if state.key_scrub.is_active() && !coordinator.is_scrubbing() {
            // Stop ended the hold.
            state.key_scrub.finish();
        }
        if state.key_scrub.should_release(now) {
            state.key_scrub.finish();
            coordinator.scrub_release();
        }

        let chrome = Chrome {
            skin: state.skin,
            header_text: &settings.ui.header_text,
            scrub_seconds: settings.controls.scrub_seconds,
            prompt: state.prompt.as_ref().map(|p| (p.title(), p.input.as_str())),
        };
        let mut hitboxes = state.hitboxes;
        terminal.draw(|f| {
            hitboxes = ui::draw(
                f,
                coordinator.view(),
                coordinator.playlist(),
                coordinator.state(),
                &chrome,
            );
        })?;
        state.hitboxes = hitboxes;

        if !event::poll(state.ticker.poll_timeout(now, POLL_INTERVAL))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if handle_key_event(key, settings, coordinator, state) {
                    info!("quit requested");
                    coordinator.stop_pressed();
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => handle_mouse_event(mouse, coordinator, state),
            _ => {}
        }
    }
}

/// Returns true when the user asked to quit.
fn handle_key_event<E: AudioEngine>(
    key: KeyEvent,
    settings: &config::Settings,
    coordinator: &mut PlaybackCoordinator<E>,
    state: &mut EventLoopState,
) -> bool {
    if let Some(prompt) = state.prompt.as_mut() {
        match key.code {
            KeyCode::Esc => state.prompt = None,
            KeyCode::Backspace => {
                prompt.input.pop();
            }
            KeyCode::Enter => {
                if let Some(prompt) = state.prompt.take() {
                    let paths = prompt.resolve(&settings.library);
                    match prompt.kind {
                        PromptKind::AddOne => {
                            if let Some(path) = paths.into_iter().next() {
                                coordinator.add_one(path);
                            }
                        }
                        PromptKind::AddMany => {
                            coordinator.add_many(paths);
                        }
                    }
                }
            }
            KeyCode::Char(c) if !c.is_control() => prompt.input.push(c),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('j') | KeyCode::Down => coordinator.select_next_row(),
        KeyCode::Char('k') | KeyCode::Up => coordinator.select_prev_row(),
        KeyCode::Char(' ') | KeyCode::Char('p') => coordinator.play_pressed(),
        KeyCode::Char('x') => coordinator.stop_pressed(),
        KeyCode::Char('l') => coordinator.next_pressed(),
        KeyCode::Char('h') => coordinator.previous_pressed(),
        KeyCode::Char('L') => key_scrub(coordinator, state, settings.controls.scrub_seconds, true),
        KeyCode::Char('H') => key_scrub(coordinator, state, settings.controls.scrub_seconds, false),
        KeyCode::Enter if state.key_scrub.is_active() => {
            state.key_scrub.finish();
            coordinator.scrub_release();
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            let v = coordinator.view().volume + settings.controls.volume_step;
            coordinator.volume_changed(v);
        }
        KeyCode::Char('-') => {
            let v = coordinator.view().volume - settings.controls.volume_step;
            coordinator.volume_changed(v);
        }
        KeyCode::Char('t') => {
            state.skin = state.skin.next();
            debug!(skin = state.skin.name, "switched skin");
        }
        KeyCode::Char('a') => state.prompt = Some(Prompt::new(PromptKind::AddOne)),
        KeyCode::Char('A') => state.prompt = Some(Prompt::new(PromptKind::AddMany)),
        KeyCode::Char('d') => coordinator.delete_selected(),
        KeyCode::Char('D') => coordinator.delete_all(),
        _ => {}
    }

    false
}

fn key_scrub<E: AudioEngine>(
    coordinator: &mut PlaybackCoordinator<E>,
    state: &mut EventLoopState,
    secs: u64,
    forward: bool,
) {
    if state.key_scrub.nudge(Instant::now()) {
        coordinator.scrub_start();
    }
    let current = coordinator.view().slider_value;
    let target = if forward {
        current.saturating_add(secs)
    } else {
        current.saturating_sub(secs)
    };
    coordinator.scrub_drag(target);
}

fn handle_mouse_event<E: AudioEngine>(
    mouse: MouseEvent,
    coordinator: &mut PlaybackCoordinator<E>,
    state: &mut EventLoopState,
) {
    if state.prompt.is_some() {
        return;
    }
    let hb = state.hitboxes;
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if hb.on_slider(mouse.column, mouse.row) {
                state.mouse_scrub = true;
                coordinator.scrub_start();
                let max = coordinator.view().slider_max;
                coordinator.scrub_drag(hb.slider_value_at(mouse.column, max));
            } else if let Some(index) =
                hb.list_index_at(mouse.column, mouse.row, coordinator.playlist().len())
            {
                coordinator.select(index);
            }
        }
        MouseEventKind::Drag(MouseButton::Left)
            if state.mouse_scrub && coordinator.is_scrubbing() =>
        {
            let max = coordinator.view().slider_max;
            coordinator.scrub_drag(hb.slider_value_at(mouse.column, max));
        }
        MouseEventKind::Up(MouseButton::Left) if state.mouse_scrub => {
            state.mouse_scrub = false;
            coordinator.scrub_release();
        }
        _ => {}
    }
}
