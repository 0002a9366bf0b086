use std::env;
use std::path::Path;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::audio::RodioEngine;
use crate::coordinator::PlaybackCoordinator;
use crate::library::{LengthCache, LoftyProbe, collect_paths};
use crate::skin::Skin;

mod event_loop;
mod logging;
mod prompt;
mod scrub;
mod settings;
mod ticker;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, settings_warning) = settings::load_settings();
    let _log_guard = logging::init(&settings.logging);
    if let Some(msg) = settings_warning {
        warn!("{msg}");
    }
    info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let volume = settings.audio.initial_volume;
    let engine = RodioEngine::new(volume)?;
    let mut coordinator = PlaybackCoordinator::new(engine, LengthCache::new(LoftyProbe), volume);

    for arg in env::args_os().skip(1) {
        coordinator.add_many(collect_paths(Path::new(&arg), &settings.library));
    }

    let skin = Skin::by_name(&settings.ui.skin).unwrap_or_else(|| {
        warn!(skin = %settings.ui.skin, "unknown skin, using default");
        Skin::default()
    });

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = event_loop::EventLoopState::new(skin, &settings);
    let run_result = event_loop::run(&mut terminal, &settings, &mut coordinator, &mut state);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &run_result {
        warn!(error = %e, "event loop failed");
    }
    info!("exiting");
    run_result
}
