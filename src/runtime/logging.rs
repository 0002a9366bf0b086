//! File logging.
//!
//! The terminal belongs to the UI, so log lines go to
//! `<state dir>/tunebox/tunebox.log` through a non-blocking writer.

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::config::{LoggingSettings, default_log_dir};

/// Install the global subscriber. Returns the writer guard, which must live
/// until shutdown, or `None` when logging could not be set up.
pub fn init(settings: &LoggingSettings) -> Option<WorkerGuard> {
    let dir = settings.directory.clone().or_else(default_log_dir)?;
    fs::create_dir_all(&dir).ok()?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("tunebox")
        .filename_suffix("log")
        .build(&dir)
        .ok()?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_env_filter(filter)
        .try_init()
        .ok()?;

    Some(guard)
}
