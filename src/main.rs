//! tunebox: a terminal MP3 playlist player.

mod audio;
mod config;
mod coordinator;
mod library;
mod playlist;
mod runtime;
mod skin;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
