//! Camp Info TUI: the camp cards and panels in a terminal.
//!
//! A grid of cards (schedule, menu, map, contacts, ...) that open modal
//! panels, built with `ratatui` + `crossterm`. Schedule and contacts refresh
//! from the published sheets in the background.

mod app;
mod screens;
mod widgets;

use color_eyre::eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    init_file_logging()?;
    app::run()
}

/// The terminal belongs to the UI, so logs only go to `$CAMPINFO_LOG_FILE` when set.
fn init_file_logging() -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt};

    let Some(path) = std::env::var_os("CAMPINFO_LOG_FILE") else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .init();
    Ok(())
}
