//! Memory Puzzle runner (default binary).
//!
//! Reads `MEMORY_PUZZLE_*` settings, validates the board before touching the
//! terminal, then hands a crossterm screen and a wall clock to the game loop.

use std::fs::File;

use anyhow::{Context, Result};
use log::warn;

use memory_puzzle::config::AppConfig;
use memory_puzzle::engine::{FrameClock, MemoryGame};
use memory_puzzle::term::TerminalScreen;
use memory_puzzle::types::CAPTION;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(config.log_path.as_deref())?;
    for warning in &config.warnings {
        warn!("{warning}");
    }

    let mut game = MemoryGame::new(
        config.game_config(),
        TerminalScreen::new(CAPTION),
        FrameClock::new(),
    )?;

    game.screen_mut().enter()?;
    let result = game.run();

    // Always try to restore terminal state.
    let _ = game.screen_mut().exit();
    result
}

/// The terminal owns stdout/stderr, so logs only go to a file when asked.
fn init_logging(path: Option<&str>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("opening log file {path}"))?;
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
