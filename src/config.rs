//! Runtime configuration read from `MEMORY_PUZZLE_*` environment variables.

use std::env;

use crate::core::BoardConfig;
use crate::engine::GameConfig;

pub const BOARD_VAR: &str = "MEMORY_PUZZLE_BOARD";
pub const SEED_VAR: &str = "MEMORY_PUZZLE_SEED";
pub const LOG_PATH_VAR: &str = "MEMORY_PUZZLE_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub seed: Option<u64>,
    pub log_path: Option<String>,
    /// Values that were present but unusable. Logged once logging is up.
    pub warnings: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            seed: None,
            log_path: None,
            warnings: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = non_empty(lookup(BOARD_VAR)) {
            match parse_board_size(&raw) {
                Some((width, height)) => config.board = BoardConfig::with_size(width, height),
                None => config.warnings.push(format!(
                    "ignoring {BOARD_VAR}={raw:?}: expected WIDTHxHEIGHT, e.g. 8x6"
                )),
            }
        }

        if let Some(raw) = non_empty(lookup(SEED_VAR)) {
            match raw.parse() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => config
                    .warnings
                    .push(format!("ignoring {SEED_VAR}={raw:?}: not an unsigned integer")),
            }
        }

        config.log_path = non_empty(lookup(LOG_PATH_VAR));
        config
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            board: self.board,
            seed: self.seed,
            ..GameConfig::default()
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
}

/// Parse `"8x6"` (either case of `x`) into `(8, 6)`.
pub fn parse_board_size(raw: &str) -> Option<(u16, u16)> {
    let (w, h) = raw.split_once(['x', 'X'])?;
    Some((w.trim().parse().ok()?, h.trim().parse().ok()?))
}
