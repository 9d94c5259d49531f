//! Board configuration and its startup checks.
//!
//! A configuration is validated once, before any game state exists. A failure
//! is a misconfiguration, never something the player can trigger.

use std::fmt;

use crate::types::{
    IconColor, Shape, BOARD_HEIGHT, BOARD_WIDTH, GAP_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH, TILE_SIZE,
};

/// Grid dimensions plus the pixel layout they are drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    /// Columns of tiles
    pub width: u16,
    /// Rows of tiles
    pub height: u16,
    pub tile_size: i32,
    pub gap_size: i32,
    pub screen_width: u32,
    pub screen_height: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            tile_size: TILE_SIZE,
            gap_size: GAP_SIZE,
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
        }
    }
}

impl BoardConfig {
    /// Classic layout with a custom grid size.
    pub fn with_size(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of distinct icons a board of this size uses.
    pub fn pair_count(&self) -> usize {
        self.cell_count() / 2
    }

    /// Distinct shape/color combinations available.
    pub fn available_icons() -> usize {
        Shape::ALL.len() * IconColor::ALL.len()
    }

    /// Grid extent in pixels (tiles plus their trailing gaps).
    pub fn grid_extent(&self) -> (i64, i64) {
        let step = (self.tile_size + self.gap_size) as i64;
        (self.width as i64 * step, self.height as i64 * step)
    }

    /// Check the startup invariants.
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_puzzle_core::config::{BoardConfig, ConfigError};
    ///
    /// assert!(BoardConfig::default().validate().is_ok());
    /// assert_eq!(
    ///     BoardConfig::with_size(3, 3).validate(),
    ///     Err(ConfigError::OddCellCount { cells: 9 })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyBoard);
        }

        let cells = self.cell_count();
        if cells % 2 != 0 {
            return Err(ConfigError::OddCellCount { cells });
        }

        let available = Self::available_icons();
        if available * 2 < cells {
            return Err(ConfigError::NotEnoughIcons {
                needed: cells / 2,
                available,
            });
        }

        let (grid_w, grid_h) = self.grid_extent();
        if grid_w > self.screen_width as i64 || grid_h > self.screen_height as i64 {
            return Err(ConfigError::BoardTooLarge {
                width: self.width,
                height: self.height,
            });
        }

        Ok(())
    }
}

/// Fatal configuration problems, detected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    EmptyBoard,
    OddCellCount { cells: usize },
    NotEnoughIcons { needed: usize, available: usize },
    BoardTooLarge { width: u16, height: u16 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyBoard => write!(f, "board needs at least one row and one column"),
            ConfigError::OddCellCount { cells } => write!(
                f,
                "board needs to have an even number of boxes for pairs of matches (got {cells})"
            ),
            ConfigError::NotEnoughIcons { needed, available } => write!(
                f,
                "board is too big for the number of shapes/colors defined \
                 ({needed} icons needed, {available} available)"
            ),
            ConfigError::BoardTooLarge { width, height } => {
                write!(f, "a {width}x{height} board does not fit on the screen")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
