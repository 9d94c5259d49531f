//! Board module - the hidden icon grid
//!
//! A board is created once per round and never changes afterwards. Icons are
//! stored column-major (`x * height + y`), matching the order cells are filled
//! in during generation.
//!
//! Generation:
//! 1. Build every color x shape combination
//! 2. Shuffle, keep the first `cells / 2`
//! 3. Duplicate the kept icons so each appears exactly twice
//! 4. Shuffle again and fill the grid column by column
//!
//! Both shuffles are Fisher-Yates (`SliceRandom::shuffle`), so every
//! arrangement is equally likely.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::{BoardConfig, ConfigError};
use crate::types::{CellPos, Icon, IconColor, Shape};

/// Every shape in every color, colors outermost.
pub fn all_icons() -> Vec<Icon> {
    IconColor::ALL
        .iter()
        .flat_map(|&color| Shape::ALL.iter().map(move |&shape| Icon::new(shape, color)))
        .collect()
}

/// Grid of icons, every icon present exactly twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
    icons: Vec<Icon>,
}

impl Board {
    /// Generate a freshly shuffled board.
    ///
    /// Fails only when `config` violates a startup invariant.
    pub fn generate<R: Rng + ?Sized>(
        config: &BoardConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut icons = all_icons();
        icons.shuffle(rng);
        icons.truncate(config.pair_count());
        icons.extend_from_within(..);
        icons.shuffle(rng);

        log::debug!(
            "generated {}x{} board with {} pairs",
            config.width,
            config.height,
            config.pair_count()
        );

        Ok(Self {
            width: config.width,
            height: config.height,
            icons,
        })
    }

    /// Build a board from explicit icons in column-major order.
    ///
    /// Returns `None` if the icon count does not match the grid. The pairing
    /// invariant is not checked, so tests can construct arbitrary layouts.
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_puzzle_core::Board;
    /// use memory_puzzle_core::types::{CellPos, Icon, IconColor, Shape};
    ///
    /// let a = Icon::new(Shape::Donut, IconColor::Red);
    /// let board = Board::from_icons(2, 1, vec![a, a]).unwrap();
    /// assert_eq!(board.icon(CellPos::new(1, 0)), Some(a));
    /// assert!(Board::from_icons(2, 1, vec![a]).is_none());
    /// ```
    pub fn from_icons(width: u16, height: u16, icons: Vec<Icon>) -> Option<Self> {
        if icons.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            icons,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.icons.len()
    }

    #[inline(always)]
    fn index(&self, cell: CellPos) -> Option<usize> {
        if cell.x >= self.width || cell.y >= self.height {
            return None;
        }
        Some(cell.x as usize * self.height as usize + cell.y as usize)
    }

    /// Icon hidden at `cell`, or `None` if the cell is off the board.
    pub fn icon(&self, cell: CellPos) -> Option<Icon> {
        self.index(cell).map(|i| self.icons[i])
    }

    /// Icons in column-major order.
    pub fn icons(&self) -> &[Icon] {
        &self.icons
    }

    /// Every cell with its icon, column-major.
    pub fn iter(&self) -> impl Iterator<Item = (CellPos, Icon)> + '_ {
        let height = self.height as usize;
        self.icons.iter().enumerate().map(move |(i, &icon)| {
            (CellPos::new((i / height) as u16, (i % height) as u16), icon)
        })
    }
}
