//! Reveal state - which tiles currently show their icon.
//!
//! Same dimensions as the board, reset to all-covered every round. The game
//! loop flips entries directly as tiles are revealed and covered again.

use crate::types::CellPos;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealState {
    width: u16,
    height: u16,
    revealed: Vec<bool>,
}

impl RevealState {
    fn filled(width: u16, height: u16, value: bool) -> Self {
        Self {
            width,
            height,
            revealed: vec![value; width as usize * height as usize],
        }
    }

    /// Every tile covered.
    pub fn all_false(width: u16, height: u16) -> Self {
        Self::filled(width, height, false)
    }

    /// Every tile revealed.
    pub fn all_true(width: u16, height: u16) -> Self {
        Self::filled(width, height, true)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn index(&self, cell: CellPos) -> Option<usize> {
        if cell.x >= self.width || cell.y >= self.height {
            return None;
        }
        Some(cell.x as usize * self.height as usize + cell.y as usize)
    }

    /// `None` for cells off the board.
    pub fn is_revealed(&self, cell: CellPos) -> Option<bool> {
        self.index(cell).map(|i| self.revealed[i])
    }

    /// Returns false if the cell is off the board.
    pub fn set(&mut self, cell: CellPos, revealed: bool) -> bool {
        match self.index(cell) {
            Some(i) => {
                self.revealed[i] = revealed;
                true
            }
            None => false,
        }
    }

    /// True once every tile is revealed.
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_puzzle_core::RevealState;
    /// use memory_puzzle_core::types::CellPos;
    ///
    /// let mut reveal = RevealState::all_true(2, 2);
    /// assert!(reveal.has_won());
    /// reveal.set(CellPos::new(1, 1), false);
    /// assert!(!reveal.has_won());
    /// ```
    pub fn has_won(&self) -> bool {
        self.revealed.iter().all(|&r| r)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|&&r| r).count()
    }
}
