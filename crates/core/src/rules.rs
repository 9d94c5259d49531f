//! Turn rules - the selection state machine.
//!
//! A turn is two clicks on covered tiles. The first click is remembered; the
//! second one is compared against it and the turn resolves as a match or a
//! mismatch. The win check only runs after a match.
//!
//! This module only updates data. Animations and pauses around each outcome
//! belong to the game loop.

use crate::board::Board;
use crate::reveal::RevealState;
use crate::types::{CellPos, Icon};

/// Result of comparing the two tiles of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Match,
    Mismatch,
}

/// Resolve a turn from the two icons alone.
///
/// # Examples
///
/// ```
/// use memory_puzzle_core::rules::{resolve, Resolution};
/// use memory_puzzle_core::types::{Icon, IconColor, Shape};
///
/// let a = Icon::new(Shape::Square, IconColor::Blue);
/// let b = Icon::new(Shape::Square, IconColor::Green);
/// assert_eq!(resolve(a, a), Resolution::Match);
/// assert_eq!(resolve(a, b), Resolution::Mismatch);
/// ```
pub fn resolve(first: Icon, second: Icon) -> Resolution {
    if first == second {
        Resolution::Match
    } else {
        Resolution::Mismatch
    }
}

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Outside the grid or on a revealed tile; nothing changed.
    Ignored,
    /// First tile of the turn revealed and remembered.
    FirstRevealed(CellPos),
    /// Second tile matched the first. Both stay revealed.
    Matched {
        first: CellPos,
        second: CellPos,
        won: bool,
    },
    /// Second tile differs from the first. Both are still marked revealed;
    /// the game loop covers them again after its pause.
    Mismatched { first: CellPos, second: CellPos },
}

/// One persistent selection slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Turn {
    selection: Option<CellPos>,
}

impl Turn {
    pub fn new() -> Self {
        Self::default()
    }

    /// First tile of the current turn, if one was picked.
    pub fn selection(&self) -> Option<CellPos> {
        self.selection
    }

    pub fn clear(&mut self) {
        self.selection = None;
    }

    /// Apply a click on `cell` (the tile under the pointer, if any).
    ///
    /// Marks the clicked tile revealed. Ignored clicks leave the selection
    /// untouched.
    pub fn click(
        &mut self,
        board: &Board,
        reveal: &mut RevealState,
        cell: Option<CellPos>,
    ) -> ClickOutcome {
        let Some(cell) = cell else {
            return ClickOutcome::Ignored;
        };
        if reveal.is_revealed(cell) != Some(false) {
            return ClickOutcome::Ignored;
        }
        let Some(second_icon) = board.icon(cell) else {
            return ClickOutcome::Ignored;
        };

        reveal.set(cell, true);

        let Some(first) = self.selection.take() else {
            self.selection = Some(cell);
            return ClickOutcome::FirstRevealed(cell);
        };

        // The first tile is on the board: it was revealed by an earlier click.
        let matched = board
            .icon(first)
            .is_some_and(|first_icon| resolve(first_icon, second_icon) == Resolution::Match);

        if matched {
            ClickOutcome::Matched {
                first,
                second: cell,
                won: reveal.has_won(),
            }
        } else {
            ClickOutcome::Mismatched {
                first,
                second: cell,
            }
        }
    }
}
