//! Animation frame plans.
//!
//! Every animation is a finite list of frame descriptors. The game loop walks
//! them and draws, presents and waits for each step; nothing here touches a
//! clock or a screen.

use arrayvec::ArrayVec;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{palette, CellPos, Rgb, START_GROUP_SIZE, WIN_FLASH_STEPS};

/// Tiles animated together.
pub type CellBatch = ArrayVec<CellPos, START_GROUP_SIZE>;

/// Cover widths for a reveal: full tile down to fully open.
///
/// # Examples
///
/// ```
/// use memory_puzzle_core::animation::reveal_coverages;
///
/// let steps: Vec<i32> = reveal_coverages(40, 6).collect();
/// assert_eq!(steps, vec![40, 34, 28, 22, 16, 10, 4, -2]);
/// ```
pub fn reveal_coverages(tile_size: i32, speed: i32) -> impl Iterator<Item = i32> {
    let speed = speed.max(1);
    (-speed..=tile_size).rev().step_by(speed as usize)
}

/// Cover widths for a cover: nothing up to at least the full tile.
///
/// # Examples
///
/// ```
/// use memory_puzzle_core::animation::cover_coverages;
///
/// let steps: Vec<i32> = cover_coverages(40, 6).collect();
/// assert_eq!(steps, vec![0, 6, 12, 18, 24, 30, 36, 42]);
/// ```
pub fn cover_coverages(tile_size: i32, speed: i32) -> impl Iterator<Item = i32> {
    let speed = speed.max(1);
    (0..tile_size + speed).step_by(speed as usize)
}

/// Shuffle `cells` and split them into groups of [`START_GROUP_SIZE`].
///
/// The last group may be smaller.
pub fn start_round_groups<R: Rng + ?Sized>(
    cells: impl IntoIterator<Item = CellPos>,
    rng: &mut R,
) -> Vec<CellBatch> {
    let mut cells: Vec<CellPos> = cells.into_iter().collect();
    cells.shuffle(rng);
    cells
        .chunks(START_GROUP_SIZE)
        .map(|chunk| chunk.iter().copied().collect())
        .collect()
}

/// Background colors of the win flash, one per step.
///
/// The light/dark pair is swapped before every fill, so the first step shows
/// the normal background.
pub fn win_flash_backgrounds() -> impl Iterator<Item = Rgb> {
    let mut pair = (palette::LIGHT_BG_COLOR, palette::BG_COLOR);
    (0..WIN_FLASH_STEPS).map(move |_| {
        pair = (pair.1, pair.0);
        pair.0
    })
}
