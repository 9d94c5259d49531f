//! Geometry mapper - board cells <-> screen pixels
//!
//! Tiles are laid out on a fixed pitch (`tile + gap`) and the whole grid is
//! centered on the screen. Coordinates: (x, y) where x is the column (left to
//! right) and y is the row (top to bottom).

use crate::config::BoardConfig;
use crate::types::{CellPos, HIGHLIGHT_INSET};

/// Axis-aligned pixel rectangle, half-open on the right and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Grow by `d` pixels on every side.
    pub fn inflate(&self, d: i32) -> Self {
        Self::new(self.x - d, self.y - d, self.w + 2 * d, self.h + 2 * d)
    }
}

/// Pixel layout derived once from a [`BoardConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    width: u16,
    height: u16,
    tile_size: i32,
    pitch: i32,
    margin_x: i32,
    margin_y: i32,
}

impl Geometry {
    pub fn new(config: &BoardConfig) -> Self {
        let pitch = config.tile_size + config.gap_size;
        let (grid_w, grid_h) = config.grid_extent();
        // Truncate toward zero, like an int() cast of the float halves.
        let margin_x = ((config.screen_width as i64 - grid_w) / 2) as i32;
        let margin_y = ((config.screen_height as i64 - grid_h) / 2) as i32;
        Self {
            width: config.width,
            height: config.height,
            tile_size: config.tile_size,
            pitch,
            margin_x,
            margin_y,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn tile_size(&self) -> i32 {
        self.tile_size
    }

    pub fn margin_x(&self) -> i32 {
        self.margin_x
    }

    pub fn margin_y(&self) -> i32 {
        self.margin_y
    }

    /// Every cell, column-major (all rows of column 0, then column 1, ...).
    pub fn cells(&self) -> impl Iterator<Item = CellPos> {
        let height = self.height;
        (0..self.width).flat_map(move |x| (0..height).map(move |y| CellPos::new(x, y)))
    }

    /// Pixel coordinates of a cell's top-left corner.
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_puzzle_core::config::BoardConfig;
    /// use memory_puzzle_core::geometry::Geometry;
    /// use memory_puzzle_core::types::CellPos;
    ///
    /// let geo = Geometry::new(&BoardConfig::default());
    /// assert_eq!(geo.cell_top_left(CellPos::new(0, 0)), (90, 50));
    /// assert_eq!(geo.cell_top_left(CellPos::new(1, 2)), (150, 170));
    /// ```
    pub fn cell_top_left(&self, cell: CellPos) -> (i32, i32) {
        let left = cell.x as i32 * self.pitch + self.margin_x;
        let top = cell.y as i32 * self.pitch + self.margin_y;
        (left, top)
    }

    pub fn tile_rect(&self, cell: CellPos) -> Rect {
        let (left, top) = self.cell_top_left(cell);
        Rect::new(left, top, self.tile_size, self.tile_size)
    }

    /// Outline drawn around a hovered tile.
    pub fn highlight_rect(&self, cell: CellPos) -> Rect {
        self.tile_rect(cell).inflate(HIGHLIGHT_INSET)
    }

    /// Cell whose tile square contains the pixel, if any.
    ///
    /// Scans column-major and returns the first hit; tiles never overlap, so
    /// the order only matters for determinism.
    pub fn cell_at_pixel(&self, x: i32, y: i32) -> Option<CellPos> {
        self.cells().find(|&cell| self.tile_rect(cell).contains(x, y))
    }
}
