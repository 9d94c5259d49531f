//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board logic, pixel rendering, terminal input).
//!
//! # Board Dimensions
//!
//! Classic layout:
//!
//! - **Width**: 8 columns of tiles (indexed 0-7)
//! - **Height**: 6 rows of tiles (indexed 0-5)
//! - **Screen**: 660x460 logical pixels
//! - **Tile**: 40px square, 20px gap between tiles
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FPS` | 30 | Frame limiter target |
//! | `REVEAL_SPEED` | 6 | Pixels the sliding cover moves per animation step |
//! | `MISMATCH_PAUSE_MS` | 1000 | Pause before re-covering a mismatched pair |
//! | `WIN_HOLD_MS` | 2000 | Hold after the win animation |
//! | `NEW_BOARD_HOLD_MS` | 1000 | Hold showing the fresh covered board |
//! | `WIN_FLASH_MS` | 300 | Duration of each win flash step |
//!
//! # Examples
//!
//! ```
//! use memory_puzzle_types::{Icon, IconColor, Shape, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! let a = Icon::new(Shape::Donut, IconColor::Red);
//! let b = Icon::new(Shape::Donut, IconColor::Red);
//! assert_eq!(a, b);
//! assert_ne!(a, Icon::new(Shape::Oval, IconColor::Red));
//!
//! assert_eq!(BOARD_WIDTH, 8);
//! assert_eq!(BOARD_HEIGHT, 6);
//! ```

pub mod projection;

pub use projection::Projection;

/// Title shown above the board.
pub const CAPTION: &str = "Memory Puzzle Game";

/// Board width in tiles (8 columns)
pub const BOARD_WIDTH: u16 = 8;

/// Board height in tiles (6 rows)
pub const BOARD_HEIGHT: u16 = 6;

/// Screen width in logical pixels
pub const SCREEN_WIDTH: u32 = 660;

/// Screen height in logical pixels
pub const SCREEN_HEIGHT: u32 = 460;

/// Tile height & width in pixels
pub const TILE_SIZE: i32 = 40;

/// Gap between tiles in pixels
pub const GAP_SIZE: i32 = 20;

/// Frame limiter target (frames per second)
pub const FPS: u32 = 30;

/// Speed of the sliding reveal/cover animation (pixels per step)
pub const REVEAL_SPEED: i32 = 6;

/// Pause before a mismatched pair is covered again
pub const MISMATCH_PAUSE_MS: u64 = 1000;

/// Hold after the win animation, before the board is replaced
pub const WIN_HOLD_MS: u64 = 2000;

/// Hold showing the fresh, fully covered board
pub const NEW_BOARD_HOLD_MS: u64 = 1000;

/// Duration of each win flash step
pub const WIN_FLASH_MS: u64 = 300;

/// Number of background swaps in the win animation
pub const WIN_FLASH_STEPS: usize = 13;

/// Tiles revealed together by the start-of-round animation
pub const START_GROUP_SIZE: usize = 8;

/// Thickness of the hover highlight outline
pub const HIGHLIGHT_WIDTH: i32 = 4;

/// How far the hover highlight extends past the tile on each side
pub const HIGHLIGHT_INSET: i32 = 5;


/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Fixed palette used by the renderer.
pub mod palette {
    use super::Rgb;

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const GRAY: Rgb = Rgb::new(100, 100, 100);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const NEON: Rgb = Rgb::new(22, 100, 8);

    /// Screen background
    pub const BG_COLOR: Rgb = BLACK;
    /// Alternate background flashed by the win animation
    pub const LIGHT_BG_COLOR: Rgb = GRAY;
    /// Face-down tile
    pub const BOX_COLOR: Rgb = WHITE;
    /// Hover outline
    pub const HIGHLIGHT_COLOR: Rgb = NEON;
}

/// The six icon shapes
///
/// Each shape has a dedicated drawing routine:
/// - **Donut**: ring made of two concentric circles
/// - **Square**: centered filled square, half the tile wide
/// - **Diamond**: square rotated 45°
/// - **Lines**: crosshatch of short diagonals every 4 pixels
/// - **Oval**: ellipse spanning the tile width and half its height
/// - **Circle**: filled circle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Donut,
    Square,
    Diamond,
    Lines,
    Oval,
    Circle,
}

impl Shape {
    pub const ALL: [Shape; 6] = [
        Shape::Donut,
        Shape::Square,
        Shape::Diamond,
        Shape::Lines,
        Shape::Oval,
        Shape::Circle,
    ];

    /// Lowercase name, as shown in logs.
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_puzzle_types::Shape;
    ///
    /// assert_eq!(Shape::Donut.as_str(), "donut");
    /// assert_eq!(Shape::Lines.as_str(), "lines");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Donut => "donut",
            Shape::Square => "square",
            Shape::Diamond => "diamond",
            Shape::Lines => "lines",
            Shape::Oval => "oval",
            Shape::Circle => "circle",
        }
    }
}

/// The six icon colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconColor {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
}

impl IconColor {
    pub const ALL: [IconColor; 6] = [
        IconColor::Red,
        IconColor::Green,
        IconColor::Blue,
        IconColor::Yellow,
        IconColor::Orange,
        IconColor::Purple,
    ];

    pub fn rgb(&self) -> Rgb {
        match self {
            IconColor::Red => Rgb::new(255, 0, 0),
            IconColor::Green => Rgb::new(0, 255, 0),
            IconColor::Blue => Rgb::new(0, 0, 255),
            IconColor::Yellow => Rgb::new(255, 255, 0),
            IconColor::Orange => Rgb::new(255, 128, 0),
            IconColor::Purple => Rgb::new(255, 0, 255),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IconColor::Red => "red",
            IconColor::Green => "green",
            IconColor::Blue => "blue",
            IconColor::Yellow => "yellow",
            IconColor::Orange => "orange",
            IconColor::Purple => "purple",
        }
    }
}

/// What a tile hides: one shape in one color.
///
/// Two cells holding equal icons form a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Icon {
    pub shape: Shape,
    pub color: IconColor,
}

impl Icon {
    pub const fn new(shape: Shape, color: IconColor) -> Self {
        Self { shape, color }
    }
}

/// A board cell, addressed by column (`x`) and row (`y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub x: u16,
    pub y: u16,
}

impl CellPos {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Keys the game distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Char(char),
    Other,
}

/// Input consumed by the game loop, in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer moved to (x, y)
    PointerMoved { x: i32, y: i32 },
    /// Any mouse button released at (x, y)
    PointerReleased { x: i32, y: i32 },
    /// Key released
    KeyReleased(Key),
    /// Window (or terminal session) asked to close
    CloseRequested,
}

impl InputEvent {
    /// Whether this event ends the program.
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_puzzle_types::{InputEvent, Key};
    ///
    /// assert!(InputEvent::CloseRequested.is_quit());
    /// assert!(InputEvent::KeyReleased(Key::Escape).is_quit());
    /// assert!(!InputEvent::KeyReleased(Key::Char('x')).is_quit());
    /// ```
    pub fn is_quit(&self) -> bool {
        matches!(
            self,
            InputEvent::CloseRequested | InputEvent::KeyReleased(Key::Escape)
        )
    }
}
