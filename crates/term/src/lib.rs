//! Terminal "game renderer" module.
//!
//! The game draws into a [`Canvas`] of logical pixels, exactly as it would on
//! a window. This crate turns that canvas into half-block terminal cells,
//! flushes them through a diffing [`TerminalRenderer`], and exposes the whole
//! thing to the game loop as a [`Screen`].
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep drawing code in pixel space, independent of the terminal size
//! - Only rewrite terminal cells that changed between frames

pub mod board_view;
pub mod canvas;
pub mod fb;
pub mod present;
pub mod renderer;
pub mod screen;

pub use memory_puzzle_core as core;
pub use memory_puzzle_types as types;

pub use board_view::BoardView;
pub use canvas::Canvas;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use present::{rasterize_into, HALF_BLOCK};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::{layout, Screen, TerminalScreen};
