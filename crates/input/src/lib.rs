//! Terminal input module.
//!
//! This module is intentionally independent of the game loop. It maps
//! `crossterm` mouse and key events into [`crate::types::InputEvent`]s in
//! canvas pixel coordinates, using the [`crate::types::Projection`] the screen
//! was last drawn with.

pub mod map;

pub use memory_puzzle_types as types;

pub use map::{map_event, map_key, map_mouse, should_quit};
