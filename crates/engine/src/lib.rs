//! Game loop: drives the core rules through a [`Screen`] and a [`Clock`].
//!
//! Everything that blocks (frame pacing, the mismatch pause, the win hold)
//! goes through the [`Clock`] seam, and everything that draws or reads input
//! goes through [`Screen`]. With a fake of each the whole loop runs headless
//! and instantly in tests.
//!
//! [`Screen`]: memory_puzzle_term::Screen

pub mod clock;
pub mod game;

pub use memory_puzzle_core as core;
pub use memory_puzzle_term as term;
pub use memory_puzzle_types as types;

pub use clock::{Clock, FrameClock, ManualClock};
pub use game::{Context, Flow, GameConfig, MemoryGame};
