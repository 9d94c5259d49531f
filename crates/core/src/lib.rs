//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules and data of the memory puzzle. It has **zero
//! dependencies** on terminals, drawing or timing, making it:
//!
//! - **Deterministic**: Same seed produces identical boards and animations
//! - **Testable**: Every rule is checked without a screen or a clock
//! - **Portable**: Any surface that can draw rectangles and circles can host it
//!
//! # Module Structure
//!
//! - [`config`]: Board size/layout and the startup checks
//! - [`geometry`]: Cell <-> pixel mapping
//! - [`board`]: Shuffled, paired icon grid
//! - [`reveal`]: Which tiles are face-up
//! - [`rules`]: The two-click turn state machine
//! - [`pointer`]: Per-frame pointer/click aggregation
//! - [`animation`]: Frame plans for slides, the start-of-round preview and the win flash
//! - [`rng`]: Seedable generator
//!
//! # Example
//!
//! ```
//! use memory_puzzle_core::{rng::game_rng, Board, BoardConfig, RevealState, Turn};
//! use memory_puzzle_core::rules::ClickOutcome;
//! use memory_puzzle_core::types::CellPos;
//!
//! let config = BoardConfig::with_size(2, 1);
//! let (mut rng, _seed) = game_rng(Some(1));
//! let board = Board::generate(&config, &mut rng).unwrap();
//! let mut reveal = RevealState::all_false(2, 1);
//! let mut turn = Turn::new();
//!
//! turn.click(&board, &mut reveal, Some(CellPos::new(0, 0)));
//! let outcome = turn.click(&board, &mut reveal, Some(CellPos::new(1, 0)));
//! assert!(matches!(outcome, ClickOutcome::Matched { won: true, .. }));
//! ```

pub mod animation;
pub mod board;
pub mod config;
pub mod geometry;
pub mod pointer;
pub mod reveal;
pub mod rng;
pub mod rules;

pub use memory_puzzle_types as types;

// Re-export commonly used types for convenience
pub use animation::CellBatch;
pub use board::Board;
pub use config::{BoardConfig, ConfigError};
pub use geometry::{Geometry, Rect};
pub use pointer::PointerState;
pub use reveal::RevealState;
pub use rng::GameRng;
pub use rules::{ClickOutcome, Turn};
