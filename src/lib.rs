//! Memory Puzzle (workspace facade crate).
//!
//! Re-exports the workspace crates as `memory_puzzle::{core,engine,input,term,types}`
//! and hosts the binary's environment configuration.

pub mod config;

pub use memory_puzzle_core as core;
pub use memory_puzzle_engine as engine;
pub use memory_puzzle_input as input;
pub use memory_puzzle_term as term;
pub use memory_puzzle_types as types;
