//! RNG module - seedable randomness for board generation and animations.
//!
//! A single generator is owned by the game loop. Seeding it makes a whole run
//! (every board and every start-of-round animation) reproducible.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Generator used for shuffles.
pub type GameRng = Pcg32;

/// Pick a seed from the thread RNG.
pub fn random_seed() -> u64 {
    rand::rng().random()
}

/// Create the game generator, drawing a fresh seed when none is given.
///
/// Returns the generator together with the seed actually used, so it can be
/// logged and replayed.
pub fn game_rng(seed: Option<u64>) -> (GameRng, u64) {
    let seed = seed.unwrap_or_else(random_seed);
    (Pcg32::seed_from_u64(seed), seed)
}
