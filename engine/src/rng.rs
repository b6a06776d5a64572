//! Seeded RNG for dice and bounded variation.
//!
//! Each player's trace is generated from its own domain-separated stream so
//! adding or removing a player never shifts another player's rolls.

use daruma_types::DIE_SIDES;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic game RNG.
///
/// Seeded from a match seed and a player index; equal inputs always produce
/// the same roll sequence.
#[derive(Clone, Debug)]
pub struct GameRng(ChaCha8Rng);

impl GameRng {
    /// Create the RNG stream for one player within a match.
    pub fn new(match_seed: u64, player_index: u32) -> Self {
        let mut seed = [0u8; 32];
        seed[..8].copy_from_slice(&match_seed.to_be_bytes());
        seed[8..12].copy_from_slice(&player_index.to_be_bytes());
        seed[12..24].copy_from_slice(b"daruma::dice");
        Self(ChaCha8Rng::from_seed(seed))
    }

    /// Roll the game die, returning a face in `1..=DIE_SIDES`.
    pub fn roll_die(&mut self) -> u8 {
        self.0.gen_range(1..=DIE_SIDES)
    }

    /// Bounded integer in `lo..=hi`.
    pub fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        self.0.gen_range(lo..=hi)
    }
}
