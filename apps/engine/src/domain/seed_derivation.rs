//! RNG seed derivation for deterministic game behavior.
//!
//! A game owns one 32-byte seed. Every random decision in a round draws from
//! its own ChaCha20 stream selected by (round, attempt, purpose), so replaying
//! a game with the same seed and the same actions reproduces every shuffle.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::domain::state::Seat;

/// What a derived stream is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedPurpose {
    Deal,
    Exchange,
    /// Per-seat stream for automated players.
    Ai(Seat),
}

impl SeedPurpose {
    fn tag(self) -> u64 {
        match self {
            SeedPurpose::Deal => 1,
            SeedPurpose::Exchange => 2,
            SeedPurpose::Ai(seat) => 16 + u64::from(seat),
        }
    }
}

fn stream_id(round_no: u16, attempt: u32, purpose: SeedPurpose) -> u64 {
    (u64::from(round_no) << 48) | (u64::from(attempt) << 16) | purpose.tag()
}

/// RNG for one (round, attempt, purpose) triple.
pub fn round_rng(
    game_seed: &[u8; 32],
    round_no: u16,
    attempt: u32,
    purpose: SeedPurpose,
) -> ChaCha20Rng {
    let mut rng = ChaCha20Rng::from_seed(*game_seed);
    rng.set_stream(stream_id(round_no, attempt, purpose));
    rng
}

/// Derive a child seed, e.g. to hand to an automated player.
pub fn derive_seed(
    game_seed: &[u8; 32],
    round_no: u16,
    attempt: u32,
    purpose: SeedPurpose,
) -> [u8; 32] {
    let mut out = [0u8; 32];
    round_rng(game_seed, round_no, attempt, purpose).fill_bytes(&mut out);
    out
}

/// Derive a u64 seed for components that take one (AI factories).
pub fn derive_u64_seed(game_seed: &[u8; 32], round_no: u16, purpose: SeedPurpose) -> u64 {
    round_rng(game_seed, round_no, 0, purpose).next_u64()
}

/// Expand a u64 into a full game seed.
pub fn game_seed_from_u64(seed: u64) -> [u8; 32] {
    let mut out = [0u8; 32];
    ChaCha20Rng::seed_from_u64(seed).fill_bytes(&mut out);
    out
}

/// Fresh game seed from the OS.
pub fn random_game_seed() -> [u8; 32] {
    let mut out = [0u8; 32];
    rand::rng().fill_bytes(&mut out);
    out
}
