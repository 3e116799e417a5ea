//! RNG seed derivation utilities for deterministic game behavior.
//!
//! All randomness in a game flows from one base seed; these functions derive
//! unique-but-deterministic seeds for each purpose.

/// Derive a seed for dealing the cards of one round.
///
/// Same game seed + same round number = same deal.
pub fn derive_dealing_seed(game_seed: u64, round_no: u8) -> u64 {
    game_seed
        .wrapping_add((round_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2) // Offset to distinguish from other contexts
}

/// Derive a seed for drawing the first round's lead seat.
pub fn derive_lead_seed(game_seed: u64) -> u64 {
    game_seed.wrapping_mul(31).wrapping_add(3)
}

/// Derive a seed for the bot occupying `seat`.
pub fn derive_bot_seed(game_seed: u64, seat: u8) -> u64 {
    game_seed
        .wrapping_add((seat as u64).wrapping_mul(100))
        .wrapping_add(1)
}
