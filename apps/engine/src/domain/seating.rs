//! Seat / turn math helpers for a table of `player_count` seats.
//!
//! Every layer (bidding, tricks, views, the flow facade) shares this single
//! source of truth for rotation and "who acts next". Clockwise is +1.

use rand::Rng;

use crate::domain::state::PlayerId;

/// Returns the seat `delta` steps clockwise from `seat`.
#[inline]
pub fn seat_offset(seat: PlayerId, delta: usize, player_count: usize) -> PlayerId {
    debug_assert!(player_count > 0, "player_count must be positive");
    ((seat as usize + delta) % player_count) as PlayerId
}

/// Rotates `players` so that `lead_index` comes first, keeping relative order.
pub fn derive_turn_order(players: &[PlayerId], lead_index: usize) -> Vec<PlayerId> {
    if players.is_empty() {
        return Vec::new();
    }
    let lead = lead_index % players.len();
    players[lead..]
        .iter()
        .chain(players[..lead].iter())
        .copied()
        .collect()
}

/// Uniform pick in `[0, player_count)` for the first round's lead seat.
pub fn initial_lead_index<R: Rng + ?Sized>(player_count: usize, rng: &mut R) -> usize {
    debug_assert!(player_count > 0, "player_count must be positive");
    rng.random_range(0..player_count)
}

/// Lead seat for the round after `current`.
#[inline]
pub fn next_lead_index(current: usize, player_count: usize) -> usize {
    (current + 1) % player_count
}

/// Expected actor seat during a trick.
///
/// `leader` opened the trick; `play_count` cards have been played into it.
#[inline]
pub fn expected_actor(leader: PlayerId, play_count: usize, player_count: usize) -> PlayerId {
    seat_offset(leader, play_count, player_count)
}

/// Position of `who` within `turn_order`.
pub fn position_in(turn_order: &[PlayerId], who: PlayerId) -> Option<usize> {
    turn_order.iter().position(|&p| p == who)
}
