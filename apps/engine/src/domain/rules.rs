use std::ops::RangeInclusive;

use crate::domain::Suit;

pub const DECK_SIZE: usize = 52;
pub const MIN_PLAYERS: usize = 2;
/// One card each is the smallest possible deal.
pub const MAX_PLAYERS: usize = DECK_SIZE;

/// Fixed trump suit.
pub const TRUMP: Suit = Suit::Hearts;

/// Bonus for winning exactly the bid number of tricks.
pub const EXACT_BID_BONUS: i32 = 5;

/// Hand size of the first round: the whole deck split evenly.
pub fn first_hand_size(player_count: usize) -> Option<u8> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        return None;
    }
    u8::try_from(DECK_SIZE / player_count).ok()
}

// Hand-size schedule: floor(52 / n) → ... → 2 → 1, one card fewer each round.
pub fn hand_size_for_round(player_count: usize, round_no: u8) -> Option<u8> {
    let first = first_hand_size(player_count)?;
    if round_no == 0 || round_no > first {
        return None;
    }
    Some(first - (round_no - 1))
}

/// Hand size that follows `current`, or None once the single-card round is reached.
pub fn next_hand_size(current: u8) -> Option<u8> {
    (current > 1).then(|| current - 1)
}

pub fn total_rounds(player_count: usize) -> Option<u8> {
    first_hand_size(player_count)
}

pub fn valid_bid_range(hand_size: u8) -> RangeInclusive<u8> {
    0..=hand_size
}
