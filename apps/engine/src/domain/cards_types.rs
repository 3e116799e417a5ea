//! Core card-related types: Card, Rank, Suit

use serde::{Deserialize, Serialize};

/// Card suits, declared in display grouping order (trump suit last).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Suit {
    Diamonds,
    Spades,
    Clubs,
    Hearts,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Spades, Suit::Clubs, Suit::Hearts];
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Ten and above.
    pub fn is_honour(self) -> bool {
        self >= Rank::Ten
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

/// Total order over ranks: 0 for Two up to 12 for Ace.
pub fn rank_order(card: Card) -> u8 {
    card.rank as u8
}

/// Fixed display grouping of suits, independent of rank order.
pub fn suit_group_order(card: Card) -> u8 {
    card.suit as u8
}

// Note: Ord on Card is only for stable display sorting: suit group, then rank.
// Do not use for trick resolution; see `card_beats`.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (suit_group_order(*self), rank_order(*self))
            .cmp(&(suit_group_order(*other), rank_order(*other)))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
