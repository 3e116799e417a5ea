// Proptest generators for domain types.
// Hands are drawn from a shuffled deck so cards are unique by construction.

use proptest::prelude::*;

use crate::domain::dealing::full_deck;
use crate::domain::{Card, PlayerId, Rank, Suit};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(32);
    ProptestConfig {
        cases,
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Diamonds),
        Just(Suit::Spades),
        Just(Suit::Clubs),
        Just(Suit::Hearts),
    ]
}

pub fn rank() -> impl Strategy<Value = Rank> {
    (0usize..13).prop_map(|i| Rank::ALL[i])
}

pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

/// `count` distinct cards.
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(full_deck())
        .prop_shuffle()
        .prop_map(move |deck| deck.into_iter().take(count).collect())
}

/// A complete trick for `2..=6` players: (plays in seat order from the leader, leader).
pub fn complete_trick() -> impl Strategy<Value = (Vec<(PlayerId, Card)>, PlayerId)> {
    (2usize..=6)
        .prop_flat_map(|n| (unique_cards(n), 0..n as PlayerId, Just(n)))
        .prop_map(|(cards, leader, n)| {
            let plays = cards
                .into_iter()
                .enumerate()
                .map(|(i, c)| (((leader as usize + i) % n) as PlayerId, c))
                .collect();
            (plays, leader)
        })
}

/// A hand of 1..=13 distinct cards plus an optional leading suit.
pub fn hand_and_lead() -> impl Strategy<Value = (Vec<Card>, Option<Suit>)> {
    (1usize..=13).prop_flat_map(|n| (unique_cards(n), proptest::option::of(suit())))
}
