//! Deck construction and deterministic round-robin dealing.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::domain::rules::{DECK_SIZE, MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

/// Generate a full 52-card deck in standard order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Uniform random permutation (Fisher-Yates).
pub fn shuffle<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// Outcome of a deal: one hand per seat plus the cards left out of this round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub hands: Vec<Vec<Card>>,
    pub undealt: Vec<Card>,
}

/// Deal hands deterministically given player count, hand size, and RNG seed.
///
/// A fresh deck is built and shuffled on every call. Cards go out one per
/// seat per pass; whatever is left after `hand_size` passes stays undealt.
/// Hands are sorted for display.
pub fn deal_hands(player_count: usize, hand_size: u8, seed: u64) -> Result<Deal, DomainError> {
    if player_count < MIN_PLAYERS {
        return Err(DomainError::InsufficientPlayers {
            got: player_count,
            min: MIN_PLAYERS,
        });
    }
    if player_count > MAX_PLAYERS {
        return Err(DomainError::invariant(format!(
            "at most {MAX_PLAYERS} players can be dealt in, got {player_count}"
        )));
    }

    let total_cards = player_count * hand_size as usize;
    if hand_size == 0 || total_cards > DECK_SIZE {
        return Err(DomainError::invariant(format!(
            "hand size {hand_size} cannot be dealt to {player_count} players"
        )));
    }

    let mut deck = full_deck();
    let mut rng = StdRng::seed_from_u64(seed);
    shuffle(&mut deck, &mut rng);

    let mut hands: Vec<Vec<Card>> = vec![Vec::with_capacity(hand_size as usize); player_count];
    for _ in 0..hand_size {
        for hand in hands.iter_mut() {
            let card = deck
                .pop()
                .ok_or_else(|| DomainError::invariant("deck exhausted while dealing"))?;
            hand.push(card);
        }
    }
    for hand in hands.iter_mut() {
        hand.sort();
    }

    Ok(Deal {
        hands,
        undealt: deck,
    })
}
