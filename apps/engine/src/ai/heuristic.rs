//! Heuristic: the default bidding and card-play policy.
//!
//! Bidding: weigh the hand (trumps, non-trump honours, short suits), scale
//! the weight into an expected trick count, jitter it slightly and clamp to
//! the legal range.
//!
//! Play is bid-aware:
//! - still short of the bid: win as cheaply as possible, or lead strongly;
//! - bid already met: duck under the current best card, keeping trump back;
//! - nothing can win: shed the lowest card.

use std::sync::Mutex;

use rand::prelude::*;

use super::config::AiConfig;
use super::trait_def::{AiError, AiPlayer};
use crate::domain::cards_logic::{card_beats, current_best};
use crate::domain::player_view::PlayerView;
use crate::domain::{Card, Rank, Suit};

const TRUMP_WEIGHT: f64 = 1.0;
const VOID_BONUS: f64 = 0.3;
const SINGLETON_BONUS: f64 = 0.15;
const TRUMP_HEAVY_BOOST: f64 = 1.25;
/// Hand weight per expected trick.
const NORMALIZATION: f64 = 2.0;
pub const DEFAULT_NOISE: f64 = 0.5;
/// Largest accepted jitter half-width, in tricks.
pub const MAX_NOISE: f64 = 3.0;

fn honour_weight(rank: Rank) -> f64 {
    match rank {
        Rank::Ace => 0.6,
        Rank::King => 0.45,
        Rank::Queen => 0.3,
        Rank::Jack => 0.2,
        Rank::Ten => 0.1,
        _ => 0.0,
    }
}

/// Deterministic hand strength before normalization.
pub fn bid_weight(hand: &[Card], trump: Suit) -> f64 {
    let trumps = hand.iter().filter(|c| c.suit == trump).count();
    // At least a third of the hand in trump.
    let trump_heavy = !hand.is_empty() && trumps * 3 >= hand.len();
    let honour_scale = if trump_heavy { TRUMP_HEAVY_BOOST } else { 1.0 };

    let mut weight = trumps as f64 * TRUMP_WEIGHT;
    weight += hand
        .iter()
        .filter(|c| c.suit != trump && c.rank.is_honour())
        .map(|c| honour_weight(c.rank) * honour_scale)
        .sum::<f64>();

    for suit in Suit::ALL.into_iter().filter(|&s| s != trump) {
        match hand.iter().filter(|c| c.suit == suit).count() {
            0 => weight += VOID_BONUS,
            1 => weight += SINGLETON_BONUS,
            _ => {}
        }
    }
    weight
}

/// Expected tricks for `hand`, shifted by `jitter` and clamped to `0..=hand_size`.
pub fn estimate_bid(hand: &[Card], hand_size: u8, trump: Suit, jitter: f64) -> u8 {
    let estimate = bid_weight(hand, trump) / NORMALIZATION + jitter;
    estimate.round().clamp(0.0, hand_size as f64) as u8
}

fn is_trump(card: Card, trump: Suit) -> bool {
    card.suit == trump
}

/// Bid-aware card choice from `legal`.
///
/// `plays` is the trick so far; `needs_tricks` is true while the seat is
/// below its bid.
pub fn choose_card(
    legal: &[Card],
    plays: &[(u8, Card)],
    trump: Suit,
    needs_tricks: bool,
) -> Option<Card> {
    if legal.is_empty() {
        return None;
    }
    let cheapest = |cards: &[Card]| {
        cards
            .iter()
            .copied()
            .min_by_key(|&c| (is_trump(c, trump), c.rank))
    };

    let Some((_, best)) = current_best(plays, trump) else {
        return if needs_tricks {
            Some(strong_lead(legal, trump))
        } else {
            cheapest(legal)
        };
    };
    let lead = plays[0].1.suit;

    let (winners, losers): (Vec<Card>, Vec<Card>) = legal
        .iter()
        .partition(|&&c| card_beats(c, best, lead, trump));

    if needs_tricks {
        cheapest(&winners).or_else(|| {
            legal
                .iter()
                .copied()
                .min_by_key(|&c| (c.rank, is_trump(c, trump)))
        })
    } else {
        cheapest(&losers).or_else(|| cheapest(legal))
    }
}

/// Non-trump ace if held, else a card two thirds up the non-trump ranks.
fn strong_lead(legal: &[Card], trump: Suit) -> Card {
    let mut side: Vec<Card> = legal.iter().copied().filter(|c| c.suit != trump).collect();
    if let Some(ace) = side.iter().copied().find(|c| c.rank == Rank::Ace) {
        return ace;
    }
    if side.is_empty() {
        side = legal.to_vec();
    }
    side.sort_by_key(|c| (c.rank, c.suit));
    let idx = (side.len() * 2 / 3).min(side.len() - 1);
    side[idx]
}

pub struct Heuristic {
    rng: Mutex<StdRng>,
    noise: f64,
}

impl Heuristic {
    pub const NAME: &'static str = "Heuristic";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        Self::with_noise(seed, DEFAULT_NOISE)
    }

    /// `noise` is clamped to `0..=MAX_NOISE`; a non-finite value means `DEFAULT_NOISE`.
    pub fn with_noise(seed: Option<u64>, noise: f64) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        let noise = if noise.is_finite() {
            noise.abs().min(MAX_NOISE)
        } else {
            DEFAULT_NOISE
        };
        Self {
            rng: Mutex::new(rng),
            noise,
        }
    }

    pub fn from_config(config: &AiConfig) -> Self {
        Self::with_noise(config.seed(), config.noise().unwrap_or(DEFAULT_NOISE))
    }

    fn jitter(&self) -> Result<f64, AiError> {
        if self.noise == 0.0 {
            return Ok(0.0);
        }
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        Ok(rng.random_range(-self.noise..=self.noise))
    }
}

impl AiPlayer for Heuristic {
    fn choose_bid(&self, view: &PlayerView) -> Result<u8, AiError> {
        let legal = view.legal_bids();
        if legal.is_empty() {
            return Err(AiError::InvalidMove("No legal bids available".into()));
        }
        let bid = estimate_bid(&view.hand, view.hand_size, view.trump, self.jitter()?);
        if legal.contains(&bid) {
            Ok(bid)
        } else {
            Err(AiError::Internal(format!("estimated bid {bid} is not legal")))
        }
    }

    fn choose_play(&self, view: &PlayerView) -> Result<Card, AiError> {
        let legal = view.legal_plays();
        choose_card(&legal, &view.trick_plays, view.trump, view.tricks_needed() > 0)
            .ok_or_else(|| AiError::InvalidMove("No legal plays available".into()))
    }
}
