//! Random AI player: uniform choice among legal moves.
//!
//! Kept as the configurable fallback policy and as the reference
//! [`AiPlayer`](super::AiPlayer) implementation: interior-mutable RNG behind a
//! `Mutex`, optional seeding, no panics, legal-move helpers only.

use std::sync::Mutex;

use rand::prelude::*;

use super::config::AiConfig;
use super::trait_def::{AiError, AiPlayer};
use crate::domain::player_view::PlayerView;
use crate::domain::Card;

pub struct RandomPlayer {
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

    /// `None` seeds from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    pub fn from_config(config: &AiConfig) -> Self {
        Self::new(config.seed())
    }

    fn pick<T: Copy>(&self, options: &[T], what: &str) -> Result<T, AiError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        options
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::InvalidMove(format!("No legal {what} available")))
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_bid(&self, view: &PlayerView) -> Result<u8, AiError> {
        self.pick(&view.legal_bids(), "bids")
    }

    fn choose_play(&self, view: &PlayerView) -> Result<Card, AiError> {
        self.pick(&view.legal_plays(), "plays")
    }
}
