//! AI player trait definition.

use thiserror::Error;

use crate::domain::player_view::PlayerView;
use crate::domain::Card;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("AI internal error: {0}")]
    Internal(String),
    #[error("AI invalid move: {0}")]
    InvalidMove(String),
}

/// A seat's decision policy.
///
/// Both methods receive only what the seat may see. Implementations must
/// return a choice from `legal_bids()` / `legal_plays()`; the engine
/// re-validates and rejects anything else.
pub trait AiPlayer: Send + Sync {
    fn choose_bid(&self, view: &PlayerView) -> Result<u8, AiError>;

    fn choose_play(&self, view: &PlayerView) -> Result<Card, AiError>;
}
