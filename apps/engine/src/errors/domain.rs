//! Domain-level error type for the rules engine.
//!
//! Every variant is a local, synchronous failure. Operations that return one
//! of these leave the game state exactly as it was before the call.

use thiserror::Error;

use crate::domain::state::{Phase, PlayerId};
use crate::domain::Card;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Fewer than two players at game start.
    #[error("at least {min} players are required, got {got}")]
    InsufficientPlayers { got: usize, min: usize },

    /// Bid submitted by someone other than the bid cursor's player.
    #[error("out of turn bid by player {who}, expected player {expected}")]
    OutOfTurnBid { who: PlayerId, expected: PlayerId },

    /// Bid outside `0..=hand_size`.
    #[error("bid {bid} outside valid range 0..={hand_size}")]
    InvalidBidRange { bid: u8, hand_size: u8 },

    /// Card played by someone other than the trick's next actor.
    #[error("out of turn play by player {who}, expected player {expected}")]
    OutOfTurnPlay { who: PlayerId, expected: PlayerId },

    /// Card not held, or held but not legal in the current trick.
    #[error("illegal card {card} for player {who}")]
    IllegalCard { who: PlayerId, card: Card },

    /// Round already scored.
    #[error("round {round_no} has already been scored")]
    DoubleScoring { round_no: u8 },

    /// Automatic-play loop hit its iteration cap.
    #[error("automation limit of {limit} steps exceeded")]
    AutomationLimitExceeded { limit: usize },

    /// Operation not valid in the current phase.
    #[error("phase mismatch: {operation} not allowed in {actual:?}")]
    PhaseMismatch {
        operation: &'static str,
        actual: Phase,
    },

    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("parse card: {0}")]
    ParseCard(String),

    /// Internal consistency violation.
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl DomainError {
    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    pub fn phase_mismatch(operation: &'static str, actual: Phase) -> Self {
        Self::PhaseMismatch { operation, actual }
    }

    /// Only the automation cap signals an engine defect rather than bad input.
    pub fn is_defect(&self) -> bool {
        matches!(
            self,
            DomainError::AutomationLimitExceeded { .. } | DomainError::Invariant(_)
        )
    }
}
