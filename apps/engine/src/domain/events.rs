//! Per-round event log, appended by domain operations as they succeed.

use serde::Serialize;

use crate::domain::state::PlayerId;
use crate::domain::Card;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    RoundStarted {
        round_no: u8,
        hand_size: u8,
        lead: PlayerId,
    },
    BidPlaced {
        player_id: PlayerId,
        bid: u8,
    },
    CardPlayed {
        player_id: PlayerId,
        card: Card,
    },
    /// Edge-triggered: the first trump after the first trick.
    TrumpBroken {
        player_id: PlayerId,
    },
    TrickWon {
        trick_no: u8,
        winner: PlayerId,
    },
    RoundScored {
        round_no: u8,
        round_points: Vec<i32>,
    },
    GameOver {
        winners: Vec<PlayerId>,
    },
}
