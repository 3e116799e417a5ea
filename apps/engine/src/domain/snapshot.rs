//! Public snapshot API for observing game state without exposing internals.

use serde::Serialize;

use crate::domain::bidding::expected_bidder;
use crate::domain::events::GameEvent;
use crate::domain::rules::{total_rounds, valid_bid_range};
use crate::domain::scoring::{leaders, preview_round_points};
use crate::domain::state::{CompletedTrick, GameState, Phase, PlayerId, RoundRecord};
use crate::domain::tricks::expected_player;
use crate::domain::{Card, Suit};

/// Public info about a single seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SeatPublic {
    pub seat: PlayerId,
    pub name: String,
    pub is_human: bool,
    pub score: i32,
    pub cards_in_hand: usize,
}

/// Game-level header present in all snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameHeader {
    pub round_no: u8,
    /// 0 before any players are seated.
    pub total_rounds: u8,
    pub trump: Suit,
    pub seating: Vec<SeatPublic>,
    pub previous_round: Option<RoundRecord>,
}

/// Shared public round facts (no private hands, no bids).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundPublic {
    pub hand_size: u8,
    pub lead: PlayerId,
    pub turn_order: Vec<PlayerId>,
    pub tricks_won: Vec<u8>,
    pub undealt: usize,
    pub trump_broken: bool,
}

/// Top-level snapshot combining header and phase-specific data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub game: GameHeader,
    pub phase: PhaseSnapshot,
    pub events: Vec<GameEvent>,
}

/// Adjacently tagged union of phase-specific snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", content = "data")]
pub enum PhaseSnapshot {
    Setup,
    Bidding(BiddingSnapshot),
    Trick(TrickSnapshot),
    Scoring(ScoringSnapshot),
    RoundComplete(CompleteSnapshot),
    GameOver(GameOverSnapshot),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BiddingSnapshot {
    pub round: RoundPublic,
    pub to_act: PlayerId,
    /// Number of bids already placed; the values stay hidden.
    pub bids_placed: usize,
    pub min_bid: u8,
    pub max_bid: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TrickSnapshot {
    pub round: RoundPublic,
    pub trick_no: u8,
    pub leader: PlayerId,
    pub to_act: PlayerId,
    pub current_trick: Vec<(PlayerId, Card)>,
    pub leading_suit: Option<Suit>,
    pub bids: Vec<Option<u8>>,
    pub last_trick: Option<CompletedTrick>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScoringSnapshot {
    pub round: RoundPublic,
    pub bids: Vec<Option<u8>>,
    /// Points each seat will receive once the round is scored.
    pub round_points: Vec<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompleteSnapshot {
    pub round: RoundPublic,
    pub bids: Vec<Option<u8>>,
    pub last_trick: Option<CompletedTrick>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameOverSnapshot {
    pub final_scores: Vec<i32>,
    pub winners: Vec<PlayerId>,
}

fn round_public(state: &GameState) -> RoundPublic {
    RoundPublic {
        hand_size: state.round.hand_size,
        lead: state.round.turn_order.first().copied().unwrap_or(0),
        turn_order: state.round.turn_order.clone(),
        tricks_won: state.players.iter().map(|p| p.tricks_won).collect(),
        undealt: state.round.undealt.len(),
        trump_broken: state.round.trump_broken,
    }
}

fn bids(state: &GameState) -> Vec<Option<u8>> {
    state.players.iter().map(|p| p.bid).collect()
}

/// Produce a public snapshot; never mutates state.
pub fn snapshot(state: &GameState) -> GameSnapshot {
    let game = GameHeader {
        round_no: state.round.round_no,
        total_rounds: total_rounds(state.player_count()).unwrap_or(0),
        trump: state.trump,
        seating: state
            .players
            .iter()
            .map(|p| SeatPublic {
                seat: p.id,
                name: p.name.clone(),
                is_human: p.is_human,
                score: p.score,
                cards_in_hand: p.hand.len(),
            })
            .collect(),
        previous_round: state.history.last().cloned(),
    };

    let phase = match state.phase {
        Phase::Setup => PhaseSnapshot::Setup,
        Phase::Bidding => PhaseSnapshot::Bidding(BiddingSnapshot {
            round: round_public(state),
            to_act: expected_bidder(state).unwrap_or(0),
            bids_placed: state.round.bid_cursor,
            min_bid: *valid_bid_range(state.round.hand_size).start(),
            max_bid: *valid_bid_range(state.round.hand_size).end(),
        }),
        Phase::Trick { trick_no } => PhaseSnapshot::Trick(TrickSnapshot {
            round: round_public(state),
            trick_no,
            leader: state.round.trick.leader,
            to_act: expected_player(state).unwrap_or(state.round.trick.leader),
            current_trick: state.round.trick.plays.clone(),
            leading_suit: state.round.trick.leading_suit,
            bids: bids(state),
            last_trick: state.round.last_trick.clone(),
        }),
        Phase::Scoring => PhaseSnapshot::Scoring(ScoringSnapshot {
            round: round_public(state),
            bids: bids(state),
            round_points: preview_round_points(state),
        }),
        Phase::RoundComplete => PhaseSnapshot::RoundComplete(CompleteSnapshot {
            round: round_public(state),
            bids: bids(state),
            last_trick: state.round.last_trick.clone(),
        }),
        Phase::GameOver => PhaseSnapshot::GameOver(GameOverSnapshot {
            final_scores: state.players.iter().map(|p| p.score).collect(),
            winners: leaders(&state.players),
        }),
    };

    GameSnapshot {
        game,
        phase,
        events: state.events.clone(),
    }
}
