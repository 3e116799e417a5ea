use serde::Serialize;

use crate::domain::events::GameEvent;
use crate::domain::rules::TRUMP;
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

/// Seat index, 0-based in the order names were given at game start.
pub type PlayerId = u8;

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    /// No game in progress.
    Setup,
    /// Players place bids in turn order.
    Bidding,
    /// Playing tricks within the round; `trick_no` is 1-based.
    Trick { trick_no: u8 },
    /// All hands empty, round points not yet applied.
    Scoring,
    /// Round scored; waiting for the next round to be started.
    RoundComplete,
    /// Single-card round scored.
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Sorted by (suit group, rank).
    pub hand: Vec<Card>,
    pub bid: Option<u8>,
    pub tricks_won: u8,
    pub score: i32,
    pub is_human: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, is_human: bool) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Vec::new(),
            bid: None,
            tricks_won: 0,
            score: 0,
            is_human,
        }
    }
}

/// The trick currently on the table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Trick {
    /// Ordered plays (who, card).
    pub plays: Vec<(PlayerId, Card)>,
    pub leading_suit: Option<Suit>,
    /// Seat that opens this trick.
    pub leader: PlayerId,
}

impl Trick {
    pub fn led_by(leader: PlayerId) -> Self {
        Self {
            plays: Vec::new(),
            leading_suit: None,
            leader,
        }
    }
}

/// A resolved trick, kept for display until the next one resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletedTrick {
    pub trick_no: u8,
    pub plays: Vec<(PlayerId, Card)>,
    pub winner: PlayerId,
}

/// Per-round container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    /// 1-based; 0 before the first round.
    pub round_no: u8,
    pub hand_size: u8,
    /// Index into the seat list of the round's first actor.
    pub lead_index: usize,
    /// Seats rotated to start at `lead_index`.
    pub turn_order: Vec<PlayerId>,
    /// Number of bids placed; `turn_order[bid_cursor]` bids next.
    pub bid_cursor: usize,
    pub first_trick_played: bool,
    pub trump_broken: bool,
    pub trick: Trick,
    pub last_trick: Option<CompletedTrick>,
    /// Cards left in the deck after dealing.
    pub undealt: Vec<Card>,
    pub scored: bool,
}

impl RoundState {
    pub fn empty() -> Self {
        Self {
            round_no: 0,
            hand_size: 0,
            lead_index: 0,
            turn_order: Vec::new(),
            bid_cursor: 0,
            first_trick_played: false,
            trump_broken: false,
            trick: Trick::default(),
            last_trick: None,
            undealt: Vec::new(),
            scored: false,
        }
    }
}

/// Summary of a scored round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundRecord {
    pub round_no: u8,
    pub hand_size: u8,
    /// Indexed by seat.
    pub bids: Vec<u8>,
    pub tricks_won: Vec<u8>,
    pub round_points: Vec<i32>,
}

/// Entire game container, sufficient for pure domain operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub phase: Phase,
    pub trump: Suit,
    /// Indexed by `PlayerId`.
    pub players: Vec<Player>,
    pub round: RoundState,
    pub history: Vec<RoundRecord>,
    /// Events of the current round, oldest first.
    pub events: Vec<GameEvent>,
    /// Base seed every per-round seed is derived from.
    pub game_seed: u64,
}

impl GameState {
    pub fn new(game_seed: u64) -> Self {
        Self {
            phase: Phase::Setup,
            trump: TRUMP,
            players: Vec::new(),
            round: RoundState::empty(),
            history: Vec::new(),
            events: Vec::new(),
            game_seed,
        }
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn seat_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id).collect()
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id as usize)
    }

    pub fn all_hands_empty(&self) -> bool {
        self.players.iter().all(|p| p.hand.is_empty())
    }

    pub fn record(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

pub fn require_player(state: &GameState, id: PlayerId) -> Result<&Player, DomainError> {
    state.player(id).ok_or(DomainError::UnknownPlayer(id))
}

pub fn require_player_mut(state: &mut GameState, id: PlayerId) -> Result<&mut Player, DomainError> {
    state
        .players
        .get_mut(id as usize)
        .ok_or(DomainError::UnknownPlayer(id))
}

/// Returns the trick number when in the Trick phase.
pub fn require_trick_no(state: &GameState, operation: &'static str) -> Result<u8, DomainError> {
    match state.phase {
        Phase::Trick { trick_no } => Ok(trick_no),
        other => Err(DomainError::phase_mismatch(operation, other)),
    }
}

pub fn require_phase(
    state: &GameState,
    expected: Phase,
    operation: &'static str,
) -> Result<(), DomainError> {
    if state.phase == expected {
        Ok(())
    } else {
        Err(DomainError::phase_mismatch(operation, state.phase))
    }
}
