//! Player view of game state: what a single seat is allowed to see.
//!
//! [`PlayerView`] is the only input the opponent policies receive, and the
//! presentation layer uses it to render a seat's options. It never exposes
//! other players' hands, and bids follow the bidding visibility rule.

use serde::Serialize;

use crate::domain::bidding::{expected_bidder, visible_bids};
use crate::domain::rules::valid_bid_range;
use crate::domain::state::{require_player, GameState, Phase, PlayerId};
use crate::domain::tricks::{expected_player, legal_moves};
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

/// Information visible to a player at a decision point for the current round.
///
/// Use [`legal_bids`](Self::legal_bids) and [`legal_plays`](Self::legal_plays)
/// instead of re-deriving the rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub player_id: PlayerId,
    pub phase: Phase,
    pub round_no: u8,
    pub hand_size: u8,
    pub trump: Suit,
    /// Own hand, sorted for display.
    pub hand: Vec<Card>,
    pub bid: Option<u8>,
    pub tricks_won: u8,
    pub turn_order: Vec<PlayerId>,
    /// Bids this seat may see, in turn order.
    pub visible_bids: Vec<(PlayerId, u8)>,
    /// Tricks won this round by every seat, indexed by seat.
    pub tricks_won_all: Vec<u8>,
    pub trick_plays: Vec<(PlayerId, Card)>,
    pub leading_suit: Option<Suit>,
    pub first_trick_played: bool,
    pub trump_broken: bool,
    /// Cumulative scores indexed by seat.
    pub scores: Vec<i32>,
    /// Whether this seat is the one expected to act.
    pub to_act: bool,
    legal_plays: Vec<Card>,
}

impl PlayerView {
    /// Build the view for `who`.
    pub fn for_player(state: &GameState, who: PlayerId) -> Result<Self, DomainError> {
        let me = require_player(state, who)?;
        let to_act = match state.phase {
            Phase::Bidding => expected_bidder(state) == Some(who),
            Phase::Trick { .. } => expected_player(state) == Some(who),
            _ => false,
        };

        Ok(Self {
            player_id: who,
            phase: state.phase,
            round_no: state.round.round_no,
            hand_size: state.round.hand_size,
            trump: state.trump,
            hand: me.hand.clone(),
            bid: me.bid,
            tricks_won: me.tricks_won,
            turn_order: state.round.turn_order.clone(),
            visible_bids: visible_bids(state, who)?,
            tricks_won_all: state.players.iter().map(|p| p.tricks_won).collect(),
            trick_plays: state.round.trick.plays.clone(),
            leading_suit: state.round.trick.leading_suit,
            first_trick_played: state.round.first_trick_played,
            trump_broken: state.round.trump_broken,
            scores: state.players.iter().map(|p| p.score).collect(),
            to_act,
            legal_plays: legal_moves(state, who),
        })
    }

    /// Valid bids; empty outside this seat's bidding turn.
    pub fn legal_bids(&self) -> Vec<u8> {
        if self.phase != Phase::Bidding || !self.to_act {
            return Vec::new();
        }
        valid_bid_range(self.hand_size).collect()
    }

    /// Cards this seat may legally play into the current trick.
    pub fn legal_plays(&self) -> Vec<Card> {
        self.legal_plays.clone()
    }

    /// Tricks still needed to make the bid (0 once met or when no bid is set).
    pub fn tricks_needed(&self) -> u8 {
        self.bid
            .map(|b| b.saturating_sub(self.tricks_won))
            .unwrap_or(0)
    }

    pub fn player_count(&self) -> usize {
        self.turn_order.len()
    }
}
