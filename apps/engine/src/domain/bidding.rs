use tracing::debug;

use crate::domain::events::GameEvent;
use crate::domain::rules::valid_bid_range;
use crate::domain::seating::position_in;
use crate::domain::state::{require_phase, require_player, GameState, Phase, PlayerId, Trick};
use crate::errors::domain::DomainError;

/// Result of placing a bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceBidResult {
    /// Next bidder, or None when bidding just closed.
    pub next_bidder: Option<PlayerId>,
    /// Phase transitioned to, if any.
    pub phase_transitioned: Option<Phase>,
}

/// Seat whose bid is expected next, if bidding is open.
pub fn expected_bidder(state: &GameState) -> Option<PlayerId> {
    if state.phase != Phase::Bidding {
        return None;
    }
    state.round.turn_order.get(state.round.bid_cursor).copied()
}

/// Bids `who` may place right now; empty when it is not their turn.
pub fn legal_bids(state: &GameState, who: PlayerId) -> Vec<u8> {
    if expected_bidder(state) != Some(who) {
        return Vec::new();
    }
    valid_bid_range(state.round.hand_size).collect()
}

pub fn bidding_complete(state: &GameState) -> bool {
    !state.players.is_empty() && state.players.iter().all(|p| p.bid.is_some())
}

/// Place a bid for `who`, enforcing phase, turn order and range.
///
/// When the last bid lands the round moves to `Trick { trick_no: 1 }` with
/// the round's lead seat opening.
pub fn place_bid(
    state: &mut GameState,
    who: PlayerId,
    bid: u8,
) -> Result<PlaceBidResult, DomainError> {
    require_phase(state, Phase::Bidding, "place_bid")?;
    require_player(state, who)?;

    let expected = expected_bidder(state)
        .ok_or_else(|| DomainError::invariant("bidding phase with no bidder left"))?;
    if who != expected {
        return Err(DomainError::OutOfTurnBid { who, expected });
    }

    let hand_size = state.round.hand_size;
    if !valid_bid_range(hand_size).contains(&bid) {
        return Err(DomainError::InvalidBidRange { bid, hand_size });
    }

    state.players[who as usize].bid = Some(bid);
    state.round.bid_cursor += 1;
    state.record(GameEvent::BidPlaced { player_id: who, bid });
    debug!(player_id = who, bid, "Bid placed");

    if state.round.bid_cursor < state.round.turn_order.len() {
        return Ok(PlaceBidResult {
            next_bidder: expected_bidder(state),
            phase_transitioned: None,
        });
    }

    let lead = state.round.turn_order[0];
    state.round.trick = Trick::led_by(lead);
    state.phase = Phase::Trick { trick_no: 1 };
    debug!(lead, "Bidding complete");

    Ok(PlaceBidResult {
        next_bidder: None,
        phase_transitioned: Some(state.phase),
    })
}

/// Bids `viewer` is allowed to see, in turn order.
///
/// Before bidding, a player sees only the bids of seats strictly earlier in
/// turn order. Once their own bid is placed every placed bid is visible.
pub fn visible_bids(
    state: &GameState,
    viewer: PlayerId,
) -> Result<Vec<(PlayerId, u8)>, DomainError> {
    let me = require_player(state, viewer)?;
    let order = &state.round.turn_order;

    let cutoff = if me.bid.is_some() {
        order.len()
    } else {
        position_in(order, viewer).unwrap_or(0)
    };

    Ok(order[..cutoff]
        .iter()
        .filter_map(|&pid| {
            state
                .player(pid)
                .and_then(|p| p.bid)
                .map(|bid| (pid, bid))
        })
        .collect())
}
