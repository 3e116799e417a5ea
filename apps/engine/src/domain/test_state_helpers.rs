//! Test-only game state builders for domain unit tests.

use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::rules::TRUMP;
use crate::domain::seating::derive_turn_order;
use crate::domain::state::{GameState, Phase, Player, PlayerId, RoundState, Trick};
use crate::domain::Card;

pub struct MakeGameStateArgs {
    pub phase: Phase,
    pub round_no: u8,
    pub hand_size: u8,
    pub lead_index: usize,
    pub first_trick_played: bool,
    pub trump_broken: bool,
}

impl Default for MakeGameStateArgs {
    fn default() -> Self {
        Self {
            phase: Phase::Trick { trick_no: 1 },
            round_no: 1,
            hand_size: 0,
            lead_index: 0,
            first_trick_played: false,
            trump_broken: false,
        }
    }
}

/// Build a state with the given hands; `hand_size` defaults to the first hand's length.
pub fn make_game_state(hands: Vec<Vec<Card>>, args: MakeGameStateArgs) -> GameState {
    let hand_size = if args.hand_size == 0 {
        hands.first().map(|h| h.len() as u8).unwrap_or(0)
    } else {
        args.hand_size
    };

    let mut state = GameState::new(0);
    state.trump = TRUMP;
    state.players = hands
        .into_iter()
        .enumerate()
        .map(|(i, mut hand)| {
            hand.sort();
            let mut p = Player::new(i as PlayerId, format!("P{i}"), false);
            p.hand = hand;
            p
        })
        .collect();

    let turn_order = derive_turn_order(&state.seat_ids(), args.lead_index);
    let lead = turn_order.first().copied().unwrap_or(0);
    state.round = RoundState {
        round_no: args.round_no,
        hand_size,
        lead_index: args.lead_index,
        bid_cursor: if args.phase == Phase::Bidding {
            0
        } else {
            turn_order.len()
        },
        turn_order,
        first_trick_played: args.first_trick_played,
        trump_broken: args.trump_broken,
        trick: Trick::led_by(lead),
        last_trick: None,
        undealt: Vec::new(),
        scored: false,
    };
    state.phase = args.phase;
    state
}

/// Parse a list of card tokens.
pub fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("valid card tokens")
}

/// Set every player's bid, as if bidding had completed.
pub fn set_bids(state: &mut GameState, bids: &[u8]) {
    for (p, &b) in state.players.iter_mut().zip(bids) {
        p.bid = Some(b);
    }
}
