use engine::domain::cards_parsing::try_parse_cards;
use engine::domain::seating::derive_turn_order;
use engine::domain::{Card, GameState, Phase, Player, PlayerId, RoundState, Trick};

pub fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("valid card tokens")
}

pub fn card(token: &str) -> Card {
    token.parse().expect("valid card token")
}

/// Trick-phase state with explicit hands; seat `lead_index` leads.
pub fn trick_state(
    hands: Vec<Vec<Card>>,
    hand_size: u8,
    trick_no: u8,
    lead_index: usize,
    first_trick_played: bool,
    trump_broken: bool,
) -> GameState {
    let mut state = GameState::new(1);
    state.players = hands
        .into_iter()
        .enumerate()
        .map(|(i, mut hand)| {
            hand.sort();
            let mut p = Player::new(i as PlayerId, format!("P{i}"), false);
            p.hand = hand;
            p.bid = Some(0);
            p
        })
        .collect();
    let turn_order = derive_turn_order(&state.seat_ids(), lead_index);
    state.round = RoundState {
        round_no: 1,
        hand_size,
        lead_index,
        bid_cursor: turn_order.len(),
        trick: Trick::led_by(turn_order[0]),
        turn_order,
        first_trick_played,
        trump_broken,
        last_trick: None,
        undealt: Vec::new(),
        scored: false,
    };
    state.phase = Phase::Trick { trick_no };
    state
}
