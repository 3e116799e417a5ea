use tracing::debug;

use crate::domain::cards_logic::{card_beats, hand_has_suit, hand_is_all_trump};
use crate::domain::events::GameEvent;
use crate::domain::seating::expected_actor;
use crate::domain::state::{
    require_player, require_trick_no, CompletedTrick, GameState, Phase, PlayerId, Trick,
};
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

/// Where the current trick stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrickStage {
    AwaitingLead,
    /// `k` cards already on the table.
    AwaitingFollow(u8),
}

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// The trick this card completed, if any.
    pub trick_completed: Option<CompletedTrick>,
    /// True when this card broke trump.
    pub trump_broken_now: bool,
    /// Phase transitioned to, if any (None means still in Trick phase).
    pub phase_transitioned: Option<Phase>,
}

pub fn trick_stage(state: &GameState) -> Option<TrickStage> {
    let Phase::Trick { .. } = state.phase else {
        return None;
    };
    match state.round.trick.plays.len() {
        0 => Some(TrickStage::AwaitingLead),
        k => Some(TrickStage::AwaitingFollow(k as u8)),
    }
}

/// Seat expected to play next, if a trick is in progress.
pub fn expected_player(state: &GameState) -> Option<PlayerId> {
    let Phase::Trick { .. } = state.phase else {
        return None;
    };
    let trick = &state.round.trick;
    Some(expected_actor(
        trick.leader,
        trick.plays.len(),
        state.player_count(),
    ))
}

/// Legal cards for a hand given the table situation.
///
/// Follow suit when able. A void player may discard anything except that
/// trump is withheld on the first trick. A leader may not open with trump on
/// the first trick, nor later until trump is broken. Holding nothing but
/// trump lifts every trump restriction.
pub fn legal_moves_for(
    hand: &[Card],
    leading_suit: Option<Suit>,
    first_trick_played: bool,
    trump_broken: bool,
    trump: Suit,
) -> Vec<Card> {
    if hand.is_empty() {
        return Vec::new();
    }

    let mut legal: Vec<Card> = match leading_suit {
        Some(lead) if hand_has_suit(hand, lead) => {
            hand.iter().copied().filter(|c| c.suit == lead).collect()
        }
        _ => {
            let trump_allowed = hand_is_all_trump(hand, trump)
                || (leading_suit.is_some() && first_trick_played)
                || (leading_suit.is_none() && first_trick_played && trump_broken);
            if trump_allowed {
                hand.to_vec()
            } else {
                hand.iter().copied().filter(|c| c.suit != trump).collect()
            }
        }
    };
    legal.sort();
    legal
}

/// Compute legal cards the player may play, independent of turn enforcement.
pub fn legal_moves(state: &GameState, who: PlayerId) -> Vec<Card> {
    let Phase::Trick { .. } = state.phase else {
        return Vec::new();
    };
    let Some(player) = state.player(who) else {
        return Vec::new();
    };
    legal_moves_for(
        &player.hand,
        state.round.trick.leading_suit,
        state.round.first_trick_played,
        state.round.trump_broken,
        state.trump,
    )
}

/// Winner of a set of plays: highest trump if any, else highest card of the
/// leading suit. Independent of play order.
pub fn resolve_trick(
    plays: &[(PlayerId, Card)],
    leading_suit: Suit,
    trump: Suit,
) -> Option<PlayerId> {
    let mut best = *plays.first()?;
    for &play in &plays[1..] {
        if card_beats(play.1, best.1, leading_suit, trump) {
            best = play;
        }
    }
    Some(best.0)
}

/// Play a card into the current trick, enforcing phase, turn and legality.
///
/// A completing card resolves the trick in place: the winner is credited,
/// leads the next trick, and the round moves to `Scoring` once every hand is
/// empty.
pub fn play_card(
    state: &mut GameState,
    who: PlayerId,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    let trick_no = require_trick_no(state, "play_card")?;
    require_player(state, who)?;

    let expected = expected_player(state)
        .ok_or_else(|| DomainError::invariant("trick phase with no expected player"))?;
    if who != expected {
        return Err(DomainError::OutOfTurnPlay { who, expected });
    }

    // Legality implies the card is held.
    if !legal_moves(state, who).contains(&card) {
        return Err(DomainError::IllegalCard { who, card });
    }
    let pos = state.players[who as usize]
        .hand
        .iter()
        .position(|&c| c == card)
        .ok_or_else(|| DomainError::invariant("legal card missing from hand"))?;

    state.players[who as usize].hand.remove(pos);
    let round = &mut state.round;
    if round.trick.plays.is_empty() {
        round.trick.leading_suit = Some(card.suit);
    }
    round.trick.plays.push((who, card));

    let trump_broken_now =
        card.suit == state.trump && round.first_trick_played && !round.trump_broken;
    if trump_broken_now {
        round.trump_broken = true;
    }

    state.record(GameEvent::CardPlayed {
        player_id: who,
        card,
    });
    if trump_broken_now {
        state.record(GameEvent::TrumpBroken { player_id: who });
    }
    debug!(player_id = who, %card, trick_no, "Card played");

    let mut result = PlayCardResult {
        trick_completed: None,
        trump_broken_now,
        phase_transitioned: None,
    };

    if state.round.trick.plays.len() < state.player_count() {
        return Ok(result);
    }

    let completed = complete_trick(state, trick_no)?;
    result.trick_completed = Some(completed);

    if state.all_hands_empty() {
        state.phase = Phase::Scoring;
        result.phase_transitioned = Some(Phase::Scoring);
        debug!(round_no = state.round.round_no, "All hands empty");
    } else {
        state.phase = Phase::Trick {
            trick_no: trick_no.saturating_add(1),
        };
    }
    Ok(result)
}

fn complete_trick(state: &mut GameState, trick_no: u8) -> Result<CompletedTrick, DomainError> {
    let lead = state
        .round
        .trick
        .leading_suit
        .ok_or_else(|| DomainError::invariant("completed trick has no leading suit"))?;
    let winner = resolve_trick(&state.round.trick.plays, lead, state.trump)
        .ok_or_else(|| DomainError::invariant("completed trick has no plays"))?;

    state.players[winner as usize].tricks_won += 1;

    let plays = std::mem::replace(&mut state.round.trick, Trick::led_by(winner)).plays;
    let completed = CompletedTrick {
        trick_no,
        plays,
        winner,
    };
    state.round.last_trick = Some(completed.clone());
    state.round.first_trick_played = true;

    state.record(GameEvent::TrickWon { trick_no, winner });
    debug!(trick_no, winner, "Trick won");
    Ok(completed)
}
