//! Game setup, dealing a round, and moving on to the next one.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::domain::dealing::deal_hands;
use crate::domain::events::GameEvent;
use crate::domain::rules::{hand_size_for_round, next_hand_size, MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::seating::{derive_turn_order, initial_lead_index, next_lead_index};
use crate::domain::seed_derivation::{derive_dealing_seed, derive_lead_seed};
use crate::domain::state::{GameState, Phase, Player, PlayerId, RoundState, Trick};
use crate::errors::domain::DomainError;

/// Split a comma-separated name list, trimming and dropping blanks.
pub fn parse_player_names(raw: &str) -> Vec<String> {
    normalize_names(raw.split(','))
}

/// Trim each name and drop the blank ones.
pub fn normalize_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|n| n.as_ref().trim().to_string())
        .filter(|n| !n.is_empty())
        .collect()
}

/// Seat the players and deal the first round.
///
/// `human` marks at most one seat as human-controlled. The first lead seat
/// is drawn from the lead seed so the whole game replays from `game_seed`.
pub fn start_game<S: AsRef<str>>(
    names: &[S],
    human: Option<PlayerId>,
    game_seed: u64,
) -> Result<GameState, DomainError> {
    let names = normalize_names(names);
    if names.len() < MIN_PLAYERS {
        return Err(DomainError::InsufficientPlayers {
            got: names.len(),
            min: MIN_PLAYERS,
        });
    }
    if names.len() > MAX_PLAYERS {
        return Err(DomainError::invariant(format!(
            "at most {MAX_PLAYERS} players fit a single deck, got {}",
            names.len()
        )));
    }
    if let Some(seat) = human {
        if seat as usize >= names.len() {
            return Err(DomainError::UnknownPlayer(seat));
        }
    }

    let mut state = GameState::new(game_seed);
    state.players = names
        .into_iter()
        .enumerate()
        .map(|(i, name)| Player::new(i as PlayerId, name, human == Some(i as PlayerId)))
        .collect();

    let hand_size = hand_size_for_round(state.player_count(), 1)
        .ok_or_else(|| DomainError::invariant("no valid hand size for table"))?;
    let mut lead_rng = StdRng::seed_from_u64(derive_lead_seed(game_seed));
    let lead_index = initial_lead_index(state.player_count(), &mut lead_rng);

    start_round(&mut state, hand_size, lead_index)?;
    Ok(state)
}

/// Deal a fresh round and open bidding.
///
/// Increments the round number, rebuilds and reshuffles the deck, resets
/// per-round player fields and clears the event log.
pub fn start_round(
    state: &mut GameState,
    hand_size: u8,
    lead_index: usize,
) -> Result<(), DomainError> {
    let n = state.player_count();
    if n < MIN_PLAYERS {
        return Err(DomainError::InsufficientPlayers {
            got: n,
            min: MIN_PLAYERS,
        });
    }
    if lead_index >= n {
        return Err(DomainError::invariant(format!(
            "lead index {lead_index} out of range for {n} players"
        )));
    }

    let round_no = state.round.round_no.saturating_add(1);
    let deal = deal_hands(n, hand_size, derive_dealing_seed(state.game_seed, round_no))?;

    for (player, hand) in state.players.iter_mut().zip(deal.hands) {
        player.hand = hand;
        player.bid = None;
        player.tricks_won = 0;
    }

    let turn_order = derive_turn_order(&state.seat_ids(), lead_index);
    let lead = turn_order[0];
    state.round = RoundState {
        round_no,
        hand_size,
        lead_index,
        turn_order,
        bid_cursor: 0,
        first_trick_played: false,
        trump_broken: false,
        trick: Trick::led_by(lead),
        last_trick: None,
        undealt: deal.undealt,
        scored: false,
    };
    state.phase = Phase::Bidding;
    state.events.clear();
    state.record(GameEvent::RoundStarted {
        round_no,
        hand_size,
        lead,
    });

    info!(
        round_no,
        hand_size,
        lead,
        undealt = state.round.undealt.len(),
        "Round started"
    );
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextRound {
    Started { round_no: u8, hand_size: u8 },
    /// The single-card round has been played; nothing is dealt.
    GameComplete,
}

/// Advance from a scored round to the next one.
///
/// After the final round this is a no-op reporting `GameComplete`.
pub fn start_next_round(state: &mut GameState) -> Result<NextRound, DomainError> {
    match state.phase {
        Phase::GameOver => Ok(NextRound::GameComplete),
        Phase::RoundComplete => {
            let Some(hand_size) = next_hand_size(state.round.hand_size) else {
                return Ok(NextRound::GameComplete);
            };
            let lead_index = next_lead_index(state.round.lead_index, state.player_count());
            start_round(state, hand_size, lead_index)?;
            Ok(NextRound::Started {
                round_no: state.round.round_no,
                hand_size,
            })
        }
        other => Err(DomainError::phase_mismatch("start_next_round", other)),
    }
}
