use tracing::info;

use crate::domain::events::GameEvent;
use crate::domain::rules::EXACT_BID_BONUS;
use crate::domain::state::{GameState, Phase, Player, PlayerId, RoundRecord};
use crate::errors::domain::DomainError;

/// Points for one player's round: tricks won plus the exact-bid bonus.
pub fn round_points(tricks_won: u8, bid: Option<u8>) -> i32 {
    let bonus = match bid {
        Some(b) if b == tricks_won => EXACT_BID_BONUS,
        _ => 0,
    };
    tricks_won as i32 + bonus
}

/// Per-seat round points for the current round, without applying them.
pub fn preview_round_points(state: &GameState) -> Vec<i32> {
    state
        .players
        .iter()
        .map(|p| round_points(p.tricks_won, p.bid))
        .collect()
}

/// Apply per-round scoring and transition to RoundComplete or GameOver.
///
/// A round is scored at most once; a repeat call is rejected with
/// `DoubleScoring` and changes nothing.
pub fn apply_round_scoring(state: &mut GameState) -> Result<Vec<i32>, DomainError> {
    if state.round.scored {
        return Err(DomainError::DoubleScoring {
            round_no: state.round.round_no,
        });
    }
    if state.phase != Phase::Scoring {
        return Err(DomainError::phase_mismatch("score_round", state.phase));
    }

    let points = preview_round_points(state);
    for (player, pts) in state.players.iter_mut().zip(&points) {
        player.score += pts;
    }

    let record = RoundRecord {
        round_no: state.round.round_no,
        hand_size: state.round.hand_size,
        bids: state.players.iter().map(|p| p.bid.unwrap_or(0)).collect(),
        tricks_won: state.players.iter().map(|p| p.tricks_won).collect(),
        round_points: points.clone(),
    };
    state.history.push(record);
    state.round.scored = true;
    state.record(GameEvent::RoundScored {
        round_no: state.round.round_no,
        round_points: points.clone(),
    });
    info!(
        round_no = state.round.round_no,
        hand_size = state.round.hand_size,
        ?points,
        "Round scored"
    );

    if state.round.hand_size <= 1 {
        state.phase = Phase::GameOver;
        let winners = leaders(&state.players);
        state.record(GameEvent::GameOver {
            winners: winners.clone(),
        });
        info!(?winners, "Game over");
    } else {
        state.phase = Phase::RoundComplete;
    }
    Ok(points)
}

/// Seats ordered by cumulative score, highest first; ties keep seat order.
pub fn standings(players: &[Player]) -> Vec<(PlayerId, i32)> {
    let mut table: Vec<(PlayerId, i32)> = players.iter().map(|p| (p.id, p.score)).collect();
    table.sort_by(|a, b| b.1.cmp(&a.1));
    table
}

/// Every seat sharing the highest cumulative score.
pub fn leaders(players: &[Player]) -> Vec<PlayerId> {
    let Some(top) = players.iter().map(|p| p.score).max() else {
        return Vec::new();
    };
    players
        .iter()
        .filter(|p| p.score == top)
        .map(|p| p.id)
        .collect()
}
