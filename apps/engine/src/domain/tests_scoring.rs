use crate::domain::events::GameEvent;
use crate::domain::scoring::{apply_round_scoring, leaders, round_points, standings};
use crate::domain::state::{GameState, Phase};
use crate::domain::test_state_helpers::{make_game_state, set_bids, MakeGameStateArgs};
use crate::errors::domain::DomainError;

fn scoring_state(hand_size: u8, bids: &[u8], tricks: &[u8]) -> GameState {
    let hands = vec![Vec::new(); bids.len()];
    let mut state = make_game_state(
        hands,
        MakeGameStateArgs {
            phase: Phase::Scoring,
            round_no: 3,
            hand_size,
            ..Default::default()
        },
    );
    set_bids(&mut state, bids);
    for (p, &t) in state.players.iter_mut().zip(tricks) {
        p.tricks_won = t;
    }
    state
}

#[test]
fn round_points_adds_bonus_only_on_exact_bid() {
    assert_eq!(round_points(2, Some(2)), 7);
    assert_eq!(round_points(0, Some(0)), 5);
    assert_eq!(round_points(3, Some(2)), 3);
    assert_eq!(round_points(1, Some(2)), 1);
    assert_eq!(round_points(1, None), 1);
}

#[test]
fn scoring_bonus_only_on_exact_bid() {
    let mut state = scoring_state(3, &[2, 0, 1, 0], &[2, 1, 0, 0]);
    let points = apply_round_scoring(&mut state).unwrap();
    assert_eq!(points, vec![7, 1, 0, 5]);
    let totals: Vec<i32> = state.players.iter().map(|p| p.score).collect();
    assert_eq!(totals, vec![7, 1, 0, 5]);
    assert_eq!(state.phase, Phase::RoundComplete);
}

#[test]
fn scoring_accumulates_across_rounds() {
    let mut state = scoring_state(3, &[1, 2], &[1, 2]);
    state.players[0].score = 10;
    state.players[1].score = 4;
    apply_round_scoring(&mut state).unwrap();
    assert_eq!(state.players[0].score, 16);
    assert_eq!(state.players[1].score, 11);
}

#[test]
fn scoring_twice_is_rejected_and_changes_nothing() {
    let mut state = scoring_state(2, &[1, 1], &[1, 1]);
    apply_round_scoring(&mut state).unwrap();
    let after_first = state.clone();

    let err = apply_round_scoring(&mut state).unwrap_err();
    assert_eq!(err, DomainError::DoubleScoring { round_no: 3 });
    assert_eq!(state, after_first);
}

#[test]
fn scoring_outside_scoring_phase_is_phase_mismatch() {
    let mut state = scoring_state(2, &[1, 1], &[1, 1]);
    state.phase = Phase::Trick { trick_no: 2 };
    assert!(matches!(
        apply_round_scoring(&mut state),
        Err(DomainError::PhaseMismatch { .. })
    ));
}

#[test]
fn scoring_records_history_and_events() {
    let mut state = scoring_state(3, &[2, 1], &[2, 1]);
    apply_round_scoring(&mut state).unwrap();
    let record = state.history.last().unwrap();
    assert_eq!(record.round_no, 3);
    assert_eq!(record.hand_size, 3);
    assert_eq!(record.bids, vec![2, 1]);
    assert_eq!(record.tricks_won, vec![2, 1]);
    assert_eq!(record.round_points, vec![7, 6]);
    assert!(state.events.contains(&GameEvent::RoundScored {
        round_no: 3,
        round_points: vec![7, 6],
    }));
}

#[test]
fn single_card_round_ends_the_game() {
    let mut state = scoring_state(1, &[1, 0, 0], &[1, 0, 0]);
    state.players[2].score = 1;
    apply_round_scoring(&mut state).unwrap();
    assert_eq!(state.phase, Phase::GameOver);
    // 6, 5, 6: seats 0 and 2 tie.
    assert_eq!(leaders(&state.players), vec![0, 2]);
    assert!(state
        .events
        .contains(&GameEvent::GameOver { winners: vec![0, 2] }));
}

#[test]
fn standings_sort_by_score_then_seat() {
    let mut state = scoring_state(2, &[0, 0, 0], &[0, 0, 0]);
    state.players[0].score = 3;
    state.players[1].score = 9;
    state.players[2].score = 3;
    assert_eq!(standings(&state.players), vec![(1, 9), (0, 3), (2, 3)]);
    assert_eq!(leaders(&state.players), vec![1]);
    assert!(leaders(&[]).is_empty());
}
