use crate::domain::events::GameEvent;
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{cards, make_game_state, set_bids, MakeGameStateArgs};
use crate::domain::tricks::{expected_player, legal_moves, play_card, trick_stage, TrickStage};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

fn c(token: &str) -> Card {
    token.parse().unwrap()
}

#[test]
fn all_trump_hand_may_lead_trump_on_first_trick() {
    let hands = vec![
        cards(&["2H", "7H", "KH"]),
        cards(&["2C", "3C", "4C"]),
        cards(&["2D", "3D", "4D"]),
        cards(&["2S", "3S", "4S"]),
    ];
    let state = make_game_state(hands, MakeGameStateArgs::default());
    assert_eq!(legal_moves(&state, 0), cards(&["2H", "7H", "KH"]));
}

#[test]
fn leading_unbroken_trump_after_first_trick_is_illegal() {
    let hands = vec![
        cards(&["5H", "9C"]),
        cards(&["2C", "3C"]),
        cards(&["2D", "3D"]),
        cards(&["2S", "3S"]),
    ];
    let mut state = make_game_state(
        hands,
        MakeGameStateArgs {
            phase: Phase::Trick { trick_no: 2 },
            hand_size: 3,
            first_trick_played: true,
            trump_broken: false,
            ..Default::default()
        },
    );
    let before = state.clone();
    let err = play_card(&mut state, 0, c("5H")).unwrap_err();
    assert_eq!(err, DomainError::IllegalCard { who: 0, card: c("5H") });
    assert_eq!(state, before);
}

#[test]
fn card_not_in_hand_is_illegal() {
    let hands = vec![cards(&["5C", "9C"]), cards(&["2C", "3C"])];
    let mut state = make_game_state(hands, MakeGameStateArgs::default());
    assert_eq!(
        play_card(&mut state, 0, c("AS")).unwrap_err(),
        DomainError::IllegalCard { who: 0, card: c("AS") }
    );
}

#[test]
fn out_of_turn_play_is_rejected() {
    let hands = vec![cards(&["5C", "9C"]), cards(&["2C", "3C"])];
    let mut state = make_game_state(hands, MakeGameStateArgs::default());
    let before = state.clone();
    assert_eq!(
        play_card(&mut state, 1, c("2C")).unwrap_err(),
        DomainError::OutOfTurnPlay { who: 1, expected: 0 }
    );
    assert_eq!(state, before);
}

#[test]
fn play_outside_trick_phase_is_phase_mismatch() {
    let hands = vec![cards(&["5C"]), cards(&["2C"])];
    let mut state = make_game_state(
        hands,
        MakeGameStateArgs {
            phase: Phase::Bidding,
            ..Default::default()
        },
    );
    assert_eq!(
        play_card(&mut state, 0, c("5C")).unwrap_err(),
        DomainError::phase_mismatch("play_card", Phase::Bidding)
    );
}

#[test]
fn trick_stages_and_actor_rotation() {
    let hands = vec![
        cards(&["5C", "9D"]),
        cards(&["2C", "3D"]),
        cards(&["7C", "4D"]),
    ];
    let mut state = make_game_state(
        hands,
        MakeGameStateArgs {
            lead_index: 1,
            ..Default::default()
        },
    );
    assert_eq!(trick_stage(&state), Some(TrickStage::AwaitingLead));
    assert_eq!(expected_player(&state), Some(1));

    play_card(&mut state, 1, c("2C")).unwrap();
    assert_eq!(trick_stage(&state), Some(TrickStage::AwaitingFollow(1)));
    assert_eq!(expected_player(&state), Some(2));
    assert_eq!(state.round.trick.leading_suit, Some(Suit::Clubs));

    play_card(&mut state, 2, c("7C")).unwrap();
    assert_eq!(expected_player(&state), Some(0));

    let res = play_card(&mut state, 0, c("5C")).unwrap();
    let done = res.trick_completed.expect("trick should complete");
    assert_eq!(done.winner, 2);
    assert_eq!(done.trick_no, 1);
    assert_eq!(state.phase, Phase::Trick { trick_no: 2 });
    assert_eq!(trick_stage(&state), Some(TrickStage::AwaitingLead));
    assert_eq!(expected_player(&state), Some(2));
    assert_eq!(state.players[2].tricks_won, 1);
    assert!(state.round.first_trick_played);
    assert!(state.round.trick.plays.is_empty());
    assert_eq!(state.round.trick.leading_suit, None);
    assert_eq!(state.round.last_trick.as_ref().map(|t| t.winner), Some(2));
}

#[test]
fn trump_on_first_trick_never_breaks_trump() {
    // Seat 1 is void in clubs and all trump, so may ruff on trick one.
    let hands = vec![cards(&["5C", "9C"]), cards(&["2H", "3H"])];
    let mut state = make_game_state(hands, MakeGameStateArgs::default());

    play_card(&mut state, 0, c("5C")).unwrap();
    let res = play_card(&mut state, 1, c("2H")).unwrap();
    assert!(!res.trump_broken_now);
    assert!(!state.round.trump_broken);
    assert_eq!(res.trick_completed.map(|t| t.winner), Some(1));
}

#[test]
fn trump_discard_after_first_trick_breaks_trump() {
    let hands = vec![cards(&["5C", "9C"]), cards(&["2H", "3D"])];
    let mut state = make_game_state(
        hands,
        MakeGameStateArgs {
            phase: Phase::Trick { trick_no: 2 },
            hand_size: 3,
            first_trick_played: true,
            ..Default::default()
        },
    );
    play_card(&mut state, 0, c("5C")).unwrap();
    let res = play_card(&mut state, 1, c("2H")).unwrap();
    assert!(res.trump_broken_now);
    assert!(state.round.trump_broken);
    assert!(state
        .events
        .contains(&GameEvent::TrumpBroken { player_id: 1 }));
}

#[test]
fn last_trick_moves_round_to_scoring() {
    let hands = vec![cards(&["AC"]), cards(&["KC"])];
    let mut state = make_game_state(
        hands,
        MakeGameStateArgs {
            phase: Phase::Trick { trick_no: 1 },
            hand_size: 1,
            ..Default::default()
        },
    );
    set_bids(&mut state, &[1, 0]);
    play_card(&mut state, 0, c("AC")).unwrap();
    let res = play_card(&mut state, 1, c("KC")).unwrap();
    assert_eq!(res.phase_transitioned, Some(Phase::Scoring));
    assert_eq!(state.phase, Phase::Scoring);
    assert_eq!(state.players[0].tricks_won, 1);
    assert_eq!(state.players[1].tricks_won, 0);
}

#[test]
fn highest_trump_wins_regardless_of_lead_rank() {
    // Leading spades, trump hearts: 9H beats KS and AS.
    let hands = vec![
        cards(&["KS", "2D"]),
        cards(&["AS", "3D"]),
        cards(&["9H", "4D"]),
    ];
    let mut state = make_game_state(
        hands,
        MakeGameStateArgs {
            phase: Phase::Trick { trick_no: 2 },
            hand_size: 3,
            first_trick_played: true,
            ..Default::default()
        },
    );
    play_card(&mut state, 0, c("KS")).unwrap();
    play_card(&mut state, 1, c("AS")).unwrap();
    let res = play_card(&mut state, 2, c("9H")).unwrap();
    assert_eq!(res.trick_completed.map(|t| t.winner), Some(2));
    assert_eq!(
        state.round.last_trick.as_ref().map(|t| t.plays[2].1),
        Some(Card::new(Suit::Hearts, Rank::Nine))
    );
}
