use crate::domain::bidding::{expected_bidder, place_bid, visible_bids};
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{cards, make_game_state, MakeGameStateArgs};
use crate::errors::domain::DomainError;

fn bidding_state(lead_index: usize) -> crate::domain::GameState {
    let hands = vec![
        cards(&["2C", "3C", "4C"]),
        cards(&["2D", "3D", "4D"]),
        cards(&["2S", "3S", "4S"]),
        cards(&["2H", "3H", "4H"]),
    ];
    make_game_state(
        hands,
        MakeGameStateArgs {
            phase: Phase::Bidding,
            lead_index,
            ..Default::default()
        },
    )
}

#[test]
fn bids_follow_turn_order_from_lead() {
    let mut state = bidding_state(2);
    assert_eq!(state.round.turn_order, vec![2, 3, 0, 1]);
    assert_eq!(expected_bidder(&state), Some(2));

    let err = place_bid(&mut state, 0, 1).unwrap_err();
    assert_eq!(err, DomainError::OutOfTurnBid { who: 0, expected: 2 });

    place_bid(&mut state, 2, 1).unwrap();
    assert_eq!(expected_bidder(&state), Some(3));
}

#[test]
fn bid_out_of_range_is_rejected_without_mutation() {
    let mut state = bidding_state(0);
    let before = state.clone();
    let err = place_bid(&mut state, 0, 4).unwrap_err();
    assert_eq!(err, DomainError::InvalidBidRange { bid: 4, hand_size: 3 });
    assert_eq!(state, before);

    // Both ends of the range are accepted.
    place_bid(&mut state, 0, 0).unwrap();
    place_bid(&mut state, 1, 3).unwrap();
}

#[test]
fn bid_outside_bidding_phase_is_phase_mismatch() {
    let mut state = bidding_state(0);
    state.phase = Phase::Trick { trick_no: 1 };
    assert_eq!(
        place_bid(&mut state, 0, 1).unwrap_err(),
        DomainError::phase_mismatch("place_bid", Phase::Trick { trick_no: 1 })
    );
}

#[test]
fn unknown_bidder_is_rejected() {
    let mut state = bidding_state(0);
    assert_eq!(
        place_bid(&mut state, 9, 1).unwrap_err(),
        DomainError::UnknownPlayer(9)
    );
}

#[test]
fn visibility_before_own_bid_is_strictly_earlier_seats() {
    let mut state = bidding_state(1);
    // turn order: 1, 2, 3, 0
    place_bid(&mut state, 1, 2).unwrap();
    place_bid(&mut state, 2, 0).unwrap();

    // Seat 3 is next: sees 1 and 2.
    assert_eq!(visible_bids(&state, 3).unwrap(), vec![(1, 2), (2, 0)]);
    // Seat 0 (last) also sees only placed earlier bids.
    assert_eq!(visible_bids(&state, 0).unwrap(), vec![(1, 2), (2, 0)]);
    // Seat 1 already bid: sees everything placed so far.
    assert_eq!(visible_bids(&state, 1).unwrap(), vec![(1, 2), (2, 0)]);
}

#[test]
fn first_bidder_sees_nothing_until_they_bid() {
    let mut state = bidding_state(0);
    assert!(visible_bids(&state, 0).unwrap().is_empty());
    place_bid(&mut state, 0, 1).unwrap();
    place_bid(&mut state, 1, 2).unwrap();
    place_bid(&mut state, 2, 3).unwrap();

    // Seat 0 has bid, so later bids are revealed to them.
    assert_eq!(
        visible_bids(&state, 0).unwrap(),
        vec![(0, 1), (1, 2), (2, 3)]
    );
    // Seat 3 has not bid yet: sees the three earlier seats.
    assert_eq!(
        visible_bids(&state, 3).unwrap(),
        vec![(0, 1), (1, 2), (2, 3)]
    );
}

#[test]
fn middle_seat_does_not_see_later_bids_before_bidding() {
    let mut state = bidding_state(0);
    place_bid(&mut state, 0, 1).unwrap();
    // Seat 2 must not see seat 1 (not placed) nor anything after itself.
    assert_eq!(visible_bids(&state, 2).unwrap(), vec![(0, 1)]);
    assert_eq!(visible_bids(&state, 1).unwrap(), vec![(0, 1)]);
}

#[test]
fn completing_bids_opens_trick_one_with_lead() {
    let mut state = bidding_state(3);
    for (who, bid) in [(3, 0), (0, 1), (1, 1), (2, 1)] {
        place_bid(&mut state, who, bid).unwrap();
    }
    assert_eq!(state.phase, Phase::Trick { trick_no: 1 });
    assert_eq!(state.round.trick.leader, 3);
    assert!(state.players.iter().all(|p| p.bid.is_some()));
}
