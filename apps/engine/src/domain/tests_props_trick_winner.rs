use proptest::prelude::*;

use crate::domain::test_gens;
use crate::domain::tricks::resolve_trick;
use crate::domain::{Card, PlayerId, Suit};

/// Independent oracle: highest trump, else highest of the leading suit.
fn oracle_winner(plays: &[(PlayerId, Card)], lead: Suit, trump: Suit) -> PlayerId {
    let best_of = |suit: Suit| {
        plays
            .iter()
            .filter(|(_, c)| c.suit == suit)
            .max_by_key(|(_, c)| c.rank)
            .map(|(p, _)| *p)
    };
    best_of(trump).or_else(|| best_of(lead)).unwrap()
}

proptest! {
    #![proptest_config(test_gens::proptest_config())]

    #[test]
    fn prop_winner_matches_oracle(
        (plays, _leader) in test_gens::complete_trick(),
        trump in test_gens::suit(),
    ) {
        let lead = plays[0].1.suit;
        let winner = resolve_trick(&plays, lead, trump);
        prop_assert_eq!(winner, Some(oracle_winner(&plays, lead, trump)));
    }

    /// Permuting the plays while keeping the leading suit fixed does not
    /// change the winner.
    #[test]
    fn prop_winner_independent_of_order(
        (plays, _leader) in test_gens::complete_trick(),
        trump in test_gens::suit(),
        rotation in 0usize..6,
    ) {
        let lead = plays[0].1.suit;
        let mut permuted = plays.clone();
        let len = permuted.len();
        permuted.rotate_left(rotation % len);
        permuted.reverse();
        prop_assert_eq!(
            resolve_trick(&plays, lead, trump),
            resolve_trick(&permuted, lead, trump)
        );
    }
}
