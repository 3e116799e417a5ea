use proptest::prelude::*;

use crate::domain::test_gens;
use crate::domain::tricks::legal_moves_for;
use crate::domain::{hand_has_suit, hand_is_all_trump, Suit};

const TRUMP: Suit = Suit::Hearts;

proptest! {
    #![proptest_config(test_gens::proptest_config())]

    /// Legal moves are a non-empty subset of a non-empty hand.
    #[test]
    fn prop_legal_moves_subset_of_hand(
        (hand, lead) in test_gens::hand_and_lead(),
        first_trick_played in any::<bool>(),
        trump_broken in any::<bool>(),
    ) {
        let legal = legal_moves_for(&hand, lead, first_trick_played, trump_broken, TRUMP);
        prop_assert!(!legal.is_empty());
        for c in &legal {
            prop_assert!(hand.contains(c));
        }
    }

    /// Holding the leading suit forces following it.
    #[test]
    fn prop_must_follow_suit(
        (hand, lead) in test_gens::hand_and_lead(),
        first_trick_played in any::<bool>(),
        trump_broken in any::<bool>(),
    ) {
        let legal = legal_moves_for(&hand, lead, first_trick_played, trump_broken, TRUMP);
        if let Some(lead) = lead {
            if hand_has_suit(&hand, lead) {
                prop_assert!(legal.iter().all(|c| c.suit == lead));
                let held = hand.iter().filter(|c| c.suit == lead).count();
                prop_assert_eq!(legal.len(), held);
            }
        }
    }

    /// On the first trick trump is only playable off an all-trump hand,
    /// unless trump was led and is being followed.
    #[test]
    fn prop_first_trick_withholds_trump(
        (hand, lead) in test_gens::hand_and_lead(),
    ) {
        let legal = legal_moves_for(&hand, lead, false, false, TRUMP);
        let following_trump = lead == Some(TRUMP) && hand_has_suit(&hand, TRUMP);
        if !hand_is_all_trump(&hand, TRUMP) && !following_trump {
            prop_assert!(legal.iter().all(|c| c.suit != TRUMP));
        }
    }

    /// Leading later tricks: trump is withheld until broken.
    #[test]
    fn prop_lead_trump_needs_broken(
        hand in (1usize..=13).prop_flat_map(test_gens::unique_cards),
        trump_broken in any::<bool>(),
    ) {
        let legal = legal_moves_for(&hand, None, true, trump_broken, TRUMP);
        if trump_broken || hand_is_all_trump(&hand, TRUMP) {
            prop_assert_eq!(legal.len(), hand.len());
        } else {
            prop_assert!(legal.iter().all(|c| c.suit != TRUMP));
        }
    }
}
