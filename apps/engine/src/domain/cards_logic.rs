//! Card game logic: checking suits in hands, comparing card strength

use super::cards_types::{Card, Suit};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// True when the hand is non-empty and every card is trump.
pub fn hand_is_all_trump(hand: &[Card], trump: Suit) -> bool {
    !hand.is_empty() && hand.iter().all(|c| c.suit == trump)
}

/// Whether `a` beats `b` in a trick led with `lead`.
pub fn card_beats(a: Card, b: Card, lead: Suit, trump: Suit) -> bool {
    let a_trump = a.suit == trump;
    let b_trump = b.suit == trump;
    if a_trump && !b_trump {
        return true;
    }
    if b_trump && !a_trump {
        return false;
    }
    // Same trump status
    if a_trump && b_trump {
        return a.rank > b.rank;
    }
    // No trump: compare only if following lead
    let a_follows = a.suit == lead;
    let b_follows = b.suit == lead;
    if a_follows && !b_follows {
        return true;
    }
    if b_follows && !a_follows {
        return false;
    }
    if a_follows && b_follows {
        return a.rank > b.rank;
    }
    false
}

/// Best card currently on a trick, if any.
pub fn current_best(plays: &[(u8, Card)], trump: Suit) -> Option<(u8, Card)> {
    let lead = plays.first()?.1.suit;
    let mut best = plays[0];
    for &play in &plays[1..] {
        if card_beats(play.1, best.1, lead, trump) {
            best = play;
        }
    }
    Some(best)
}
