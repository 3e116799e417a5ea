//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_types;
pub mod dealing;
pub mod events;
pub mod player_view;
pub mod round_lifecycle;
pub mod rules;
pub mod scoring;
pub mod seating;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
pub mod tricks;

#[cfg(test)]
pub(crate) mod test_gens;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_props_legality;
#[cfg(test)]
mod tests_props_trick_winner;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, hand_has_suit, hand_is_all_trump};
pub use cards_types::{rank_order, suit_group_order, Card, Rank, Suit};
pub use events::GameEvent;
pub use player_view::PlayerView;
pub use rules::{valid_bid_range, TRUMP};
pub use state::{CompletedTrick, GameState, Phase, Player, PlayerId, RoundRecord, RoundState, Trick};
pub use tricks::{PlayCardResult, TrickStage};
