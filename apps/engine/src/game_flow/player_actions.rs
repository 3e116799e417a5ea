use super::GameFlow;
use crate::domain::bidding::{place_bid, PlaceBidResult};
use crate::domain::scoring::apply_round_scoring;
use crate::domain::state::{GameState, Phase, PlayerId};
use crate::domain::tricks::{play_card, PlayCardResult};
use crate::domain::Card;
use crate::error::AppError;
use crate::errors::domain::DomainError;

/// Play a card and, if it emptied the last hand, score the round.
pub(super) fn play_and_score(
    state: &mut GameState,
    who: PlayerId,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    let mut result = play_card(state, who, card)?;
    if state.phase == Phase::Scoring {
        apply_round_scoring(state)?;
        result.phase_transitioned = Some(state.phase);
    }
    Ok(result)
}

impl GameFlow {
    pub fn submit_bid(&mut self, who: PlayerId, bid: u8) -> Result<PlaceBidResult, AppError> {
        Ok(self.transact(|state| place_bid(state, who, bid))?)
    }

    /// Play `card` for `who`. Finishing the round scores it in the same call.
    pub fn play_card(&mut self, who: PlayerId, card: Card) -> Result<PlayCardResult, AppError> {
        Ok(self.transact(|state| play_and_score(state, who, card))?)
    }

    /// Score the finished round. Rejected with `DoubleScoring` once it has been scored.
    pub fn score_round(&mut self) -> Result<Vec<i32>, AppError> {
        Ok(self.transact(apply_round_scoring)?)
    }
}
