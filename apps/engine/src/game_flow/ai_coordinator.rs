//! Drives bot seats forward until a decision point the caller owns.

use tracing::{debug, error, warn};

use super::player_actions::play_and_score;
use super::GameFlow;
use crate::ai::AiPlayer;
use crate::domain::bidding::{expected_bidder, place_bid};
use crate::domain::player_view::PlayerView;
use crate::domain::state::{GameState, Phase, PlayerId};
use crate::domain::tricks::expected_player;
use crate::error::AppError;
use crate::errors::domain::DomainError;

/// Why the automation loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The human seat must bid or play.
    HumanTurn(PlayerId),
    /// Round scored; call `start_next_round`.
    RoundComplete,
    GameOver,
    /// No game in progress.
    NoGame,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutomationOutcome {
    /// Bot actions applied.
    pub steps: usize,
    pub stopped: StopReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActionType {
    Bid,
    Play,
}

enum NextAction {
    Stop(StopReason),
    Bot(PlayerId, ActionType),
}

impl GameFlow {
    /// Apply bot bids and plays until the human must act, the round is
    /// complete, or the game is over.
    ///
    /// The loop is capped by `automation_limit`. Hitting the cap restores the
    /// state from before the call, unchanged, and reports `AutomationLimitExceeded`.
    pub fn advance_automatic_turns(&mut self) -> Result<AutomationOutcome, AppError> {
        let saved = self.state.clone();
        let limit = self.config.automation_limit;
        let mut steps = 0usize;

        loop {
            let (seat, action) = match self.determine_next_action()? {
                NextAction::Stop(stopped) => {
                    debug!(steps, ?stopped, "Automation stopped");
                    return Ok(AutomationOutcome { steps, stopped });
                }
                NextAction::Bot(seat, action) => (seat, action),
            };

            if steps >= limit {
                self.state = saved;
                error!(
                    limit,
                    round_no = self.state.round.round_no,
                    "Automation limit exceeded; state restored"
                );
                return Err(DomainError::AutomationLimitExceeded { limit }.into());
            }
            steps += 1;

            if let Err(e) = self.run_bot_action(seat, action) {
                self.state = saved;
                return Err(e);
            }
        }
    }

    fn determine_next_action(&self) -> Result<NextAction, DomainError> {
        let state = &self.state;
        let (seat, action) = match state.phase {
            Phase::Setup => return Ok(NextAction::Stop(StopReason::NoGame)),
            Phase::RoundComplete => return Ok(NextAction::Stop(StopReason::RoundComplete)),
            Phase::GameOver => return Ok(NextAction::Stop(StopReason::GameOver)),
            Phase::Scoring => {
                return Err(DomainError::invariant("unscored round left in Scoring"));
            }
            Phase::Bidding => (expected_bidder(state), ActionType::Bid),
            Phase::Trick { .. } => (expected_player(state), ActionType::Play),
        };
        let seat = seat.ok_or_else(|| DomainError::invariant("no seat expected to act"))?;

        if self.bot_for(seat).is_none() {
            return Ok(NextAction::Stop(StopReason::HumanTurn(seat)));
        }
        Ok(NextAction::Bot(seat, action))
    }

    fn bot_for(&self, seat: PlayerId) -> Option<&dyn AiPlayer> {
        self.bots.get(seat as usize).and_then(|b| b.as_deref())
    }

    /// One bot action: the seat's policy first, the random fallback if the
    /// policy errors or its choice is rejected.
    fn run_bot_action(&mut self, seat: PlayerId, action: ActionType) -> Result<(), AppError> {
        let view = PlayerView::for_player(&self.state, seat)?;
        let bot = self
            .bots
            .get(seat as usize)
            .and_then(|b| b.as_deref())
            .ok_or_else(|| DomainError::invariant(format!("no bot for seat {seat}")))?;

        let primary = apply_choice(&mut self.state, bot, &view, seat, action);
        match primary {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!(
                    player_seat = seat,
                    action = ?action,
                    error = %e,
                    "Bot action failed; falling back to random play"
                );
                apply_choice(&mut self.state, &self.fallback, &view, seat, action)
            }
        }
    }
}

/// Ask `ai` for a move and apply it; `state` is untouched on error.
fn apply_choice(
    state: &mut GameState,
    ai: &dyn AiPlayer,
    view: &PlayerView,
    seat: PlayerId,
    action: ActionType,
) -> Result<(), AppError> {
    let mut working = state.clone();
    match action {
        ActionType::Bid => {
            let bid = ai.choose_bid(view)?;
            place_bid(&mut working, seat, bid)?;
        }
        ActionType::Play => {
            let card = ai.choose_play(view)?;
            play_and_score(&mut working, seat, card)?;
        }
    }
    *state = working;
    Ok(())
}
