//! Game flow facade: the synchronous command/query API consumed by a
//! presentation layer.
//!
//! [`GameFlow`] owns the [`GameState`] exclusively. Every command runs
//! against a working copy and only replaces the live state on success, so a
//! rejected command never leaves a partial change behind.

mod ai_coordinator;
mod player_actions;
mod round_lifecycle;

pub use ai_coordinator::{AutomationOutcome, StopReason};

use crate::ai::{AiPlayer, RandomPlayer};
use crate::config::EngineConfig;
use crate::domain::bidding::{expected_bidder, visible_bids};
use crate::domain::player_view::PlayerView;
use crate::domain::scoring::{leaders, standings};
use crate::domain::snapshot::{snapshot, GameSnapshot};
use crate::domain::state::{GameState, Phase, Player, PlayerId, RoundRecord, Trick};
use crate::domain::tricks::{expected_player, legal_moves, trick_stage, TrickStage};
use crate::domain::{Card, GameEvent, Suit};
use crate::error::AppError;
use crate::errors::domain::DomainError;

pub struct GameFlow {
    config: EngineConfig,
    state: GameState,
    /// Indexed by seat; `None` for the human seat.
    bots: Vec<Option<Box<dyn AiPlayer>>>,
    /// Used when a bot's own policy fails.
    fallback: RandomPlayer,
}

impl GameFlow {
    /// A flow in the `Setup` phase; nothing is dealt until [`start_game`](Self::start_game).
    pub fn new(config: EngineConfig) -> Result<Self, AppError> {
        config.validate()?;
        Ok(Self {
            state: GameState::new(config.seed.unwrap_or(0)),
            config,
            bots: Vec::new(),
            fallback: RandomPlayer::new(None),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read-only access to the full state (hands included).
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run `op` on a working copy; commit only on success.
    fn transact<T>(
        &mut self,
        op: impl FnOnce(&mut GameState) -> Result<T, DomainError>,
    ) -> Result<T, DomainError> {
        let mut working = self.state.clone();
        let out = op(&mut working)?;
        self.state = working;
        Ok(out)
    }

    // ---------- Queries ----------

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn trick_stage(&self) -> Option<TrickStage> {
        trick_stage(&self.state)
    }

    pub fn round_no(&self) -> u8 {
        self.state.round.round_no
    }

    pub fn hand_size(&self) -> u8 {
        self.state.round.hand_size
    }

    pub fn trump(&self) -> Suit {
        self.state.trump
    }

    pub fn turn_order(&self) -> &[PlayerId] {
        &self.state.round.turn_order
    }

    /// Seat expected to act next, if any.
    pub fn current_actor(&self) -> Option<PlayerId> {
        match self.state.phase {
            Phase::Bidding => expected_bidder(&self.state),
            Phase::Trick { .. } => expected_player(&self.state),
            _ => None,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.state.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.state.player(id)
    }

    /// Seat controlled by the caller, if any.
    pub fn human_seat(&self) -> Option<PlayerId> {
        self.state.players.iter().find(|p| p.is_human).map(|p| p.id)
    }

    pub fn current_trick(&self) -> &Trick {
        &self.state.round.trick
    }

    pub fn leading_suit(&self) -> Option<Suit> {
        self.state.round.trick.leading_suit
    }

    pub fn trump_broken(&self) -> bool {
        self.state.round.trump_broken
    }

    /// Cards not dealt this round.
    pub fn undealt_count(&self) -> usize {
        self.state.round.undealt.len()
    }

    pub fn is_round_complete(&self) -> bool {
        matches!(self.state.phase, Phase::RoundComplete | Phase::GameOver)
    }

    pub fn is_game_over(&self) -> bool {
        self.state.phase == Phase::GameOver
    }

    pub fn legal_moves(&self, who: PlayerId) -> Vec<Card> {
        legal_moves(&self.state, who)
    }

    pub fn visible_bids(&self, viewer: PlayerId) -> Result<Vec<(PlayerId, u8)>, AppError> {
        Ok(visible_bids(&self.state, viewer)?)
    }

    pub fn player_view(&self, who: PlayerId) -> Result<PlayerView, AppError> {
        Ok(PlayerView::for_player(&self.state, who)?)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        snapshot(&self.state)
    }

    /// Events of the current round, oldest first.
    pub fn events(&self) -> &[GameEvent] {
        &self.state.events
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.state.history
    }

    pub fn standings(&self) -> Vec<(PlayerId, i32)> {
        standings(&self.state.players)
    }

    /// All tied leaders once the game is over; empty before that.
    pub fn winners(&self) -> Vec<PlayerId> {
        if self.is_game_over() {
            leaders(&self.state.players)
        } else {
            Vec::new()
        }
    }
}
