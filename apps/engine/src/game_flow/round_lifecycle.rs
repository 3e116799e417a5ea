use tracing::info;

use super::GameFlow;
use crate::ai::{create_ai, AiConfig, AiPlayer, RandomPlayer};
use crate::domain::round_lifecycle::{
    normalize_names, parse_player_names, start_game, start_next_round, NextRound,
};
use crate::domain::seed_derivation::derive_bot_seed;
use crate::domain::state::GameState;
use crate::error::AppError;

impl GameFlow {
    /// Seat the named players and deal the first round.
    ///
    /// Replaces any game in progress. The human seat comes from the
    /// configuration; every other seat gets a bot of the configured policy.
    pub fn start_game<I, S>(&mut self, names: I) -> Result<(), AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = normalize_names(names);
        let human = self.config.human_seat.resolve(names.len());
        let game_seed = self.config.seed.unwrap_or_else(rand::random::<u64>);

        let state = start_game(names.as_slice(), human, game_seed)?;
        let bots = self.build_bots(&state)?;

        info!(
            players = state.player_count(),
            human = ?human,
            game_seed,
            bot_ai = %self.config.bot_ai,
            "Game started"
        );
        self.fallback = RandomPlayer::new(Some(derive_bot_seed(game_seed, u8::MAX)));
        self.bots = bots;
        self.state = state;
        Ok(())
    }

    /// [`start_game`](Self::start_game) from a comma-separated name list.
    pub fn start_game_from_list(&mut self, raw: &str) -> Result<(), AppError> {
        self.start_game(parse_player_names(raw))
    }

    /// Deal the next, smaller round; a no-op reporting `GameComplete` after the last one.
    pub fn start_next_round(&mut self) -> Result<NextRound, AppError> {
        Ok(self.transact(start_next_round)?)
    }

    /// Back to `Setup`: players, scores and history are dropped.
    pub fn reset_game(&mut self) {
        self.state = GameState::new(self.config.seed.unwrap_or(0));
        self.bots.clear();
        info!("Game reset");
    }

    fn build_bots(&self, state: &GameState) -> Result<Vec<Option<Box<dyn AiPlayer>>>, AppError> {
        let base = AiConfig::from_json(self.config.bot_config.as_ref());
        let base_seed = base.seed().unwrap_or(state.game_seed);

        state
            .players
            .iter()
            .map(|p| {
                if p.is_human {
                    return Ok(None);
                }
                let config = AiConfig {
                    seed: Some(derive_bot_seed(base_seed, p.id)),
                    ..base.clone()
                };
                create_ai(&self.config.bot_ai, &config)
                    .map(Some)
                    .ok_or_else(|| {
                        AppError::config(format!("unknown bot AI '{}'", self.config.bot_ai))
                    })
            })
            .collect()
    }
}
