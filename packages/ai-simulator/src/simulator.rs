//! Runs complete all-bot games through the public engine facade.

use engine::domain::{PlayerId, RoundRecord};
use engine::{AppError, EngineConfig, GameFlow, HumanSeat, StopReason};
use serde_json::Value as JsonValue;
use tracing::debug;

/// Result of simulating a complete game.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub seed: u64,
    /// Indexed by seat.
    pub final_scores: Vec<i32>,
    pub winners: Vec<PlayerId>,
    pub history: Vec<RoundRecord>,
}

impl GameResult {
    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }
}

/// Table setup shared by every game of a run.
#[derive(Debug, Clone)]
pub struct Simulator {
    players: usize,
    config: EngineConfig,
}

impl Simulator {
    /// Validates the bot policy and its config once, up front.
    pub fn new(
        players: usize,
        bot_ai: impl Into<String>,
        bot_config: Option<JsonValue>,
    ) -> Result<Self, AppError> {
        let config = EngineConfig {
            bot_ai: bot_ai.into(),
            bot_config,
            ..EngineConfig::default()
        }
        .with_human_seat(HumanSeat::None);
        config.validate()?;
        Ok(Self { players, config })
    }

    pub fn players(&self) -> usize {
        self.players
    }

    pub fn bot_ai(&self) -> &str {
        &self.config.bot_ai
    }

    /// Play one game from `seed` to `GameOver`.
    pub fn simulate_game(&self, seed: u64) -> Result<GameResult, AppError> {
        let config = self.config.clone().with_seed(seed);

        let mut flow = GameFlow::new(config)?;
        let names: Vec<String> = (0..self.players).map(|i| format!("Bot {i}")).collect();
        flow.start_game(names)?;

        loop {
            let outcome = flow.advance_automatic_turns()?;
            match outcome.stopped {
                StopReason::RoundComplete => {
                    debug!(round_no = flow.round_no(), steps = outcome.steps, "Round done");
                    flow.start_next_round()?;
                }
                StopReason::GameOver => break,
                StopReason::HumanTurn(seat) => {
                    return Err(AppError::config(format!(
                        "seat {seat} has no bot in an all-bot simulation"
                    )));
                }
                StopReason::NoGame => {
                    return Err(AppError::config("game was not started"));
                }
            }
        }

        Ok(GameResult {
            seed,
            final_scores: flow.players().iter().map(|p| p.score).collect(),
            winners: flow.winners(),
            history: flow.history().to_vec(),
        })
    }
}
