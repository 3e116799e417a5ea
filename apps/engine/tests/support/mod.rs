#![allow(dead_code)]

pub mod state_helpers;

use engine::{EngineConfig, GameFlow, HumanSeat, StopReason};

/// All-bot flow with a fixed seed.
pub fn bot_flow(seed: u64, bot_ai: &str) -> GameFlow {
    let config = EngineConfig {
        bot_ai: bot_ai.to_string(),
        ..EngineConfig::default()
    }
    .with_seed(seed)
    .with_human_seat(HumanSeat::None);
    GameFlow::new(config).expect("valid config")
}

/// Flow whose last named player is the human.
pub fn human_flow(seed: u64) -> GameFlow {
    GameFlow::new(EngineConfig::default().with_seed(seed)).expect("valid config")
}

/// Drive an all-bot game to completion; returns the number of rounds played.
pub fn run_bot_game(flow: &mut GameFlow) -> usize {
    let mut rounds = 0;
    loop {
        let outcome = flow.advance_automatic_turns().expect("automation succeeds");
        match outcome.stopped {
            StopReason::RoundComplete => {
                rounds += 1;
                flow.start_next_round().expect("next round");
            }
            StopReason::GameOver => return rounds + 1,
            other => panic!("unexpected stop in all-bot game: {other:?}"),
        }
    }
}

pub fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("P{i}")).collect()
}
