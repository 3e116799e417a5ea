//! Rules engine for the "prognóstico" trick-taking card game.
//!
//! - [`domain`]: pure state machine (dealing, bidding, tricks, scoring)
//! - [`ai`]: opponent policies
//! - [`game_flow`]: the command/query facade for a presentation layer

pub mod ai;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod game_flow;
pub mod telemetry;

pub use config::{EngineConfig, HumanSeat};
pub use domain::round_lifecycle::{parse_player_names, NextRound};
pub use error::AppError;
pub use errors::domain::DomainError;
pub use game_flow::{AutomationOutcome, GameFlow, StopReason};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
