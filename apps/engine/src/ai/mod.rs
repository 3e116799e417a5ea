//! Opponent policies.
//!
//! - [`AiPlayer`]: the decision trait every bot seat implements
//! - [`Heuristic`]: default bid estimate and bid-aware card choice
//! - [`RandomPlayer`]: uniform random legal moves (fallback option)
//! - [`registry`]: name → factory lookup used by configuration

mod config;
mod heuristic;
mod random;
pub mod registry;
mod trait_def;

pub use config::AiConfig;
pub use heuristic::{bid_weight, choose_card, estimate_bid, Heuristic, DEFAULT_NOISE, MAX_NOISE};
pub use random::RandomPlayer;
pub use trait_def::{AiError, AiPlayer};

/// Create an AI player by registry name; `None` when the name is unknown.
pub fn create_ai(name: &str, config: &AiConfig) -> Option<Box<dyn AiPlayer>> {
    registry::by_name(name).map(|factory| (factory.make)(config))
}
