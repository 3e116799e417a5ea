//! Metrics collection and output for simulation results.

use engine::domain::RoundRecord;
use serde::Serialize;

use crate::simulator::GameResult;

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: GameConfig,
    pub result: GameResultMetrics,
    pub rounds: Vec<RoundMetrics>,
    pub player_metrics: Vec<PlayerMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameConfig {
    pub bot_ai: String,
    pub players: usize,
    pub total_games: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub final_scores: Vec<i32>,
    pub winners: Vec<u8>,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: u8,
    pub hand_size: u8,
    pub bids: Vec<u8>,
    pub tricks_won: Vec<u8>,
    pub round_points: Vec<i32>,
    pub bid_accuracy: Vec<BidAccuracy>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BidAccuracy {
    pub seat: u8,
    pub bid: u8,
    pub tricks: u8,
    pub exact: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underbid: Option<u8>, // tricks > bid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overbid: Option<u8>, // tricks < bid
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMetrics {
    pub seat: u8,
    pub total_score: i32,
    pub bid_accuracy: BidAccuracyStats,
    pub avg_tricks_per_round: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BidAccuracyStats {
    pub exact: u32,
    pub underbid: u32,
    pub overbid: u32,
    pub exact_pct: f64,
}

/// One row of the CSV summary.
#[derive(Debug, Clone, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: u64,
    pub bot_ai: String,
    pub players: usize,
    pub winners: String,
    pub scores: String,
    pub exact_pct: f64,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(m: &GameMetrics) -> Self {
        let join = |v: Vec<String>| v.join(" ");
        let exact: u32 = m.player_metrics.iter().map(|p| p.bid_accuracy.exact).sum();
        let bids = (m.rounds.len() * m.config.players) as f64;
        Self {
            game_id: m.game_id,
            seed: m.seed,
            bot_ai: m.config.bot_ai.clone(),
            players: m.config.players,
            winners: join(m.result.winners.iter().map(u8::to_string).collect()),
            scores: join(m.result.final_scores.iter().map(i32::to_string).collect()),
            exact_pct: pct(exact, bids),
        }
    }
}

/// Build metrics from a finished game.
pub fn build_game_metrics(
    game_id: u32,
    config: GameConfig,
    result: &GameResult,
    duration_ms: f64,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let rounds: Vec<RoundMetrics> = result.history.iter().map(build_round_metrics).collect();
    let player_metrics = (0..result.final_scores.len())
        .map(|seat| build_player_metrics(seat as u8, result, &rounds))
        .collect();

    GameMetrics {
        game_id,
        seed: result.seed,
        timestamp,
        config,
        result: GameResultMetrics {
            final_scores: result.final_scores.clone(),
            winners: result.winners.clone(),
            duration_ms,
        },
        rounds,
        player_metrics,
    }
}

fn build_round_metrics(round: &RoundRecord) -> RoundMetrics {
    let bid_accuracy = round
        .bids
        .iter()
        .zip(&round.tricks_won)
        .enumerate()
        .map(|(seat, (&bid, &tricks))| BidAccuracy {
            seat: seat as u8,
            bid,
            tricks,
            exact: bid == tricks,
            underbid: (tricks > bid).then(|| tricks - bid),
            overbid: (tricks < bid).then(|| bid - tricks),
        })
        .collect();

    RoundMetrics {
        round_no: round.round_no,
        hand_size: round.hand_size,
        bids: round.bids.clone(),
        tricks_won: round.tricks_won.clone(),
        round_points: round.round_points.clone(),
        bid_accuracy,
    }
}

fn build_player_metrics(seat: u8, result: &GameResult, rounds: &[RoundMetrics]) -> PlayerMetrics {
    let mut stats = BidAccuracyStats::default();
    let mut tricks_total = 0u32;

    for acc in rounds.iter().filter_map(|r| r.bid_accuracy.get(seat as usize)) {
        tricks_total += acc.tricks as u32;
        if acc.exact {
            stats.exact += 1;
        } else if acc.underbid.is_some() {
            stats.underbid += 1;
        } else {
            stats.overbid += 1;
        }
    }
    stats.exact_pct = pct(stats.exact, rounds.len() as f64);

    let avg_tricks_per_round = if rounds.is_empty() {
        0.0
    } else {
        tricks_total as f64 / rounds.len() as f64
    };

    PlayerMetrics {
        seat,
        total_score: result.final_scores.get(seat as usize).copied().unwrap_or(0),
        bid_accuracy: stats,
        avg_tricks_per_round,
    }
}

fn pct(count: u32, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        count as f64 / total * 100.0
    }
}
