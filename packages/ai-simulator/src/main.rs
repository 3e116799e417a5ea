//! AI Simulator CLI - runs fully automated prognóstico games.
//!
//! Every seat is a bot; the tool reports per-game scores, exact-bid hit
//! rates and winners as a text summary or as JSON lines.

mod metrics;
mod output;
mod simulator;

use std::time::Instant;

use clap::{Parser, ValueEnum};
use engine::domain::rules::{MAX_PLAYERS, MIN_PLAYERS};
use engine::telemetry::init_tracing;
use metrics::{build_game_metrics, GameConfig, GameMetrics};
use output::OutputWriter;
use simulator::Simulator;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Fast in-memory prognóstico simulator for bot evaluation")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Players at the table
    #[arg(short, long, default_value = "4")]
    players: usize,

    /// Bot policy for every seat
    #[arg(long, default_value = "heuristic")]
    bot_ai: AiType,

    /// Base game seed; game N uses seed + N - 1
    #[arg(long)]
    seed: Option<u64>,

    /// Bid noise for the heuristic policy
    #[arg(long)]
    noise: Option<f64>,

    /// Print one JSON object per game instead of the text summary
    #[arg(long)]
    json: bool,

    /// Write JSONL results and a CSV summary into this directory
    #[arg(long)]
    output_dir: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Clone, ValueEnum)]
enum AiType {
    Heuristic,
    Random,
}

impl AiType {
    fn name(&self) -> &'static str {
        match self {
            AiType::Heuristic => "Heuristic",
            AiType::Random => "RandomPlayer", // registry name
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    init_tracing(filter, args.json_logs)?;

    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&args.players) {
        return Err(format!(
            "players must be between {MIN_PLAYERS} and {MAX_PLAYERS}, got {}",
            args.players
        )
        .into());
    }

    if let Some(noise) = args.noise {
        if !noise.is_finite() {
            return Err(format!("noise must be a finite number, got {noise}").into());
        }
    }
    let bot_config = args.noise.map(|noise| serde_json::json!({ "noise": noise }));
    let simulator = Simulator::new(args.players, args.bot_ai.name(), bot_config)?;
    let mut output_writer = OutputWriter::new(args.output_dir.as_deref(), args.json)?;

    info!(
        games = args.games,
        players = args.players,
        bot_ai = simulator.bot_ai(),
        "Starting simulation"
    );

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0u32;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let seed = match args.seed {
            Some(base) => base.wrapping_add(u64::from(game_num - 1)),
            None => rand::random(),
        };

        match simulator.simulate_game(seed) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let config = GameConfig {
                    bot_ai: simulator.bot_ai().to_string(),
                    players: simulator.players(),
                    total_games: args.games,
                };
                let metrics = build_game_metrics(game_num, config, &result, duration_ms);
                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!(game_num, error = %e, "Failed to write metrics");
                }
                info!(game_num, seed, scores = ?result.final_scores, "Game completed");
                results.push(metrics);
            }
            Err(e) => {
                errors += 1;
                warn!(game_num, seed, error = %e, "Game failed");
            }
        }
    }

    let elapsed = start.elapsed();
    let (jsonl_path, csv_path) = output_writer.output_paths();
    let (jsonl_path, csv_path) = (jsonl_path.cloned(), csv_path.cloned());
    output_writer.finish()?;

    if let Some(path) = jsonl_path {
        info!("Detailed results written to: {}", path.display());
    }
    if let Some(path) = csv_path {
        info!("Summary CSV written to: {}", path.display());
    }

    if !args.json {
        print_summary(&results, errors, elapsed, args.games, args.players);
    }

    Ok(())
}

fn print_summary(
    results: &[GameMetrics],
    errors: u32,
    elapsed: std::time::Duration,
    total: u32,
    players: usize,
) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {errors}");
    }
    println!("Total time: {elapsed:?}");
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );

    for game in results {
        println!(
            "Game {} (seed {}): scores={:?} winners={:?}",
            game.game_id, game.seed, game.result.final_scores, game.result.winners
        );
    }

    let mut wins = vec![0u32; players];
    let mut total_scores = vec![0i64; players];
    let mut exact = vec![0u32; players];
    let mut rounds = 0usize;

    for game in results {
        rounds += game.rounds.len();
        for &seat in &game.result.winners {
            wins[seat as usize] += 1;
        }
        for p in &game.player_metrics {
            total_scores[p.seat as usize] += i64::from(p.total_score);
            exact[p.seat as usize] += p.bid_accuracy.exact;
        }
    }

    println!("\n=== Results by Seat ===");
    for seat in 0..players {
        let avg_score = total_scores[seat] as f64 / results.len() as f64;
        let win_rate = wins[seat] as f64 / results.len() as f64 * 100.0;
        let hit_rate = if rounds == 0 {
            0.0
        } else {
            exact[seat] as f64 / rounds as f64 * 100.0
        };
        println!(
            "Seat {seat}: avg={avg_score:.1}, wins={} ({win_rate:.1}%), exact bids={hit_rate:.1}%",
            wins[seat]
        );
    }
}
