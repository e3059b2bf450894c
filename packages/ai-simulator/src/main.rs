//! AI simulator CLI: runs many all-AI games of 187 in memory and writes
//! per-game JSONL metrics plus a CSV summary.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::{Duration, Instant};

use clap::Parser;
use engine::domain::seed_derivation::game_seed_from_u64;
use engine::telemetry::{init_tracing, LogFormat};
use metrics::build_game_metrics;
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use tracing::{info, warn};
use types::{AiType, MetricsLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Fast in-memory 187 simulator for comparing AI players")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// AI type for all seats (shortcut to set all 4 seats to the same AI)
    #[arg(long, conflicts_with_all = ["seat0", "seat1", "seat2", "seat3"])]
    seats: Option<AiType>,

    #[arg(long, default_value = "house")]
    seat0: AiType,

    #[arg(long, default_value = "house")]
    seat1: AiType,

    #[arg(long, default_value = "house")]
    seat2: AiType,

    #[arg(long, default_value = "house")]
    seat3: AiType,

    /// Base seed; game N uses seed + N. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Dealer for round 1 of every game
    #[arg(long, default_value = "0", value_parser = clap::value_parser!(u8).range(0..4))]
    dealer: u8,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Gzip the JSONL output
    #[arg(long)]
    compress: bool,

    #[arg(long, default_value = "detailed")]
    metrics_level: MetricsLevel,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    init_tracing(LogFormat::from_env(), filter);

    let seat_types = match args.seats.clone() {
        Some(ai) => [ai.clone(), ai.clone(), ai.clone(), ai],
        None => [
            args.seat0.clone(),
            args.seat1.clone(),
            args.seat2.clone(),
            args.seat3.clone(),
        ],
    };
    let ai_types = seat_types.map(|t| t.name().to_string());
    info!(games = args.games, ?ai_types, "starting simulation");

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;
    let base_seed = args.seed.unwrap_or_else(rand::random);

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let game_seed = game_seed_from_u64(base_seed.wrapping_add(u64::from(game_num)));
        let simulator = Simulator::new(game_seed, game_num).with_starting_dealer(args.dealer);

        match simulator.simulate_game(&ai_types) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_game_metrics(
                    game_num,
                    &game_seed,
                    ai_types.clone(),
                    args.games,
                    &result,
                    duration_ms,
                    &args.metrics_level,
                );
                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!(game_num, error = %e, "failed to write metrics");
                }
                info!(game_num, scores = ?result.final_scores, "game completed");
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!(game_num, error = %e, "game failed");
            }
        }
    }

    let elapsed = start.elapsed();
    let (jsonl_path, csv_path) = output_writer.output_paths();
    let (jsonl_path, csv_path) = (jsonl_path.cloned(), csv_path.clone());
    output_writer.finish()?;

    if args.show_output {
        if let Some(path) = jsonl_path {
            info!("Detailed results written to: {}", path.display());
        }
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, errors, elapsed, args.games);
    }

    Ok(())
}

fn print_summary(results: &[GameResult], errors: u32, elapsed: Duration, total: u32) {
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

    let mut wins = [0u32; 4];
    let mut total_scores = [0i64; 4];
    let mut max_scores = [i32::MIN; 4];
    let mut min_scores = [i32::MAX; 4];
    let mut rounds = 0usize;

    for result in results {
        rounds += result.rounds.len();
        if let Some(first) = result.standings.first() {
            wins[first.seat as usize] += 1;
        }
        for (seat, &score) in result.final_scores.iter().enumerate() {
            total_scores[seat] += i64::from(score);
            max_scores[seat] = max_scores[seat].max(score);
            min_scores[seat] = min_scores[seat].min(score);
        }
    }

    println!(
        "Average rounds per game: {:.1}",
        rounds as f64 / results.len() as f64
    );
    println!("\n=== Results by Seat ===");
    for seat in 0..4 {
        let avg_score = total_scores[seat] as f64 / results.len() as f64;
        let win_rate = (wins[seat] as f64 / results.len() as f64) * 100.0;
        println!(
            "Seat {}: avg={:.1}, min={}, max={}, wins={} ({:.1}%)",
            seat, avg_score, min_scores[seat], max_scores[seat], wins[seat], win_rate
        );
    }
}
