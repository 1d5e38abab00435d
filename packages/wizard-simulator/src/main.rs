//! Wizard simulator CLI: plays many matches in memory with pluggable agents
//! and writes per-match metrics.

mod agents;
mod error;
mod metrics;
mod output;
mod simulator;
mod types;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use agents::create_agents;
use clap::Parser;
use error::SimulatorError;
use metrics::{build_match_metrics, RunConfig};
use output::OutputWriter;
use simulator::{MatchResult, Simulator};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use types::{AgentType, OutputFormat};
use wizard_engine::domain::{accumulate, max_tricks};
use wizard_engine::{ForecastTables, GameConfig};

#[derive(Parser)]
#[command(name = "wizard-simulator")]
#[command(about = "In-memory Wizard match simulator")]
struct Args {
    /// Number of matches to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Players per match (3-6)
    #[arg(short, long, default_value = "4")]
    players: u8,

    /// Tricks per match; defaults to the most the deck allows
    #[arg(short, long)]
    tricks: Option<u8>,

    /// Forecast blending weight of the first-seat table, in [0, 1]
    #[arg(long, default_value = "0.5")]
    aggressiveness: f64,

    /// Run seed; each match derives its own seed from it
    #[arg(long)]
    seed: Option<u64>,

    /// Agent per seat, comma separated; a single value applies to every seat
    #[arg(long, value_delimiter = ',', default_value = "random")]
    agents: Vec<AgentType>,

    /// JSON forecast tables; the analytic baseline is used when absent
    #[arg(long)]
    forecast_tables: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: PathBuf,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,
}

fn main() -> Result<(), SimulatorError> {
    let args = Args::parse();

    // Silent by default; RUST_LOG wins when set.
    let level = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = GameConfig {
        num_players: args.players,
        tricks_to_play: args.tricks.unwrap_or_else(|| max_tricks(args.players)),
        aggressiveness: args.aggressiveness,
        seed: args.seed,
        allow_step_back: false,
    };
    let seat_types = seat_agents(&args.agents, args.players)?;
    let tables = match &args.forecast_tables {
        Some(path) => ForecastTables::from_path(path)?,
        None => ForecastTables::baseline(),
    };
    let simulator = Simulator::new(config, Arc::new(tables))?;

    info!(
        games = args.games,
        players = args.players,
        tricks = simulator.config().tricks_to_play,
        agents = ?seat_types,
        "Starting simulator"
    );

    let mut output_writer = OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;
    let agents = create_agents(&seat_types, args.seed);
    let agent_names: Vec<String> = seat_types.iter().map(|t| t.name().to_string()).collect();

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0u32;

    for match_no in 1..=args.games {
        let match_start = Instant::now();
        match simulator.simulate_match(match_no, &agents) {
            Ok(result) => {
                let duration_ms = match_start.elapsed().as_secs_f64() * 1000.0;
                let run_config = RunConfig {
                    num_players: simulator.config().num_players,
                    tricks_to_play: simulator.config().tricks_to_play,
                    aggressiveness: simulator.config().aggressiveness,
                    agents: agent_names.clone(),
                    total_matches: args.games,
                };
                let metrics = build_match_metrics(match_no, run_config, &result, duration_ms);
                if let Err(e) = output_writer.write_match(&metrics) {
                    warn!("Failed to write metrics for match {}: {}", match_no, e);
                }
                info!(match_no, payoffs = ?result.payoffs, "Match completed");
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Match {} failed: {}", match_no, e);
            }
        }
    }

    let elapsed = start.elapsed();
    let (detail_path, csv_path) = output_writer.output_paths();
    let (detail_path, csv_path) = (detail_path.to_path_buf(), csv_path.to_path_buf());
    output_writer.finish()?;

    if args.show_output {
        info!("Detailed results written to: {}", detail_path.display());
        info!("Summary CSV written to: {}", csv_path.display());
    }
    print_summary(&results, errors, elapsed, args.games);

    Ok(())
}

/// Expand `--agents` to one type per seat.
fn seat_agents(requested: &[AgentType], players: u8) -> Result<Vec<AgentType>, SimulatorError> {
    let n = usize::from(players);
    match requested {
        [] => Ok(vec![AgentType::Random; n]),
        [single] => Ok(vec![*single; n]),
        many if many.len() == n => Ok(many.to_vec()),
        many => Err(SimulatorError::InvalidArgs(format!(
            "--agents lists {} seats but the match has {n}",
            many.len()
        ))),
    }
}

fn print_summary(results: &[MatchResult], errors: u32, elapsed: Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Matches completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {errors}");
    }
    println!("Total time: {elapsed:?}");
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per match: {:?}",
        elapsed / results.len() as u32
    );

    let totals = results
        .iter()
        .fold(Vec::new(), |acc, r| accumulate(&acc, &r.payoffs));
    let exact = results.iter().fold(Vec::new(), |acc, r| {
        let hits: Vec<i32> = r
            .forecasts
            .iter()
            .zip(&r.tricks_won)
            .map(|(f, t)| i32::from(f == t))
            .collect();
        accumulate(&acc, &hits)
    });

    let count = results.len() as f64;
    println!("\n=== Results by Seat ===");
    for (seat, (total, hits)) in totals.iter().zip(&exact).enumerate() {
        println!(
            "Seat {}: avg payoff={:.2}, exact bids={:.1}%",
            seat,
            f64::from(*total) / count,
            f64::from(*hits) / count * 100.0
        );
    }
}
