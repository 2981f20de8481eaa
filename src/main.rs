//! Headless blockfall runner (default binary).
//!
//! Plays one game (or two with `--versus`) with the CPU at a fixed timestep and
//! prints a summary per game. Board size, seed and name start from the
//! `BLOCKFALL_*` environment variables; flags override them.

use anyhow::{bail, Context, Result};
use clap::Parser;

use blockfall::core::GameConfig;
use blockfall::engine::EvaluatorKind;
use blockfall::sim::{SimConfig, Simulation};

/// Headless CPU-vs-board simulation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Sequencer seed (overrides BLOCKFALL_SEED)
    #[arg(long)]
    seed: Option<u32>,

    /// Board rows (overrides BLOCKFALL_ROWS)
    #[arg(long)]
    rows: Option<usize>,

    /// Board columns (overrides BLOCKFALL_COLS)
    #[arg(long)]
    cols: Option<usize>,

    /// Maximum number of ticks to simulate
    #[arg(long, default_value_t = 36_000)]
    ticks: u64,

    /// Simulated milliseconds per tick
    #[arg(long, default_value_t = 16)]
    tick_ms: u32,

    /// Placement evaluator: greedy or weighted
    #[arg(long, default_value = "weighted", value_parser = parse_evaluator)]
    evaluator: EvaluatorKind,

    /// Run a second, independent CPU game alongside the first
    #[arg(long)]
    versus: bool,

    /// Garbage lines injected into every game every 30 simulated seconds
    #[arg(long, default_value_t = 0)]
    garbage: u32,

    /// Print final snapshots as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Log every CPU decision to stderr
    #[arg(long)]
    log_decisions: bool,
}

fn parse_evaluator(s: &str) -> Result<EvaluatorKind, String> {
    EvaluatorKind::from_str(s).ok_or_else(|| format!("unknown evaluator '{}' (expected greedy or weighted)", s))
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.tick_ms == 0 {
        bail!("--tick-ms must be greater than zero");
    }

    let mut game = GameConfig::from_env();
    if let Some(seed) = args.seed {
        game.seed = seed;
    }
    if let Some(rows) = args.rows {
        game.rows = rows;
    }
    if let Some(cols) = args.cols {
        game.cols = cols;
    }

    let sim_config = SimConfig {
        ticks: args.ticks,
        tick_secs: args.tick_ms as f32 / 1000.0,
        evaluator: args.evaluator,
        versus: args.versus,
        garbage_lines: args.garbage,
        log_decisions: args.log_decisions,
    };

    eprintln!(
        "[Sim] starting: {}x{} seed={} evaluator={} games={}",
        game.cols,
        game.rows,
        game.seed,
        args.evaluator.as_str(),
        if args.versus { 2 } else { 1 }
    );

    let mut sim = Simulation::new(&game, sim_config).context("failed to create game")?;
    let ticks = sim.run();

    eprintln!(
        "[Sim] finished after {} ticks ({:.1}s simulated)",
        ticks,
        sim.elapsed_secs()
    );

    let snapshots = sim.snapshots();
    for snap in &snapshots {
        println!(
            "{}: points={} level={} lines={} pieces={} game_over={}",
            snap.name,
            snap.points,
            snap.level,
            snap.lines(),
            snap.piece_id,
            snap.game_over
        );
    }

    if args.json {
        let json = serde_json::to_string_pretty(&snapshots).context("failed to serialize snapshots")?;
        println!("{}", json);
    }

    Ok(())
}
