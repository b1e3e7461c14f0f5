//! hunt — compare search policies on random (or replayed) boards.
//!
//! Without `--policy` the standard roster runs: rules 1 and 2 when movement
//! is free, agents 1–3 plus the improved agent with `--count-movement`, each
//! paired with its feasibility-aware counterpart under `--moving`.
//!
//! ```text
//! hunt --dim 50 --count-movement --trials 20
//! hunt --dim 30 --moving --policy agent3 --policy move-agent3 --out output/hunt
//! RUST_LOG=hunt_sim=trace hunt --dim 5 --policy rule1
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

use hunt_core::{Board, Cell, HuntConfig, TerrainGrid};
use hunt_output::{CsvWriter, RunRow, TraceObserver};
use hunt_policy::PolicySpec;
use hunt_sim::{
    HuntBuilder, NoopObserver, PolicySummary, TrialRun, collect_trials, policy_seed, summarize, trial_board,
};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "hunt")]
#[command(about = "Probabilistic grid hunt: score search policies by actions to find", version)]
struct Cli {
    /// Grid side length
    #[arg(long, default_value_t = 50)]
    dim: usize,

    /// Charge one action per step of travel (agents instead of rules)
    #[arg(long)]
    count_movement: bool,

    /// The target random-walks one step per turn
    #[arg(long)]
    moving: bool,

    /// Root RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Independent boards to average over
    #[arg(long, default_value_t = 1)]
    trials: u64,

    /// Policy to run, e.g. `agent3` or `move-improved`; repeatable
    #[arg(long = "policy")]
    policies: Vec<PolicySpec>,

    /// Give up on a run after this many actions
    #[arg(long)]
    max_actions: Option<u64>,

    /// Replay a board saved with --save-board (implies one trial)
    #[arg(long)]
    board: Option<PathBuf>,

    /// Save the first trial's board as JSON
    #[arg(long)]
    save_board: Option<PathBuf>,

    /// Write actions.csv and runs.csv to this directory
    #[arg(long)]
    out: Option<PathBuf>,

    /// Debug-level logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

// ── Board files ───────────────────────────────────────────────────────────────

fn load_board(path: &Path) -> Result<Board> {
    let file = File::open(path).with_context(|| format!("opening board {}", path.display()))?;
    let board: Board = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing board {}", path.display()))?;
    // Serde skips the constructors; run the terrain and target through them.
    let terrain = TerrainGrid::from_cells(board.terrain.grid(), board.terrain.cells().to_vec())?;
    Ok(Board::new(terrain, board.target)?)
}

fn save_board(path: &Path, board: &Board) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), board)?;
    info!(path = %path.display(), "board saved");
    Ok(())
}

// ── Traced runs ───────────────────────────────────────────────────────────────

/// Serial sweep that records every action through `obs` (if any).
fn traced_runs(
    config:  &HuntConfig,
    specs:   &[PolicySpec],
    trials:  u64,
    replay:  Option<&Board>,
    mut obs: Option<&mut TraceObserver<CsvWriter>>,
) -> Result<Vec<TrialRun>> {
    let mut runs = Vec::with_capacity(specs.len() * trials as usize);
    for trial in 0..trials {
        let (board_seed, board) = match replay {
            Some(b) => (config.seed, b.clone()),
            None    => trial_board(config, trial)?,
        };
        for &spec in specs {
            let seed = policy_seed(board_seed, spec);
            let run_config = HuntConfig { seed, ..config.clone() };
            let mut hunt = HuntBuilder::new(run_config.clone(), spec.build())
                .board(board.clone())
                .build()?;
            let run_id = runs.len() as u64;
            let report = match obs.as_deref_mut() {
                Some(o) => {
                    o.begin_run(run_id);
                    let report = hunt.run(o);
                    o.flush();
                    report?
                }
                None => hunt.run(&mut NoopObserver)?,
            };
            if let Some(o) = obs.as_deref_mut() {
                o.write_run(&RunRow::new(run_id, spec.to_string(), &run_config, &report));
            }
            debug!(policy = %spec.label(), trial, "final belief\n{}", hunt.render());
            runs.push(TrialRun { trial, spec, seed, report });
        }
    }
    Ok(runs)
}

// ── Report ────────────────────────────────────────────────────────────────────

fn print_summary(summary: &[PolicySummary]) {
    println!("{:<20} {:>8} {:>12} {:>10} {:>10}", "Policy", "Trials", "Mean", "Min", "Max");
    println!("{}", "-".repeat(64));
    for s in summary {
        println!(
            "{:<20} {:>8} {:>12.1} {:>10} {:>10}",
            s.spec.label(),
            s.trials,
            s.mean,
            s.min,
            s.max,
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "info" }));
    fmt().with_env_filter(filter).with_target(false).init();

    // 1. Board and config.
    let replay = cli.board.as_deref().map(load_board).transpose()?;
    let dim = replay.as_ref().map_or(cli.dim, Board::dim);
    let trials = if replay.is_some() { 1 } else { cli.trials };
    if trials == 0 {
        bail!("--trials must be at least 1");
    }

    let config = HuntConfig {
        dim,
        moving_target: cli.moving,
        seed:          cli.seed,
        start:         Cell::ORIGIN,
        max_actions:   cli.max_actions,
    };
    config.validate()?;

    if let Some(path) = cli.save_board.as_deref() {
        let board = match &replay {
            Some(b) => b.clone(),
            None    => trial_board(&config, 0)?.1,
        };
        save_board(path, &board)?;
    }

    // 2. Roster.
    let specs = if cli.policies.is_empty() {
        PolicySpec::roster(cli.count_movement, cli.moving)
    } else {
        cli.policies.clone()
    };
    info!(
        dim,
        moving   = cli.moving,
        trials,
        policies = %specs.iter().map(|s| s.to_string()).collect::<Vec<_>>().join(","),
        "starting sweep",
    );

    // 3. Run.
    let t0 = Instant::now();
    let runs = match (&cli.out, &replay) {
        (None, None) => collect_trials(&config, &specs, trials)?,
        (Some(dir), _) => {
            let mut obs = TraceObserver::new(CsvWriter::new(dir)?);
            let runs = traced_runs(&config, &specs, trials, replay.as_ref(), Some(&mut obs));
            obs.finish();
            if let Some(e) = obs.take_error() {
                eprintln!("output error: {e}");
            }
            runs?
        }
        (None, Some(board)) => traced_runs(&config, &specs, trials, Some(board), None)?,
    };
    let elapsed = t0.elapsed();

    // 4. Summary.
    for run in &runs {
        info!(
            trial    = run.trial,
            policy   = %run.spec.label(),
            actions  = run.report.actions,
            searches = run.report.searches,
            moves    = run.report.moves,
            "run complete",
        );
    }
    println!();
    print_summary(&summarize(&specs, &runs));
    println!();
    println!("{} runs in {:.3} s", runs.len(), elapsed.as_secs_f64());
    if let Some(dir) = &cli.out {
        println!("trace written to {}", dir.display());
    }

    Ok(())
}
