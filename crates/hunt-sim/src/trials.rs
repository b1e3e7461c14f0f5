//! Multi-trial evaluation of a policy roster.
//!
//! # Seeding
//!
//! Trial `t` draws its board from `SimRng::for_trial(config.seed, t)`.  Every
//! policy in the roster then hunts on a clone of that board with its own RNG,
//! seeded `SimRng::trial_seed(board_seed, spec.stream())`.  A policy's runs
//! therefore do not depend on which other policies share the roster.  Trials
//! share nothing, so the `parallel` feature changes only wall time, never
//! results.

use tracing::debug;

use hunt_core::{Board, HuntConfig, SimRng};
use hunt_policy::PolicySpec;

use crate::{HuntBuilder, HuntObserver, NoopObserver, RunReport, SimError, SimResult};

/// One policy's hunt in one trial.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialRun {
    pub trial:  u64,
    pub spec:   PolicySpec,
    /// Seed of the hunt's own RNG (detection draws and target walk).
    pub seed:   u64,
    pub report: RunReport,
}

/// Action-count statistics for one policy across a sweep.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolicySummary {
    pub spec:   PolicySpec,
    pub trials: u64,
    pub mean:   f64,
    pub min:    u64,
    pub max:    u64,
}

/// The board and board seed for trial `trial`.
pub fn trial_board(config: &HuntConfig, trial: u64) -> SimResult<(u64, Board)> {
    let grid = config.validate()?;
    let seed = SimRng::trial_seed(config.seed, trial);
    let board = Board::random(grid, &mut SimRng::new(seed))?;
    Ok((seed, board))
}

/// Hunt once with `spec` on `board`, its RNG seeded with `seed`.
pub fn run_policy<O: HuntObserver>(
    config:   &HuntConfig,
    board:    Board,
    spec:     PolicySpec,
    seed:     u64,
    observer: &mut O,
) -> SimResult<RunReport> {
    let config = HuntConfig { seed, ..config.clone() };
    HuntBuilder::new(config, spec.build())
        .board(board)
        .build()?
        .run(observer)
}

/// RNG seed for `spec`'s hunt on the board drawn from `board_seed`.
#[inline]
pub fn policy_seed(board_seed: u64, spec: PolicySpec) -> u64 {
    SimRng::trial_seed(board_seed, spec.stream())
}

/// Every policy in `specs` on trial `trial`'s board.
pub fn run_trial(config: &HuntConfig, specs: &[PolicySpec], trial: u64) -> SimResult<Vec<TrialRun>> {
    let (board_seed, board) = trial_board(config, trial)?;
    specs
        .iter()
        .map(|&spec| {
            let seed = policy_seed(board_seed, spec);
            let report = run_policy(config, board.clone(), spec, seed, &mut NoopObserver)?;
            Ok(TrialRun { trial, spec, seed, report })
        })
        .collect()
}

/// Trials `0..trials`, flattened in (trial, roster) order.
pub fn collect_trials(
    config: &HuntConfig,
    specs:  &[PolicySpec],
    trials: u64,
) -> SimResult<Vec<TrialRun>> {
    if trials == 0 {
        return Err(SimError::Config("trial count must be positive".into()));
    }
    if specs.is_empty() {
        return Err(SimError::Config("policy roster is empty".into()));
    }

    #[cfg(feature = "parallel")]
    let per_trial: Vec<Vec<TrialRun>> = {
        use rayon::prelude::*;
        (0..trials)
            .into_par_iter()
            .map(|t| run_trial(config, specs, t))
            .collect::<SimResult<_>>()?
    };

    #[cfg(not(feature = "parallel"))]
    let per_trial: Vec<Vec<TrialRun>> = (0..trials)
        .map(|t| run_trial(config, specs, t))
        .collect::<SimResult<_>>()?;

    Ok(per_trial.into_iter().flatten().collect())
}

/// Mean, min and max actions per policy, in roster order.  Specs with no runs
/// are omitted.
pub fn summarize(specs: &[PolicySpec], runs: &[TrialRun]) -> Vec<PolicySummary> {
    specs
        .iter()
        .filter_map(|&spec| {
            let actions: Vec<u64> = runs
                .iter()
                .filter(|r| r.spec == spec)
                .map(|r| r.report.actions)
                .collect();
            let min = *actions.iter().min()?;
            let max = *actions.iter().max()?;
            let trials = actions.len() as u64;
            let mean = actions.iter().sum::<u64>() as f64 / trials as f64;
            Some(PolicySummary { spec, trials, mean, min, max })
        })
        .collect()
}

/// Evaluate `specs` over `trials` boards and summarize.
pub fn run_trials(
    config: &HuntConfig,
    specs:  &[PolicySpec],
    trials: u64,
) -> SimResult<Vec<PolicySummary>> {
    let runs = collect_trials(config, specs, trials)?;
    let summary = summarize(specs, &runs);
    for s in &summary {
        debug!(policy = %s.spec.label(), trials = s.trials, mean = s.mean, min = s.min, max = s.max, "policy summary");
    }
    Ok(summary)
}
