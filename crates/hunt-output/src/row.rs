//! Plain data row types written by output backends.

use std::fmt;

use hunt_core::{Cell, HuntConfig, SearchOutcome};
use hunt_sim::RunReport;

/// What a traced action was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Search,
    Move,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ActionKind::Search => "search",
            ActionKind::Move   => "move",
        })
    }
}

/// One search or counted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionRow {
    pub run:     u64,
    /// Running action count after this action.
    pub action:  u64,
    pub kind:    ActionKind,
    /// Searched cell, or the cell moved to.
    pub cell:    Cell,
    /// `None` for moves.
    pub outcome: Option<SearchOutcome>,
}

/// Summary of one completed hunt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRow {
    pub run:      u64,
    pub policy:   String,
    pub dim:      usize,
    pub moving:   bool,
    pub seed:     u64,
    pub actions:  u64,
    pub searches: u64,
    pub moves:    u64,
}

impl RunRow {
    pub fn new(run: u64, policy: impl Into<String>, config: &HuntConfig, report: &RunReport) -> Self {
        Self {
            run,
            policy:   policy.into(),
            dim:      config.dim,
            moving:   config.moving_target,
            seed:     config.seed,
            actions:  report.actions,
            searches: report.searches,
            moves:    report.moves,
        }
    }
}
