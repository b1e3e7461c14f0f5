//! Observer hooks for tracing a hunt action by action.

use hunt_core::{Cell, SearchOutcome};

use crate::RunReport;

/// Callbacks invoked by [`Hunt::run`][crate::Hunt::run] as actions happen.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  `action` is the running action count
/// *after* the event, so the first search of a run reports `1`.
///
/// # Example — search counter
///
/// ```rust,ignore
/// struct MissCounter(u64);
///
/// impl HuntObserver for MissCounter {
///     fn on_search(&mut self, _action: u64, _cell: Cell, outcome: SearchOutcome) {
///         if !outcome.is_found() {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait HuntObserver {
    /// One search of `cell`.
    fn on_search(&mut self, _action: u64, _cell: Cell, _outcome: SearchOutcome) {}

    /// The agent moved from `from` to `to`.  A stepped move is one action; a
    /// teleport reports the whole jump once, after paying its distance.
    fn on_move(&mut self, _action: u64, _from: Cell, _to: Cell) {}

    /// A moving target finished turn `turn` on `at`.
    fn on_target_step(&mut self, _turn: u64, _at: Cell) {}

    /// Called once when the target is found.
    fn on_found(&mut self, _report: &RunReport) {}
}

/// A [`HuntObserver`] that does nothing.
pub struct NoopObserver;

impl HuntObserver for NoopObserver {}
