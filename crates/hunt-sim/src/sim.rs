//! The `Hunt` struct and its action loop.

use rand::RngCore;
use tracing::{debug, trace};

use hunt_belief::BeliefState;
use hunt_core::{Board, Cell, DetectionModel, HuntConfig, SimRng};
use hunt_policy::{SearchContext, SearchPolicy, TargetClock, Travel};
use hunt_target::TargetProcess;

use crate::{HuntObserver, SimError, SimResult};

// ── RunReport ─────────────────────────────────────────────────────────────────

/// Counters for one completed hunt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunReport {
    /// Searches plus counted moves: the cost a policy is scored on.
    pub actions:  u64,
    pub searches: u64,
    /// Counted moves.  Always 0 for free-travel policies.
    pub moves:    u64,
    /// Turns the target walked.  Always 0 for a stationary target.
    pub turns:    u64,
    /// Where the target was when it was found.
    pub found_at: Cell,
}

// ── Hunt ──────────────────────────────────────────────────────────────────────

/// One agent, one policy, one board.
///
/// `Hunt<P, R>` owns every piece of mutable state of a run (belief grid,
/// target process, agent position, counters and the RNG) and drives the
/// choose → travel → search → update loop until the target is found.
///
/// Create via [`HuntBuilder`][crate::HuntBuilder].
pub struct Hunt<P: SearchPolicy, R: RngCore = SimRng> {
    pub(crate) config:    HuntConfig,
    pub(crate) board:     Board,
    pub(crate) detection: DetectionModel,
    pub(crate) belief:    BeliefState,
    pub(crate) target:    TargetProcess,
    pub(crate) policy:    P,
    pub(crate) rng:       R,
    pub(crate) at:        Cell,
    pub(crate) actions:   u64,
    pub(crate) searches:  u64,
    pub(crate) moves:     u64,
    /// Searches still owed to the current visit.
    pub(crate) pending:   u32,
    pub(crate) found:     Option<RunReport>,
}

impl<P: SearchPolicy, R: RngCore> Hunt<P, R> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until the target is found, or until `config.max_actions` is spent.
    ///
    /// Calling `run` again after a find returns the same report.
    pub fn run<O: HuntObserver>(&mut self, observer: &mut O) -> SimResult<RunReport> {
        self.drive(self.config.max_actions, observer)
    }

    /// Run with an external action budget, ignoring `config.max_actions`.
    ///
    /// Fails with [`SimError::BudgetExhausted`] instead of taking the action
    /// that would exceed `budget`.  The hunt keeps its state, so it can be
    /// resumed with a larger budget.  A visit cut short between repeat
    /// searches finishes its remaining searches on resume before choosing
    /// again.  A walk cut short keeps the cells already walked and chooses
    /// again from there.
    pub fn run_bounded<O: HuntObserver>(
        &mut self,
        budget:   u64,
        observer: &mut O,
    ) -> SimResult<RunReport> {
        self.drive(Some(budget), observer)
    }

    #[inline]
    pub fn config(&self) -> &HuntConfig {
        &self.config
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn belief(&self) -> &BeliefState {
        &self.belief
    }

    #[inline]
    pub fn target(&self) -> &TargetProcess {
        &self.target
    }

    #[inline]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// The agent's current cell.
    #[inline]
    pub fn position(&self) -> Cell {
        self.at
    }

    #[inline]
    pub fn actions(&self) -> u64 {
        self.actions
    }

    /// Belief grid with terrain glyphs, one row per line.
    pub fn render(&self) -> String {
        self.belief.render(&self.board.terrain)
    }

    // ── Loop ──────────────────────────────────────────────────────────────

    fn drive<O: HuntObserver>(
        &mut self,
        budget:   Option<u64>,
        observer: &mut O,
    ) -> SimResult<RunReport> {
        if let Some(report) = self.found {
            return Ok(report);
        }
        if self.actions == 0 {
            debug!(
                policy = self.policy.name(),
                dim    = self.board.dim(),
                moving = self.target.is_moving(),
                "hunt started",
            );
        }
        loop {
            if self.pending == 0 {
                // ── Choose ────────────────────────────────────────────────
                let ctx = SearchContext::new(
                    self.actions,
                    self.at,
                    &self.belief,
                    &self.board.terrain,
                    &self.detection,
                    self.target.horizon(),
                );
                let dest = self.board.grid().check(self.policy.choose(&ctx)?)?;
                let repeats = self.policy.searches_at(&ctx, dest)?.max(1);

                // ── Travel ────────────────────────────────────────────────
                self.travel(dest, budget, observer)?;
                self.pending = repeats;
            }

            // ── Search × repeats ──────────────────────────────────────────
            while self.pending > 0 {
                let found = self.search(budget, observer)?;
                self.pending -= 1;
                if let Some(report) = found {
                    return Ok(report);
                }
            }
        }
    }

    fn travel<O: HuntObserver>(
        &mut self,
        dest:     Cell,
        budget:   Option<u64>,
        observer: &mut O,
    ) -> SimResult<()> {
        let per_action = self.policy.target_clock() == TargetClock::PerAction;
        match self.policy.travel() {
            Travel::Free => self.at = dest,
            Travel::Stepped => {
                while self.at != dest {
                    self.spend(1, budget)?;
                    let from = self.at;
                    self.at = from.step_toward(dest);
                    self.moves += 1;
                    trace!(action = self.actions, %from, to = %self.at, "move");
                    observer.on_move(self.actions, from, self.at);
                    if per_action {
                        self.tick_target(observer)?;
                    }
                }
            }
            Travel::Teleport => {
                let distance = self.at.manhattan(dest) as u64;
                if distance > 0 {
                    self.spend(distance, budget)?;
                    let from = self.at;
                    self.at = dest;
                    self.moves += distance;
                    trace!(action = self.actions, %from, to = %dest, distance, "teleport");
                    observer.on_move(self.actions, from, dest);
                    if per_action {
                        for _ in 0..distance {
                            self.tick_target(observer)?;
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// One search of the current cell.  `Some(report)` when it found the
    /// target.
    fn search<O: HuntObserver>(
        &mut self,
        budget:   Option<u64>,
        observer: &mut O,
    ) -> SimResult<Option<RunReport>> {
        self.spend(1, budget)?;
        self.searches += 1;
        let here = self.at;
        let outcome = self.detection.search(
            &self.board.terrain,
            self.target.location(),
            here,
            &mut self.rng,
        )?;
        trace!(action = self.actions, cell = %here, %outcome, "search");
        observer.on_search(self.actions, here, outcome);

        if outcome.is_found() {
            let report = self.report();
            debug!(
                policy   = self.policy.name(),
                actions  = report.actions,
                searches = report.searches,
                moves    = report.moves,
                "target found",
            );
            self.found = Some(report);
            observer.on_found(&report);
            return Ok(Some(report));
        }

        self.belief.decay_on_failure(here, &self.board.terrain, &self.detection)?;
        if self.target.is_moving() {
            self.target.observe_miss(here)?;
            self.tick_target(observer)?;
        }
        Ok(None)
    }

    /// One elapsed turn for a moving target.
    fn tick_target<O: HuntObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        if self.target.is_moving() {
            let at = self.target.advance(&mut self.rng)?;
            observer.on_target_step(self.target.turns(), at);
        }
        Ok(())
    }

    /// Charge `n` actions, refusing any that would overrun `budget`.
    fn spend(&mut self, n: u64, budget: Option<u64>) -> SimResult<()> {
        if let Some(budget) = budget {
            if self.actions + n > budget {
                return Err(SimError::BudgetExhausted { budget });
            }
        }
        self.actions += n;
        Ok(())
    }

    fn report(&self) -> RunReport {
        RunReport {
            actions:  self.actions,
            searches: self.searches,
            moves:    self.moves,
            turns:    self.target.turns(),
            found_at: self.target.location(),
        }
    }
}
