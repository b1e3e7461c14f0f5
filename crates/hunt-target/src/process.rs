//! The hidden target: true location, per-turn random walk, and the
//! proximity signal that feeds the feasibility horizon.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::trace;

use hunt_core::{Cell, Grid, HuntError, HuntResult, PROXIMITY_RADIUS};

use crate::FeasibilityHorizon;

/// Owns the target's true location.  Only the simulation loop may read it;
/// policies see the horizon, never the location.
#[derive(Clone, Debug)]
pub struct TargetProcess {
    grid:     Grid,
    location: Cell,
    /// `Some` exactly when the target moves.
    horizon:  Option<FeasibilityHorizon>,
    turns:    u64,
}

impl TargetProcess {
    /// Place the target at `start`.  A moving target also gets an all-feasible
    /// horizon.
    pub fn new(grid: Grid, start: Cell, moving: bool) -> HuntResult<Self> {
        let location = grid.check(start)?;
        Ok(Self {
            grid,
            location,
            horizon: moving.then(|| FeasibilityHorizon::new(grid)),
            turns: 0,
        })
    }

    #[inline]
    pub fn location(&self) -> Cell {
        self.location
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.horizon.is_some()
    }

    /// The feasibility horizon, for moving targets.
    #[inline]
    pub fn horizon(&self) -> Option<&FeasibilityHorizon> {
        self.horizon.as_ref()
    }

    /// Turns elapsed via [`advance`][Self::advance].
    #[inline]
    pub fn turns(&self) -> u64 {
        self.turns
    }

    /// `true` unless the horizon rules `cell` out.  Always `true` for a
    /// stationary target.
    #[inline]
    pub fn is_feasible(&self, cell: Cell) -> bool {
        self.horizon.as_ref().is_none_or(|h| h.is_feasible(cell))
    }

    /// Move a moving target to a uniformly chosen orthogonal neighbor.
    ///
    /// A stationary target, or the lone cell of a 1×1 grid, stays put.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> HuntResult<Cell> {
        if !self.is_moving() {
            return Ok(self.location);
        }
        let neighbors = self.grid.neighbors(self.location)?;
        if let Some(&next) = neighbors.choose(rng) {
            trace!(from = %self.location, to = %next, "target step");
            self.location = next;
        }
        Ok(self.location)
    }

    /// Decrement every horizon countdown by one turn.
    pub fn decay(&mut self) {
        if let Some(h) = self.horizon.as_mut() {
            h.decay();
        }
    }

    /// One elapsed turn: [`step`][Self::step] then [`decay`][Self::decay].
    ///
    /// No-op for a stationary target.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> HuntResult<Cell> {
        if !self.is_moving() {
            return Ok(self.location);
        }
        self.step(rng)?;
        self.decay();
        self.turns += 1;
        self.check_invariant()?;
        Ok(self.location)
    }

    /// Whether the target is within [`PROXIMITY_RADIUS`] of `searched`.
    pub fn is_near(&self, searched: Cell) -> HuntResult<bool> {
        let searched = self.grid.check(searched)?;
        Ok(searched.manhattan(self.location) <= PROXIMITY_RADIUS)
    }

    /// Record a failed search of `searched`: fold the proximity answer into
    /// the horizon (moving targets only) and return it.
    pub fn observe_miss(&mut self, searched: Cell) -> HuntResult<bool> {
        let near = self.is_near(searched)?;
        if let Some(h) = self.horizon.as_mut() {
            if near {
                h.mark_nearby(searched, PROXIMITY_RADIUS)?;
            } else {
                h.mark_infeasible(searched)?;
            }
            self.check_invariant()?;
        }
        Ok(near)
    }

    /// The horizon must read zero at the target's true cell.
    pub fn check_invariant(&self) -> HuntResult<()> {
        let Some(h) = self.horizon.as_ref() else {
            return Ok(());
        };
        let horizon = h.get(self.location)?;
        if horizon != 0 {
            return Err(HuntError::InfeasibleTarget { cell: self.location, horizon });
        }
        Ok(())
    }
}
