//! Per-cell countdowns of turns during which the target cannot be there.

use hunt_core::{Cell, Grid, HuntResult, PROXIMITY_RADIUS};

/// `dim²` countdowns, row-major.  Zero means "feasible".
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeasibilityHorizon {
    grid:  Grid,
    turns: Vec<u32>,
}

impl FeasibilityHorizon {
    /// Every cell feasible.
    pub fn new(grid: Grid) -> Self {
        Self { grid, turns: vec![0; grid.len()] }
    }

    #[inline]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Remaining turns at `cell`, or `OutOfBounds`.
    pub fn get(&self, cell: Cell) -> HuntResult<u32> {
        let cell = self.grid.check(cell)?;
        Ok(self.turns[self.grid.index(cell)])
    }

    /// `true` iff the countdown at `cell` is zero.  Off-grid cells are never
    /// feasible.
    #[inline]
    pub fn is_feasible(&self, cell: Cell) -> bool {
        self.grid.contains(cell) && self.turns[self.grid.index(cell)] == 0
    }

    /// Raw row-major countdowns.
    #[inline]
    pub fn values(&self) -> &[u32] {
        &self.turns
    }

    /// Number of cells currently ruled out.
    pub fn blocked(&self) -> usize {
        self.turns.iter().filter(|&&t| t > 0).count()
    }

    /// The target was more than [`PROXIMITY_RADIUS`] away from `searched`:
    /// every cell `d ≤ 5` from it gets at least `5 - d` turns.
    pub fn mark_infeasible(&mut self, searched: Cell) -> HuntResult<()> {
        let searched = self.grid.check(searched)?;
        for cell in self.grid.diamond(searched, PROXIMITY_RADIUS) {
            let hold = (PROXIMITY_RADIUS - cell.manhattan(searched)) as u32;
            self.raise(cell, hold);
        }
        Ok(())
    }

    /// The target was within `radius` of `center`: every cell farther than
    /// `radius` gets at least `d - (radius + 1)` turns.
    pub fn mark_nearby(&mut self, center: Cell, radius: usize) -> HuntResult<()> {
        let center = self.grid.check(center)?;
        for cell in self.grid.cells() {
            let d = cell.manhattan(center);
            if d > radius {
                self.raise(cell, (d - (radius + 1)) as u32);
            }
        }
        Ok(())
    }

    /// One elapsed turn: every countdown drops by one, floored at zero.
    pub fn decay(&mut self) {
        for t in &mut self.turns {
            *t = t.saturating_sub(1);
        }
    }

    #[inline]
    fn raise(&mut self, cell: Cell, hold: u32) {
        let slot = &mut self.turns[self.grid.index(cell)];
        *slot = (*slot).max(hold);
    }
}
