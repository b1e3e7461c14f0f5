//! The belief grid and its update rule.

use std::fmt::Write as _;

use hunt_core::{Cell, DetectionModel, Grid, HuntError, HuntResult, TerrainGrid};

/// Per-cell relative likelihood that the target occupies that cell.
///
/// Row-major, one `f64` per cell.  Values are non-negative and only shrink.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeliefState {
    grid:   Grid,
    values: Vec<f64>,
}

impl BeliefState {
    /// Uniform prior: every cell `1/dim²`.
    pub fn new(grid: Grid) -> Self {
        let p = 1.0 / grid.len() as f64;
        Self { grid, values: vec![p; grid.len()] }
    }

    /// Start from explicit row-major values (e.g. a replayed or hand-built
    /// scenario).  Values must be finite and non-negative.
    pub fn from_values(grid: Grid, values: Vec<f64>) -> HuntResult<Self> {
        if values.len() != grid.len() {
            return Err(HuntError::InvalidConfig(format!(
                "belief has {} cells, grid has {}",
                values.len(),
                grid.len(),
            )));
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v < 0.0) {
            return Err(HuntError::InvalidConfig(format!("belief value {bad} is not a finite non-negative number")));
        }
        Ok(Self { grid, values })
    }

    #[inline]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Belief at `cell`, or `OutOfBounds`.
    #[inline]
    pub fn get(&self, cell: Cell) -> HuntResult<f64> {
        let cell = self.grid.check(cell)?;
        Ok(self.values[self.grid.index(cell)])
    }

    /// Belief by flat index (caller guarantees bounds).
    #[inline]
    pub(crate) fn at_index(&self, index: usize) -> f64 {
        self.values[index]
    }

    /// Raw row-major belief slice.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Sum over all cells.  Exactly 1 only before the first failed search.
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Apply a failed search at `cell`: multiply its belief by the terrain's
    /// miss rate.  All other cells are untouched.  Returns the new value.
    pub fn decay_on_failure(
        &mut self,
        cell:      Cell,
        terrain:   &TerrainGrid,
        detection: &DetectionModel,
    ) -> HuntResult<f64> {
        let kind = terrain.get(cell)?;
        let cell = self.grid.check(cell)?;
        let slot = &mut self.values[self.grid.index(cell)];
        *slot *= detection.miss_rate(kind);
        Ok(*slot)
    }

    /// Multi-line dump: one row per grid row, each cell as terrain glyph
    /// followed by its belief in scientific notation.
    pub fn render(&self, terrain: &TerrainGrid) -> String {
        let dim = self.grid.dim();
        let mut out = String::with_capacity(self.values.len() * 12);
        for (i, value) in self.values.iter().enumerate() {
            let glyph = terrain.at_index(i).glyph();
            // Writing to a String cannot fail.
            let _ = write!(out, "{glyph}{value:.3e}");
            out.push(if (i + 1) % dim == 0 { '\n' } else { ' ' });
        }
        out
    }
}
