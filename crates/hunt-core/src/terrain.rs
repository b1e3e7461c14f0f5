//! Terrain categories and the immutable per-cell terrain grid.

use std::fmt;

use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};

use crate::{Cell, Grid, HuntError, HuntResult};

// ── TerrainType ───────────────────────────────────────────────────────────────

/// Terrain category of one cell.  Fixes how hard a present target is to spot.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TerrainType {
    #[default]
    Flat,
    Hill,
    Forest,
    Cave,
}

impl TerrainType {
    /// All variants in code order.
    pub const ALL: [TerrainType; 4] = [Self::Flat, Self::Hill, Self::Forest, Self::Cave];

    /// Generation weights, parallel to [`ALL`][Self::ALL].
    pub const WEIGHTS: [f64; 4] = [0.2, 0.3, 0.3, 0.2];

    /// Numeric code: Flat 0, Hill 1, Forest 2, Cave 3.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Single-letter tag used by grid dumps.
    pub fn glyph(self) -> char {
        match self {
            Self::Flat   => 'F',
            Self::Hill   => 'H',
            Self::Forest => 'T',
            Self::Cave   => 'C',
        }
    }
}

impl fmt::Display for TerrainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Flat   => "flat",
            Self::Hill   => "hill",
            Self::Forest => "forest",
            Self::Cave   => "cave",
        };
        f.write_str(s)
    }
}

// ── TerrainGrid ───────────────────────────────────────────────────────────────

/// Terrain assignment for every cell.  Created once per simulation run and
/// never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainGrid {
    grid:  Grid,
    cells: Vec<TerrainType>,
}

impl TerrainGrid {
    /// Independent weighted draw per cell using [`TerrainType::WEIGHTS`].
    pub fn random<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> HuntResult<Self> {
        Self::random_weighted(grid, TerrainType::WEIGHTS, rng)
    }

    /// Independent draw per cell with custom category weights (code order).
    ///
    /// Weights must be non-negative with a positive sum.
    pub fn random_weighted<R: Rng + ?Sized>(
        grid:    Grid,
        weights: [f64; 4],
        rng:     &mut R,
    ) -> HuntResult<Self> {
        let dist = WeightedIndex::new(weights)
            .map_err(|e| HuntError::InvalidConfig(format!("terrain weights {weights:?}: {e}")))?;
        let cells = (0..grid.len())
            .map(|_| TerrainType::ALL[dist.sample(rng)])
            .collect();
        Ok(Self { grid, cells })
    }

    /// Every cell set to `terrain`.
    pub fn uniform(grid: Grid, terrain: TerrainType) -> Self {
        Self { grid, cells: vec![terrain; grid.len()] }
    }

    /// Replay an explicit row-major terrain layout.
    pub fn from_cells(grid: Grid, cells: Vec<TerrainType>) -> HuntResult<Self> {
        if cells.len() != grid.len() {
            return Err(HuntError::InvalidConfig(format!(
                "terrain has {} cells, a {}x{} grid needs {}",
                cells.len(),
                grid.dim(),
                grid.dim(),
                grid.len(),
            )));
        }
        Ok(Self { grid, cells })
    }

    #[inline]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Terrain at `cell`, or `OutOfBounds`.
    #[inline]
    pub fn get(&self, cell: Cell) -> HuntResult<TerrainType> {
        let cell = self.grid.check(cell)?;
        Ok(self.cells[self.grid.index(cell)])
    }

    /// Terrain by flat row-major index (caller guarantees bounds).
    #[inline]
    pub fn at_index(&self, index: usize) -> TerrainType {
        self.cells[index]
    }

    /// Raw row-major terrain slice.
    #[inline]
    pub fn cells(&self) -> &[TerrainType] {
        &self.cells
    }

    /// Number of cells of each terrain type, in code order.
    pub fn histogram(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for t in &self.cells {
            counts[t.code() as usize] += 1;
        }
        counts
    }
}

impl fmt::Display for TerrainGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.grid.dim()) {
            let line: String = row.iter().map(|t| t.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
