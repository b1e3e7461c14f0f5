//! A simulation instance's fixed landscape: terrain plus the hidden target's
//! starting cell.

use rand::Rng;

use crate::{Cell, Grid, HuntError, HuntResult, TerrainGrid};

/// Terrain and the target's initial location.
///
/// Policies never see a `Board`; the simulation loop hands them the terrain
/// only.  Boards are cloned to run several policies on the same landscape and,
/// with the `serde` feature, saved and replayed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    pub terrain: TerrainGrid,
    pub target:  Cell,
}

impl Board {
    /// Replay a known board.  The target must lie on the terrain grid.
    pub fn new(terrain: TerrainGrid, target: Cell) -> HuntResult<Self> {
        terrain.grid().check(target)?;
        Ok(Self { terrain, target })
    }

    /// Random terrain, then a uniformly placed target.
    pub fn random<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> HuntResult<Self> {
        let terrain = TerrainGrid::random(grid, rng)?;
        let target = Cell::new(rng.gen_range(0..grid.dim()), rng.gen_range(0..grid.dim()));
        Ok(Self { terrain, target })
    }

    #[inline]
    pub fn grid(&self) -> Grid {
        self.terrain.grid()
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.terrain.grid().dim()
    }

    /// Confirm this board matches an expected dimension.
    pub fn expect_dim(&self, dim: usize) -> HuntResult<()> {
        if self.dim() != dim {
            return Err(HuntError::InvalidConfig(format!(
                "board is {}x{}, configuration expects {dim}x{dim}",
                self.dim(),
                self.dim(),
            )));
        }
        Ok(())
    }
}
