//! Top-level run configuration.

use crate::{Cell, Grid, HuntError, HuntResult};

/// Configuration for one simulation instance.
///
/// Typically filled from command-line flags by the driver and passed to
/// `hunt_sim::HuntBuilder`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HuntConfig {
    /// Grid side length.  Must be at least 1.
    pub dim: usize,

    /// `true` makes the target random-walk one orthogonal step per turn.
    pub moving_target: bool,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Cell the agent starts on.
    pub start: Cell,

    /// Optional action budget; `None` runs until the target is found.
    pub max_actions: Option<u64>,
}

impl Default for HuntConfig {
    fn default() -> Self {
        Self {
            dim:           50,
            moving_target: false,
            seed:          42,
            start:         Cell::ORIGIN,
            max_actions:   None,
        }
    }
}

impl HuntConfig {
    /// Stationary-target config on a `dim × dim` grid, other fields default.
    pub fn with_dim(dim: usize) -> Self {
        Self { dim, ..Self::default() }
    }

    /// Reject a non-positive dimension, an off-grid start, or a zero budget.
    pub fn validate(&self) -> HuntResult<Grid> {
        let grid = Grid::new(self.dim)?;
        if !grid.contains(self.start) {
            return Err(HuntError::InvalidConfig(format!(
                "start cell {} is outside the {}x{} grid",
                self.start, self.dim, self.dim,
            )));
        }
        if self.max_actions == Some(0) {
            return Err(HuntError::InvalidConfig("action budget must be positive".into()));
        }
        Ok(grid)
    }
}
