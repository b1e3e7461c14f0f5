//! Terrain-dependent detection model and the noisy search oracle.

use std::fmt;

use rand::Rng;

use crate::{Cell, HuntError, HuntResult, TerrainGrid, TerrainType};

/// Manhattan radius of the proximity signal a failed search reports for a
/// moving target ("the target is within 5 cells of where you looked").
pub const PROXIMITY_RADIUS: usize = 5;

/// Result of searching one cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    Found,
    Missing,
}

impl SearchOutcome {
    #[inline]
    pub fn is_found(self) -> bool {
        matches!(self, Self::Found)
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Found   => "found",
            Self::Missing => "missing",
        })
    }
}

/// Fixed mapping from terrain to the probability that a search of a cell
/// actually containing the target succeeds.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetectionModel {
    /// Indexed by [`TerrainType::code`].
    rates: [f64; 4],
}

impl Default for DetectionModel {
    /// Flat 0.9, Hill 0.7, Forest 0.3, Cave 0.1.
    fn default() -> Self {
        Self { rates: [0.9, 0.7, 0.3, 0.1] }
    }
}

impl DetectionModel {
    /// Custom rate table in terrain-code order.  Every rate must lie in
    /// `(0, 1]`, otherwise the target could be undetectable.
    pub fn with_rates(rates: [f64; 4]) -> HuntResult<Self> {
        for (terrain, rate) in TerrainType::ALL.iter().zip(rates) {
            if !(rate > 0.0 && rate <= 1.0) {
                return Err(HuntError::InvalidConfig(format!(
                    "detection rate for {terrain} must be in (0, 1], got {rate}"
                )));
            }
        }
        Ok(Self { rates })
    }

    /// Probability that a search finds a target that is present.
    #[inline]
    pub fn rate(&self, terrain: TerrainType) -> f64 {
        self.rates[terrain.code() as usize]
    }

    /// Probability that a search misses a target that is present.
    #[inline]
    pub fn miss_rate(&self, terrain: TerrainType) -> f64 {
        1.0 - self.rate(terrain)
    }

    /// Search `queried` while the target sits at `actual`.
    ///
    /// A wrong cell is always `Missing` and consumes no randomness; the right
    /// cell is `Found` with probability `rate(terrain)`.
    pub fn search<R: Rng + ?Sized>(
        &self,
        terrain: &TerrainGrid,
        actual:  Cell,
        queried: Cell,
        rng:     &mut R,
    ) -> HuntResult<SearchOutcome> {
        let kind = terrain.get(queried)?;
        if queried != actual {
            return Ok(SearchOutcome::Missing);
        }
        if rng.gen_bool(self.rate(kind)) {
            Ok(SearchOutcome::Found)
        } else {
            Ok(SearchOutcome::Missing)
        }
    }
}
