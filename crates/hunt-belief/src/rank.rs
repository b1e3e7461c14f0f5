//! Next-cell ranking heuristics.
//!
//! # Scores
//!
//! | Ranking               | Picks                | Score of cell `c` seen from `f`                  |
//! |-----------------------|----------------------|--------------------------------------------------|
//! | `Containment`         | argmax               | `belief[c]`                                      |
//! | `Detection`           | argmax               | `belief[c] * rate(c)`                            |
//! | `Cost`                | argmin               | `(d(f, c) + 1) / (belief[c] * rate(c))`          |
//! | `WeightedCost(damp)`  | argmin               | `damp(d(f, c)) / (belief[c] * rate(c))`          |
//!
//! Ties always go to the row-major-first candidate.  Cost rankings skip cells
//! whose `belief * rate` is zero (infinite cost) instead of dividing by it.
//!
//! # Filters and fallbacks
//!
//! A [`Ranker`] can carry a cell filter (moving-target policies exclude cells
//! the feasibility horizon rules out).  If the filter rejects every candidate
//! the ranking is repeated unfiltered; if a cost ranking still has no finite
//! candidate it falls back to the containment argmax over the same area.

use hunt_core::{Cell, DetectionModel, Grid, HuntResult, TerrainGrid};

use crate::BeliefState;

// ── Ranking ───────────────────────────────────────────────────────────────────

/// Which score a ranking call optimizes.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ranking {
    /// Highest chance the target is in the cell.
    Containment,
    /// Highest chance of finding the target if the cell is searched now.
    Detection,
    /// Lowest travel-plus-search cost per unit of detection probability.
    Cost,
    /// As `Cost`, with the distance term damped first.
    WeightedCost(Damping),
}

/// Distance damping for [`Ranking::WeightedCost`].  Both forms floor at 1 so
/// every cell inside the damping radius costs the same as the current cell.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Damping {
    /// `max(1, d + 1 - k)`
    Subtract(f64),
    /// `max(1, (d + 1) / 2 - k)`
    HalveThenSubtract(f64),
}

impl Damping {
    /// Damped distance term for a cell `distance` steps away.
    #[inline]
    pub fn apply(self, distance: usize) -> f64 {
        let raw = (distance + 1) as f64;
        match self {
            Damping::Subtract(k)          => (raw - k).max(1.0),
            Damping::HalveThenSubtract(k) => (raw * 0.5 - k).max(1.0),
        }
    }
}

// ── Area ──────────────────────────────────────────────────────────────────────

/// The candidate set a ranking scans.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Area {
    /// Every cell on the grid.
    Global,
    /// The in-bounds Manhattan ball of `radius` around `center`.
    Diamond { center: Cell, radius: usize },
}

impl Area {
    fn cells(self, grid: Grid) -> Box<dyn Iterator<Item = Cell>> {
        match self {
            Area::Global => Box::new(grid.cells()),
            Area::Diamond { center, radius } => Box::new(grid.diamond(center, radius)),
        }
    }
}

// ── Ranker ────────────────────────────────────────────────────────────────────

fn allow_all(_: Cell) -> bool {
    true
}

/// Read-only view combining belief, terrain and detection model for ranking.
///
/// Built fresh for each decision; holds only borrows.
pub struct Ranker<'a, F = fn(Cell) -> bool> {
    belief:    &'a BeliefState,
    terrain:   &'a TerrainGrid,
    detection: &'a DetectionModel,
    filter:    F,
}

impl<'a> Ranker<'a> {
    /// An unfiltered ranker.
    pub fn new(
        belief:    &'a BeliefState,
        terrain:   &'a TerrainGrid,
        detection: &'a DetectionModel,
    ) -> Self {
        Self { belief, terrain, detection, filter: allow_all }
    }
}

impl<'a, F: Fn(Cell) -> bool> Ranker<'a, F> {
    /// Replace the cell filter.  Cells for which `filter` returns `false` are
    /// excluded unless that would leave no candidate at all.
    pub fn filtered<G: Fn(Cell) -> bool>(self, filter: G) -> Ranker<'a, G> {
        Ranker {
            belief:    self.belief,
            terrain:   self.terrain,
            detection: self.detection,
            filter,
        }
    }

    // ── Named rankings ────────────────────────────────────────────────────

    /// Global argmax of belief.
    pub fn best_by_containment(&self) -> Cell {
        self.rank_area(Ranking::Containment, Cell::ORIGIN, Area::Global)
    }

    /// Global argmax of `belief * detection rate`.
    pub fn best_by_detection(&self) -> Cell {
        self.rank_area(Ranking::Detection, Cell::ORIGIN, Area::Global)
    }

    /// Global argmin of `(d + 1) / (belief * rate)` measured from `from`.
    pub fn best_by_cost(&self, from: Cell) -> HuntResult<Cell> {
        self.best(Ranking::Cost, from, None)
    }

    /// Global argmin of the damped cost measured from `from`.
    pub fn best_by_weighted_cost(&self, from: Cell, damping: Damping) -> HuntResult<Cell> {
        self.best(Ranking::WeightedCost(damping), from, None)
    }

    /// `ranking` restricted to the diamond of `radius` around `from`.
    pub fn best_local(&self, from: Cell, radius: usize, ranking: Ranking) -> HuntResult<Cell> {
        self.best(ranking, from, Some(radius))
    }

    /// General entry point: `ranking` seen from `from`, over the whole grid
    /// (`radius == None`) or a local diamond.
    pub fn best(&self, ranking: Ranking, from: Cell, radius: Option<usize>) -> HuntResult<Cell> {
        let from = self.belief.grid().check(from)?;
        let area = match radius {
            None         => Area::Global,
            Some(radius) => Area::Diamond { center: from, radius },
        };
        Ok(self.rank_area(ranking, from, area))
    }

    // ── Scores ────────────────────────────────────────────────────────────

    /// `belief * rate` — probability of finding the target there right now.
    /// `cell` must be on the grid.
    #[inline]
    pub(crate) fn expected_find(&self, cell: Cell) -> f64 {
        let i = self.belief.grid().index(cell);
        self.belief.at_index(i) * self.detection.rate(self.terrain.at_index(i))
    }

    /// Cost of searching `cell` next from `from`, or `None` when the
    /// expected find probability is zero.
    pub(crate) fn cost(&self, from: Cell, cell: Cell, damping: Option<Damping>) -> Option<f64> {
        let denom = self.expected_find(cell);
        if denom <= 0.0 {
            return None;
        }
        let distance = from.manhattan(cell);
        let numer = match damping {
            None    => (distance + 1) as f64,
            Some(d) => d.apply(distance),
        };
        Some(numer / denom)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn rank_area(&self, ranking: Ranking, from: Cell, area: Area) -> Cell {
        let grid = self.belief.grid();
        self.pick(ranking, from, area, true)
            .or_else(|| self.pick(ranking, from, area, false))
            .or_else(|| argmax(area.cells(grid), |c| self.containment(c)))
            .unwrap_or(from)
    }

    fn pick(&self, ranking: Ranking, from: Cell, area: Area, filtered: bool) -> Option<Cell> {
        let cells = area
            .cells(self.belief.grid())
            .filter(|&c| !filtered || (self.filter)(c));
        match ranking {
            Ranking::Containment     => argmax(cells, |c| self.containment(c)),
            Ranking::Detection       => argmax(cells, |c| self.expected_find(c)),
            Ranking::Cost            => argmin(cells.filter_map(|c| self.cost(from, c, None).map(|s| (c, s)))),
            Ranking::WeightedCost(d) => argmin(cells.filter_map(|c| self.cost(from, c, Some(d)).map(|s| (c, s)))),
        }
    }

    #[inline]
    fn containment(&self, cell: Cell) -> f64 {
        self.belief.at_index(self.belief.grid().index(cell))
    }
}

/// First cell with the strictly largest score.  Candidates arrive row-major,
/// so ties resolve to the row-major-first cell.
fn argmax(cells: impl Iterator<Item = Cell>, score: impl Fn(Cell) -> f64) -> Option<Cell> {
    let mut best: Option<(Cell, f64)> = None;
    for cell in cells {
        let s = score(cell);
        match best {
            Some((_, top)) if s <= top => {}
            _ => best = Some((cell, s)),
        }
    }
    best.map(|(cell, _)| cell)
}

/// First cell with the strictly smallest score.
fn argmin(scored: impl Iterator<Item = (Cell, f64)>) -> Option<Cell> {
    let mut best: Option<(Cell, f64)> = None;
    for (cell, s) in scored {
        match best {
            Some((_, low)) if s >= low => {}
            _ => best = Some((cell, s)),
        }
    }
    best.map(|(cell, _)| cell)
}
