//! Read-only simulation state passed to every policy decision.

use hunt_belief::{BeliefState, Ranker};
use hunt_core::{Cell, DetectionModel, TerrainGrid};
use hunt_target::FeasibilityHorizon;

/// A read-only snapshot of everything a policy may look at.
///
/// Built by `hunt-sim` immediately before each decision.  The target's true
/// location is deliberately absent.
pub struct SearchContext<'a> {
    /// Actions charged so far in this run (searches plus counted moves).
    pub actions: u64,

    /// The agent's current cell.
    pub at: Cell,

    pub belief: &'a BeliefState,

    pub terrain: &'a TerrainGrid,

    pub detection: &'a DetectionModel,

    /// Present only when the target moves.
    pub horizon: Option<&'a FeasibilityHorizon>,
}

impl<'a> SearchContext<'a> {
    #[inline]
    pub fn new(
        actions:   u64,
        at:        Cell,
        belief:    &'a BeliefState,
        terrain:   &'a TerrainGrid,
        detection: &'a DetectionModel,
        horizon:   Option<&'a FeasibilityHorizon>,
    ) -> Self {
        Self { actions, at, belief, terrain, detection, horizon }
    }

    /// Unfiltered ranker over this snapshot.
    #[inline]
    pub fn ranker(&self) -> Ranker<'a> {
        Ranker::new(self.belief, self.terrain, self.detection)
    }

    /// `true` unless the feasibility horizon rules `cell` out.
    #[inline]
    pub fn is_feasible(&self, cell: Cell) -> bool {
        self.horizon.is_none_or(|h| h.is_feasible(cell))
    }
}
