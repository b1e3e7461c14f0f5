//! `RankedPolicy` — the configurable built-in search policy.

use tracing::trace;

use hunt_belief::Ranking;
use hunt_core::{Cell, HuntResult};

use crate::{SearchContext, SearchPolicy, TargetClock, Travel};

/// Candidate area for each decision.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scope {
    Global,
    /// Only cells within a Manhattan radius of the agent.
    Local(LocalRadius),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LocalRadius {
    Fixed(usize),
    /// `max(5, dim / 5)`.
    Scaled,
}

impl LocalRadius {
    /// Radius for a `dim × dim` grid.
    #[inline]
    pub fn resolve(self, dim: usize) -> usize {
        match self {
            LocalRadius::Fixed(r) => r,
            LocalRadius::Scaled   => (dim / 5).max(5),
        }
    }
}

/// Searches per visit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Repeat {
    Once,
    Fixed(u32),
    /// Terrain code + 2: flat 2, hill 3, forest 4, cave 5.
    ByTerrain,
}

/// Everything that distinguishes one named policy from another.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolicyConfig {
    pub ranking: Ranking,
    pub scope:   Scope,
    pub travel:  Travel,
    pub repeat:  Repeat,
    /// Exclude cells the feasibility horizon rules out (moving target only).
    pub feasibility_aware: bool,
    pub clock:   TargetClock,
}

impl Default for PolicyConfig {
    /// Agent 1: containment, global, stepped, one search per visit.
    fn default() -> Self {
        Self {
            ranking:           Ranking::Containment,
            scope:             Scope::Global,
            travel:            Travel::Stepped,
            repeat:            Repeat::Once,
            feasibility_aware: false,
            clock:             TargetClock::PerAction,
        }
    }
}

/// A [`SearchPolicy`] that ranks cells with `hunt-belief` according to a
/// [`PolicyConfig`].  Stateless between decisions.
#[derive(Clone, Debug)]
pub struct RankedPolicy {
    name:   String,
    config: PolicyConfig,
}

impl RankedPolicy {
    pub fn new(name: impl Into<String>, config: PolicyConfig) -> Self {
        Self { name: name.into(), config }
    }

    #[inline]
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }
}

impl SearchPolicy for RankedPolicy {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose(&mut self, ctx: &SearchContext<'_>) -> HuntResult<Cell> {
        let dim = ctx.belief.grid().dim();
        let radius = match self.config.scope {
            Scope::Global   => None,
            Scope::Local(r) => Some(r.resolve(dim)),
        };
        let ranker = ctx.ranker();
        let choice = match ctx.horizon {
            Some(h) if self.config.feasibility_aware => ranker
                .filtered(|c| h.is_feasible(c))
                .best(self.config.ranking, ctx.at, radius)?,
            _ => ranker.best(self.config.ranking, ctx.at, radius)?,
        };
        trace!(policy = %self.name, at = %ctx.at, %choice, "chose cell");
        Ok(choice)
    }

    fn searches_at(&self, ctx: &SearchContext<'_>, cell: Cell) -> HuntResult<u32> {
        Ok(match self.config.repeat {
            Repeat::Once      => 1,
            Repeat::Fixed(n)  => n.max(1),
            Repeat::ByTerrain => u32::from(ctx.terrain.get(cell)?.code()) + 2,
        })
    }

    fn travel(&self) -> Travel {
        self.config.travel
    }

    fn target_clock(&self) -> TargetClock {
        self.config.clock
    }
}
