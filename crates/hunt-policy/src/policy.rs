//! The `SearchPolicy` trait — the extension point for search strategies.

use hunt_core::{Cell, HuntResult};

use crate::SearchContext;

/// How the agent gets from its current cell to the cell it chose.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Travel {
    /// Relocation is free and not counted (rule 1 / rule 2).
    Free,
    /// One action per orthogonal step along a greedy path.
    Stepped,
    /// Jump straight there, paying one action per cell of Manhattan distance.
    Teleport,
}

/// When a moving target takes its random-walk step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetClock {
    /// After every action: each search and each travel step.
    PerAction,
    /// Once after each search; travel takes no turns.
    PerSearch,
}

/// Pluggable search strategy.
///
/// The simulation loop asks [`choose`][Self::choose] for a cell, travels there
/// according to [`travel`][Self::travel], searches it
/// [`searches_at`][Self::searches_at] times (stopping early on success), and
/// asks again.
///
/// # Required methods
///
/// Only `name` and `choose` are required.  The defaults describe a policy that
/// walks step by step, searches once, and lets a moving target step after
/// every action.
///
/// # Example
///
/// ```rust,ignore
/// struct SweepRows;
///
/// impl SearchPolicy for SweepRows {
///     fn name(&self) -> &str { "sweep" }
///     fn choose(&mut self, ctx: &SearchContext<'_>) -> HuntResult<Cell> {
///         Ok(ctx.ranker().best_by_containment())
///     }
/// }
/// ```
pub trait SearchPolicy: Send {
    /// Label used in logs and reports.
    fn name(&self) -> &str;

    /// The next cell to search.  Must be on the grid.
    fn choose(&mut self, ctx: &SearchContext<'_>) -> HuntResult<Cell>;

    /// How many consecutive searches to make at `cell` before choosing again.
    ///
    /// Default: 1.
    fn searches_at(&self, _ctx: &SearchContext<'_>, _cell: Cell) -> HuntResult<u32> {
        Ok(1)
    }

    /// Default: [`Travel::Stepped`].
    fn travel(&self) -> Travel {
        Travel::Stepped
    }

    /// Default: [`TargetClock::PerAction`].
    fn target_clock(&self) -> TargetClock {
        TargetClock::PerAction
    }
}

impl<P: SearchPolicy + ?Sized> SearchPolicy for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn choose(&mut self, ctx: &SearchContext<'_>) -> HuntResult<Cell> {
        (**self).choose(ctx)
    }

    fn searches_at(&self, ctx: &SearchContext<'_>, cell: Cell) -> HuntResult<u32> {
        (**self).searches_at(ctx, cell)
    }

    fn travel(&self) -> Travel {
        (**self).travel()
    }

    fn target_clock(&self) -> TargetClock {
        (**self).target_clock()
    }
}
