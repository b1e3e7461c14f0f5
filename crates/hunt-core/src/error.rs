//! Framework error type.
//!
//! Sub-crates may define their own error enums and wrap `HuntError` as one
//! variant (see `hunt_sim::SimError`).  Every variant here is a contract
//! violation surfaced to the caller immediately; nothing is retried.

use thiserror::Error;

use crate::Cell;

/// The top-level error type for `hunt-core` and a common base for sub-crates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HuntError {
    #[error("cell {cell} is outside the {dim}x{dim} grid")]
    OutOfBounds { cell: Cell, dim: usize },

    #[error("configuration error: {0}")]
    InvalidConfig(String),

    #[error("unknown policy `{0}`")]
    UnknownPolicy(String),

    /// The feasibility horizon excluded the cell the target actually occupies.
    #[error("target cell {cell} is marked infeasible for {horizon} more turns")]
    InfeasibleTarget { cell: Cell, horizon: u32 },
}

/// Shorthand result type for all `hunt-*` crates.
pub type HuntResult<T> = Result<T, HuntError>;
