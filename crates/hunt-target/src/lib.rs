//! `hunt-target` — where the target is and where it cannot be.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`horizon`] | `FeasibilityHorizon` — per-cell "not here for N turns"       |
//! | [`process`] | `TargetProcess` — true location, random walk, proximity feed |
//!
//! # Feasibility horizon
//!
//! For a moving target, every failed search also reveals whether the target is
//! within [`PROXIMITY_RADIUS`][hunt_core::PROXIMITY_RADIUS] of the searched
//! cell.  Both answers rule cells out for a while:
//!
//! - **far** — cells within the radius of the searched cell cannot hold the
//!   target until it has had time to walk back in: `5 - d` turns.
//! - **near** — cells farther than the radius cannot hold the target until it
//!   has had time to walk out to them: `d - 6` turns.
//!
//! Each elapsed turn moves the target one step and decrements every countdown
//! by one.  [`TargetProcess::advance`] couples the two so the horizon can never
//! rule out the cell the target actually occupies; that invariant is checked
//! after every update and reported as `HuntError::InfeasibleTarget`.

pub mod horizon;
pub mod process;

#[cfg(test)]
mod tests;

pub use horizon::FeasibilityHorizon;
pub use process::TargetProcess;
