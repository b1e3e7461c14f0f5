//! `hunt-policy` — how the agent decides where to search next.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`context`] | `SearchContext<'a>` — read-only decision snapshot                  |
//! | [`policy`]  | `SearchPolicy` trait, `Travel`, `TargetClock`                      |
//! | [`ranked`]  | `RankedPolicy` + `PolicyConfig` — the one built-in implementation  |
//! | [`presets`] | `PolicyId`, `PolicySpec` — named configurations and rosters        |
//!
//! # Design notes
//!
//! Every named policy (rule 1/2, agents 1–4, the three local windows,
//! repeat, improved, teleport and their moving-target-aware counterparts) is
//! the same [`RankedPolicy`] with a different [`PolicyConfig`].  The simulation loop in
//! `hunt-sim` is generic over [`SearchPolicy`], so custom strategies plug in
//! without touching the loop.

pub mod context;
pub mod policy;
pub mod presets;
pub mod ranked;

#[cfg(test)]
mod tests;

pub use context::SearchContext;
pub use policy::{SearchPolicy, TargetClock, Travel};
pub use presets::{PolicyId, PolicySpec};
pub use ranked::{LocalRadius, PolicyConfig, RankedPolicy, Repeat, Scope};
