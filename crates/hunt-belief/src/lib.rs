//! `hunt-belief` — the agent's belief about where the target is.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                         |
//! |-----------|------------------------------------------------------------------|
//! | [`state`] | `BeliefState` — per-cell relative likelihood and its decay rule  |
//! | [`rank`]  | `Ranker`, `Ranking`, `Damping`, `Area` — next-cell heuristics    |
//!
//! # Design notes
//!
//! The belief grid starts uniform at `1/dim²` and is only ever multiplied by a
//! terrain's miss rate after a failed search of that cell.  It is **not**
//! renormalized afterwards, so values are relative likelihood scores rather
//! than a probability distribution.  Every ranking compares magnitudes only,
//! which is unaffected by the missing normalization constant.
//!
//! Rankings never mutate state and never consume randomness: given the same
//! belief grid they always pick the same cell, breaking ties in row-major
//! order.

pub mod rank;
pub mod state;


pub use rank::{Area, Damping, Ranker, Ranking};
pub use state::BeliefState;
