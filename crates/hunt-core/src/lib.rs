//! `hunt-core` — foundational types for the `hunt` search simulator.
//!
//! This crate is a dependency of every other `hunt-*` crate.  It has no
//! `hunt-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`cell`]        | `Cell`, `Grid` (bounds, neighbors, Manhattan balls)   |
//! | [`terrain`]     | `TerrainType`, `TerrainGrid`                          |
//! | [`detection`]   | `DetectionModel`, `SearchOutcome`                     |
//! | [`board`]       | `Board` — terrain plus the hidden target              |
//! | [`config`]      | `HuntConfig`                                          |
//! | [`rng`]         | `SimRng` (seedable, owned by one simulation)          |
//! | [`error`]       | `HuntError`, `HuntResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                          |
//! |---------|-----------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public data (board save/replay) |

pub mod board;
pub mod cell;
pub mod config;
pub mod detection;
pub mod error;
pub mod rng;
pub mod terrain;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use board::Board;
pub use cell::{Cell, Grid};
pub use config::HuntConfig;
pub use detection::{DetectionModel, PROXIMITY_RADIUS, SearchOutcome};
pub use error::{HuntError, HuntResult};
pub use rng::SimRng;
pub use terrain::{TerrainGrid, TerrainType};
