//! `hunt-sim` — the search loop that drives one policy against one board.
//!
//! # Action loop
//!
//! ```text
//! loop:
//!   ① Choose   — SearchPolicy::choose on a read-only SearchContext.
//!   ② Travel   — Free: relocate uncounted.
//!                Stepped: one action per greedy orthogonal step.
//!                Teleport: jump, paying `manhattan` actions in one lump.
//!   ③ Search   — up to `searches_at` consecutive searches, one action each.
//!                Found → stop.
//!   ④ Update   — decay belief at the searched cell; a moving target folds
//!                the proximity report into its feasibility horizon.
//!   ⑤ Target   — a moving target steps after every action (PerAction) or
//!                only after searches (PerSearch).
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | [`run_trials`] spreads trials over Rayon's thread pool. |
//! | `serde`    | Serde derives on reports and summaries.                 |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hunt_core::HuntConfig;
//! use hunt_policy::{PolicyId, PolicySpec};
//! use hunt_sim::{HuntBuilder, NoopObserver};
//!
//! let policy = PolicySpec::plain(PolicyId::Agent3).build();
//! let mut hunt = HuntBuilder::new(HuntConfig::with_dim(20), policy).build()?;
//! let report = hunt.run(&mut NoopObserver)?;
//! println!("found in {} actions", report.actions);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod trials;


pub use builder::HuntBuilder;
pub use error::{SimError, SimResult};
pub use observer::{HuntObserver, NoopObserver};
pub use sim::{Hunt, RunReport};
pub use trials::{PolicySummary, TrialRun, collect_trials, policy_seed, run_policy, run_trial, run_trials, summarize, trial_board};
