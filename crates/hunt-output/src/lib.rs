//! `hunt-output` — trace and summary writers for hunt simulations.
//!
//! | File          | One row per                         | Columns                                              |
//! |---------------|-------------------------------------|------------------------------------------------------|
//! | `actions.csv` | search or counted move              | `run, action, kind, row, col, outcome`               |
//! | `runs.csv`    | completed hunt                      | `run, policy, dim, moving, seed, actions, searches, moves` |
//!
//! [`CsvWriter`] implements [`OutputWriter`] and is driven by
//! [`TraceObserver`], which implements `hunt_sim::HuntObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hunt_output::{CsvWriter, RunRow, TraceObserver};
//!
//! let mut obs = TraceObserver::new(CsvWriter::new(Path::new("./out"))?);
//! obs.begin_run(0);
//! let report = hunt.run(&mut obs)?;
//! obs.write_run(&RunRow::new(0, "agent3", hunt.config(), &report));
//! obs.finish();
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{ActionKind, ActionRow, RunRow};
pub use writer::OutputWriter;
