//! The `OutputWriter` trait implemented by output backends.

use crate::{ActionRow, OutputResult, RunRow};

/// A sink for action traces and run summaries.
///
/// Observer hooks cannot fail, so [`TraceObserver`][crate::TraceObserver]
/// stores the first error and hands it back through `take_error`.
pub trait OutputWriter {
    /// Write a batch of per-action rows.
    fn write_actions(&mut self, rows: &[ActionRow]) -> OutputResult<()>;

    /// Write one completed-run row.
    fn write_run(&mut self, row: &RunRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
