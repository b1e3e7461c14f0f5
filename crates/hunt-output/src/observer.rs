//! `TraceObserver<W>` — bridges `HuntObserver` to an `OutputWriter`.

use hunt_core::{Cell, SearchOutcome};
use hunt_sim::{HuntObserver, RunReport};

use crate::row::{ActionKind, ActionRow, RunRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`HuntObserver`] that records every search and counted move to any
/// [`OutputWriter`].
///
/// Action rows are buffered per run and written in one batch when the target
/// is found (or on [`flush`][Self::flush]).  Errors from the writer are
/// stored because observer hooks have no return value; check them with
/// [`take_error`][Self::take_error] after the run.
pub struct TraceObserver<W: OutputWriter> {
    writer:     W,
    run:        u64,
    pending:    Vec<ActionRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, run: 0, pending: Vec::new(), last_error: None }
    }

    /// Label subsequent action rows with run number `run`.  Writes out any
    /// rows still buffered from the previous run.
    pub fn begin_run(&mut self, run: u64) {
        self.flush();
        self.run = run;
    }

    /// Write a completed-run summary row.
    pub fn write_run(&mut self, row: &RunRow) {
        let result = self.writer.write_run(row);
        self.store_err(result);
    }

    /// Write buffered action rows now (e.g. after a budget ran out).
    pub fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let rows = std::mem::take(&mut self.pending);
        let result = self.writer.write_actions(&rows);
        self.store_err(result);
    }

    /// Flush buffered rows and close the writer.
    pub fn finish(&mut self) {
        self.flush();
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// The first write error since the last call, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn push(&mut self, action: u64, kind: ActionKind, cell: Cell, outcome: Option<SearchOutcome>) {
        self.pending.push(ActionRow { run: self.run, action, kind, cell, outcome });
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            self.last_error.get_or_insert(e);
        }
    }
}

impl<W: OutputWriter> HuntObserver for TraceObserver<W> {
    fn on_search(&mut self, action: u64, cell: Cell, outcome: SearchOutcome) {
        self.push(action, ActionKind::Search, cell, Some(outcome));
    }

    fn on_move(&mut self, action: u64, _from: Cell, to: Cell) {
        self.push(action, ActionKind::Move, to, None);
    }

    fn on_found(&mut self, _report: &RunReport) {
        self.flush();
    }
}
