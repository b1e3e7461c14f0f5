//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `actions.csv`
//! - `runs.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{ActionRow, OutputResult, RunRow};
use crate::writer::OutputWriter;

/// Writes traces and run summaries to two CSV files.
pub struct CsvWriter {
    actions:  Writer<File>,
    runs:     Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the two CSV files in it, and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut actions = Writer::from_path(dir.join("actions.csv"))?;
        actions.write_record(["run", "action", "kind", "row", "col", "outcome"])?;

        let mut runs = Writer::from_path(dir.join("runs.csv"))?;
        runs.write_record(["run", "policy", "dim", "moving", "seed", "actions", "searches", "moves"])?;

        Ok(Self { actions, runs, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_actions(&mut self, rows: &[ActionRow]) -> OutputResult<()> {
        for row in rows {
            self.actions.write_record(&[
                row.run.to_string(),
                row.action.to_string(),
                row.kind.to_string(),
                row.cell.row.to_string(),
                row.cell.col.to_string(),
                row.outcome.map(|o| o.to_string()).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    fn write_run(&mut self, row: &RunRow) -> OutputResult<()> {
        self.runs.write_record(&[
            row.run.to_string(),
            row.policy.clone(),
            row.dim.to_string(),
            (row.moving as u8).to_string(),
            row.seed.to_string(),
            row.actions.to_string(),
            row.searches.to_string(),
            row.moves.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.actions.flush()?;
        self.runs.flush()?;
        Ok(())
    }
}
