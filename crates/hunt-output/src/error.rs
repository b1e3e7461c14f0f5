//! Error types for hunt-output.

use thiserror::Error;

/// A failed trace write.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("writing trace: {0}")]
    Io(#[from] std::io::Error),

    #[error("encoding CSV row: {0}")]
    Csv(#[from] csv::Error),
}

pub type OutputResult<T> = Result<T, OutputError>;
