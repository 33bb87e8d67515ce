use std::io;
use thiserror::Error;

/// Errors produced while reading a trace file.
///
/// Line-level format mismatches are never errors: non-matching lines are
/// simply filtered out of the output.
#[derive(Debug, Error)]
pub enum AscParseError {
    #[error("Failed to open '{path}'. \nError: {source}")]
    OpenFile {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed while reading '{path}'. \nError: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Errors produced while saving a [`DiagLog`](crate::DiagLog) as `.csv`.
#[derive(Debug, Error)]
pub enum CsvSaveError {
    #[error("Failed to create '{path}'. \nError: {source}")]
    CreateFile {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("Failed while writing '{path}'. \nError: {source}")]
    Write {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("Failed to flush '{path}'. \nError: {source}")]
    Flush {
        path: String,
        #[source]
        source: io::Error,
    },
}
