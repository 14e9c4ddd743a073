//! Shared error types for dataset I/O.

use std::io;
use std::path::PathBuf;

use crate::data::DatasetError;

/// Errors that can occur when loading a dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("file has no header line")]
    MissingHeader,

    #[error("file must contain a header and at least one data row")]
    NoRows,

    #[error("line {line}: expected {expected} field(s), found {got}")]
    RaggedLine {
        /// One-based line number in the source file.
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("line {line}: unterminated quoted field")]
    UnterminatedQuote { line: usize },

    #[error("invalid dataset: {0}")]
    Dataset(#[from] DatasetError),
}
