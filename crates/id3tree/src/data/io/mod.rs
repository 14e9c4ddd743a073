//! Dataset I/O.
//!
//! Loads categorical tables from delimited text files (CSV, TSV, `;`- or
//! `|`-separated). The delimiter is sniffed from the header line.

mod delimited;
mod error;

pub use delimited::{CANDIDATE_DELIMITERS, detect_delimiter, parse_delimited, read_delimited};
pub use error::DatasetLoadError;
