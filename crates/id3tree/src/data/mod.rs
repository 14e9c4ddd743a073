//! Categorical tabular data.
//!
//! - [`Dataset`] / [`Record`]: validated rectangular table of string cells
//! - [`io`]: delimited-text loading with delimiter sniffing

mod dataset;
pub mod io;

pub use dataset::{Dataset, DatasetError, HEADER_LINE_OFFSET, Record};
