//! Validated categorical dataset.
//!
//! A [`Dataset`] is a rectangular table of string cells. The header row names
//! every column; the last column is the outcome (class label), all others are
//! feature attributes.

use std::collections::BTreeSet;

/// Offset from a zero-based row index to its one-based file line
/// (one for the header line, one for one-based numbering).
pub const HEADER_LINE_OFFSET: usize = 2;

/// Errors raised while assembling a [`Dataset`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    #[error("dataset needs at least one attribute column and one outcome column, got {0} column(s)")]
    TooFewColumns(usize),

    #[error("dataset has no rows")]
    Empty,

    #[error("row {row} has {got} cell(s), expected {expected}")]
    RaggedRow {
        /// Zero-based row index (header excluded).
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),
}

/// A single training row: feature values followed by the outcome label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    cells: Vec<String>,
    line: usize,
}

impl Record {
    pub(crate) fn new(cells: Vec<String>, line: usize) -> Self {
        debug_assert!(cells.len() >= 2);
        Self { cells, line }
    }

    /// One-based line of the row in its source text.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Feature values, outcome excluded.
    #[inline]
    pub fn features(&self) -> &[String] {
        &self.cells[..self.cells.len() - 1]
    }

    /// Value of the feature at `index`.
    #[inline]
    pub fn feature(&self, index: usize) -> &str {
        &self.features()[index]
    }

    /// Outcome label (last cell).
    #[inline]
    pub fn outcome(&self) -> &str {
        &self.cells[self.cells.len() - 1]
    }

    /// All cells, outcome included.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

/// Rectangular, non-empty table of categorical rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    headers: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    /// Build a dataset from headers and rows, validating its shape.
    ///
    /// The last header names the outcome column.
    pub fn new<H, R, C>(headers: H, rows: R) -> Result<Self, DatasetError>
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let rows = rows.into_iter().enumerate().map(|(row, cells)| {
            let cells: Vec<String> = cells.into_iter().map(Into::into).collect();
            (row + HEADER_LINE_OFFSET, cells)
        });
        Self::from_numbered_rows(headers.into_iter().map(Into::into).collect(), rows)
    }

    /// Like [`Dataset::new`], with each row tagged by its source line.
    pub(crate) fn from_numbered_rows<I>(headers: Vec<String>, rows: I) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = (usize, Vec<String>)>,
    {
        if headers.len() < 2 {
            return Err(DatasetError::TooFewColumns(headers.len()));
        }

        let mut seen = BTreeSet::new();
        for name in &headers {
            if !seen.insert(name.as_str()) {
                return Err(DatasetError::DuplicateColumn(name.clone()));
            }
        }

        let mut records = Vec::new();
        for (row, (line, cells)) in rows.into_iter().enumerate() {
            if cells.len() != headers.len() {
                return Err(DatasetError::RaggedRow {
                    row,
                    expected: headers.len(),
                    got: cells.len(),
                });
            }
            records.push(Record::new(cells, line));
        }

        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        Ok(Self { headers, records })
    }

    /// All column names, outcome last.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Feature attribute names (outcome excluded).
    pub fn attribute_names(&self) -> &[String] {
        &self.headers[..self.n_attributes()]
    }

    /// Name of the attribute at `index`.
    pub fn attribute_name(&self, index: usize) -> &str {
        &self.headers[index]
    }

    /// Name of the outcome column.
    pub fn outcome_name(&self) -> &str {
        &self.headers[self.headers.len() - 1]
    }

    /// Number of feature attributes.
    #[inline]
    pub fn n_attributes(&self) -> usize {
        self.headers.len() - 1
    }

    #[inline]
    pub fn n_rows(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Index of the attribute called `name`, if any.
    pub fn attribute_index(&self, name: &str) -> Option<usize> {
        self.attribute_names().iter().position(|h| h == name)
    }

    /// Distinct values observed for the attribute at `index`, sorted.
    pub fn observed_values(&self, index: usize) -> Vec<&str> {
        let values: BTreeSet<&str> = self.records.iter().map(|r| r.feature(index)).collect();
        values.into_iter().collect()
    }

    /// Distinct outcome labels, sorted.
    pub fn outcomes(&self) -> Vec<&str> {
        let values: BTreeSet<&str> = self.records.iter().map(Record::outcome).collect();
        values.into_iter().collect()
    }
}
