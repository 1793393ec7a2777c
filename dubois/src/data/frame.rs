//! A minimal owned dataset.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Dataset;

/// Column names plus rows of JSON cells.
///
/// Cells are stored as-is; a row shorter or longer than the column list is
/// kept verbatim and left for the renderer to deal with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Column names, in order
    pub columns: Vec<String>,
    /// Data rows
    #[serde(default)]
    pub rows: Vec<Vec<Value>>,
}

impl Frame {
    /// Create an empty frame with the given columns.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Builder: append a row.
    pub fn with_row<I>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        self.push_row(cells);
        self
    }

    /// Append a row.
    pub fn push_row<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = Value>,
    {
        self.rows.push(cells.into_iter().collect());
    }

    /// Cell at `row`, in the named column.
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(idx)
    }
}

impl Dataset for Frame {
    fn column_names(&self) -> &[String] {
        &self.columns
    }

    fn num_rows(&self) -> usize {
        self.rows.len()
    }
}
