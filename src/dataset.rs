use serde::{Deserialize, Serialize};

/// An in-memory tabular dataset: named columns plus string rows.
///
/// Parsing delimited sources into this shape is the producing
/// collaborator's concern, as is keeping every row as wide as the column
/// list; the composer consumes whatever shape it is handed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new<S: Into<String>>(columns: Vec<S>, rows: Vec<Vec<S>>) -> Dataset {
        Dataset {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows, excluding the header
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
