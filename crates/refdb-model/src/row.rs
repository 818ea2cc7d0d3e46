//! Loaded row records.

use serde::{Deserialize, Serialize};

/// Line number of the first data row: line 1 is the header.
pub const FIRST_DATA_LINE: usize = 2;

/// Map a 0-based data row index to the 1-based line it occupies in the file.
pub const fn line_for_index(index: usize) -> usize {
    index + FIRST_DATA_LINE
}

/// A single data row: column name to raw string value, in header order.
///
/// Rows are never mutated once loaded; checks that need a normalized view
/// (such as case-insensitive identifiers) derive it on the side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    index: usize,
    values: Vec<(String, String)>,
}

impl Row {
    /// Create a row at the given 0-based data index.
    pub fn new<I, K, V>(index: usize, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            index,
            values: values
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// 0-based position among the data rows.
    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based line in the source file (header included).
    pub fn line(&self) -> usize {
        line_for_index(self.index)
    }

    /// Raw value for a column, `None` when the column is absent.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }
}
