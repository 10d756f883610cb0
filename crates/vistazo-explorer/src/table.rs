//! Tabular input data.
//!
//! Loading and validating files is the host's job; the explorer consumes
//! an already-loaded [`DataTable`] of named columns.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A loaded table: text columns (labels) and numeric columns (everything
/// the axes and indicators read from).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    text_columns: BTreeMap<String, Vec<String>>,
    numeric_columns: BTreeMap<String, Vec<f64>>,
}

impl DataTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text column.
    #[must_use]
    pub fn with_text_column(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.text_columns
            .insert(name.into(), values.into_iter().map(Into::into).collect());
        self
    }

    /// Add a numeric column.
    #[must_use]
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = f64>,
    ) -> Self {
        self.numeric_columns
            .insert(name.into(), values.into_iter().collect());
        self
    }

    /// Get a text column by name.
    #[must_use]
    pub fn text_column(&self, name: &str) -> Option<&[String]> {
        self.text_columns.get(name).map(Vec::as_slice)
    }

    /// Get a numeric column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.numeric_columns.get(name).map(Vec::as_slice)
    }

    /// Check whether a numeric column exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.numeric_columns.contains_key(name)
    }

    /// Number of rows, taken from the longest column.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.text_columns
            .values()
            .map(Vec::len)
            .chain(self.numeric_columns.values().map(Vec::len))
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_has_no_rows() {
        assert_eq!(DataTable::new().row_count(), 0);
    }

    #[test]
    fn test_builder_adds_columns() {
        let table = DataTable::new()
            .with_text_column("Country name", ["Finland", "Denmark"])
            .with_column("Social support", [0.954, 0.934]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.text_column("Country name").unwrap()[0], "Finland");
        assert_eq!(table.column("Social support").unwrap()[1], 0.934);
        assert!(table.has_column("Social support"));
        assert!(!table.has_column("Generosity"));
    }

    #[test]
    fn test_missing_column_is_none() {
        let table = DataTable::new();
        assert!(table.column("anything").is_none());
        assert!(table.text_column("anything").is_none());
    }
}
