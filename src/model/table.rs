//! Reconstructed table types.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A table as an ordered list of rows keyed by column header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReconstructedTable {
    /// Data rows (the header row is carried by the row keys)
    pub rows: Vec<TableRow>,
}

impl ReconstructedTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names in first-seen order across all rows.
    pub fn columns(&self) -> Vec<&str> {
        let mut columns: Vec<&str> = Vec::new();
        for key in self.rows.iter().flat_map(|r| r.keys()) {
            if !columns.contains(&key) {
                columns.push(key);
            }
        }
        columns
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        let columns = self.columns();
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(columns.join("\t"));
        for row in &self.rows {
            let values: Vec<&str> = columns
                .iter()
                .map(|c| row.get(c).unwrap_or_default())
                .collect();
            lines.push(values.join("\t"));
        }
        lines.join("\n")
    }
}

/// One table row: column header to cell text, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    cells: Vec<(String, String)>,
}

impl TableRow {
    /// Create an empty row.
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Create a row from (column, value) pairs.
    pub fn from_pairs<K: Into<String>, V: Into<String>>(
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        let mut row = Self::new();
        for (key, value) in pairs {
            row.insert(key, value);
        }
        row
    }

    /// Set a column's value. An existing column keeps its position.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(k, _)| *k == column) {
            Some(slot) => slot.1 = value,
            None => self.cells.push((column, value)),
        }
    }

    /// Get a column's value.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(k, _)| k == column)
            .map(|(_, v)| v.as_str())
    }

    /// Column names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(k, _)| k.as_str())
    }

    /// (column, value) pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Serialize for TableRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (key, value) in &self.cells {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TableRow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RowVisitor;

        impl<'de> Visitor<'de> for RowVisitor {
            type Value = TableRow;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of column names to cell text")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<TableRow, A::Error> {
                let mut row = TableRow::new();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    row.insert(key, value);
                }
                Ok(row)
            }
        }

        deserializer.deserialize_map(RowVisitor)
    }
}
