//! Flat table records.

use serde::{Deserialize, Serialize};

use super::BoundingRegion;

/// Kind of a table cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CellKind {
    /// Ordinary data cell
    #[default]
    Content,
    /// Column header
    ColumnHeader,
    /// Row header
    RowHeader,
    /// Top-left corner cell above the row headers
    StubHead,
    /// Table description or caption-like cell
    Description,
}

/// One cell of a table, addressed by row and column index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCell {
    /// Row index (0-based)
    pub row_index: usize,

    /// Column index (0-based)
    pub column_index: usize,

    /// Text content
    #[serde(default)]
    pub content: String,

    /// Cell kind
    #[serde(default)]
    pub kind: CellKind,

    /// Number of rows spanned
    #[serde(default = "one")]
    pub row_span: usize,

    /// Number of columns spanned
    #[serde(default = "one")]
    pub column_span: usize,
}

fn one() -> usize {
    1
}

impl RawCell {
    /// Create a data cell.
    pub fn new(row_index: usize, column_index: usize, content: impl Into<String>) -> Self {
        Self {
            row_index,
            column_index,
            content: content.into(),
            kind: CellKind::Content,
            row_span: 1,
            column_span: 1,
        }
    }

    /// Create a column header cell.
    pub fn header(row_index: usize, column_index: usize, content: impl Into<String>) -> Self {
        Self::new(row_index, column_index, content).with_kind(CellKind::ColumnHeader)
    }

    /// Set the cell kind.
    pub fn with_kind(mut self, kind: CellKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the column span.
    pub fn with_column_span(mut self, span: usize) -> Self {
        self.column_span = span.max(1);
        self
    }

    /// Set the row span.
    pub fn with_row_span(mut self, span: usize) -> Self {
        self.row_span = span.max(1);
        self
    }

    /// Check if this cell is a column header.
    pub fn is_column_header(&self) -> bool {
        self.kind == CellKind::ColumnHeader
    }

    /// Check if this cell can name columns (column header or stub head).
    pub fn is_header(&self) -> bool {
        matches!(self.kind, CellKind::ColumnHeader | CellKind::StubHead)
    }
}

/// A table from the flat table collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTable {
    /// Declared number of rows
    pub row_count: usize,

    /// Declared number of columns
    pub column_count: usize,

    /// Cells in no particular order
    pub cells: Vec<RawCell>,

    /// Regions covered by the table
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bounding_regions: Vec<BoundingRegion>,
}

impl RawTable {
    /// Create an empty table with declared dimensions.
    pub fn new(row_count: usize, column_count: usize) -> Self {
        Self {
            row_count,
            column_count,
            cells: Vec::new(),
            bounding_regions: Vec::new(),
        }
    }

    /// Add a cell and return self.
    pub fn with_cell(mut self, cell: RawCell) -> Self {
        self.cells.push(cell);
        self
    }

    /// Add a cell.
    pub fn add_cell(&mut self, cell: RawCell) {
        self.cells.push(cell);
    }
}
