//! Flat cell list to row-major table reconstruction.

use crate::analysis::{RawCell, RawTable};
use crate::error::{Error, Result};
use crate::model::{ReconstructedTable, TableRow};

use super::{normalize_text, BuildOptions, ErrorMode, HeaderPolicy};

/// Rebuilds tables from the analysis service's flat cell lists.
///
/// Column names come from the column header cells in the band of rows at
/// the top of the table; stub heads name the columns they cover when the
/// table has column headers at all. Every other cell below that band
/// becomes a value in a row mapping keyed by its column's name. Rows are
/// ordered by row index, keys by column index.
#[derive(Debug, Clone)]
pub struct TableReconstructor<'o> {
    options: &'o BuildOptions,
}

impl<'o> TableReconstructor<'o> {
    /// Create a reconstructor with the given options.
    pub fn new(options: &'o BuildOptions) -> Self {
        Self { options }
    }

    /// Reconstruct one table. `path` names the table in errors and logs.
    pub fn reconstruct(&self, path: &str, table: &RawTable) -> Result<ReconstructedTable> {
        let cells = self.cells_in_bounds(path, table)?;
        let headed = cells.iter().any(|c| c.is_column_header());

        if !headed && self.options.header_policy == HeaderPolicy::Strict {
            self.fail_or_warn(path, "table has no column header cells".to_string())?;
        }

        let top = cells.iter().map(|c| c.row_index).min().unwrap_or(0);
        let (headers, data): (Vec<&RawCell>, Vec<&RawCell>) =
            cells.into_iter().partition(|c| headed && c.is_header());
        let (headers, header_end) = self.header_band(path, table.row_count, top, headers)?;
        let names = self.column_names(table.column_count, &headers);

        let mut data: Vec<&RawCell> = data
            .into_iter()
            .filter(|c| {
                let below = c.row_index >= header_end;
                if !below {
                    log::debug!(
                        "{}: cell ({}, {}) sits in the header rows; skipped",
                        path,
                        c.row_index,
                        c.column_index
                    );
                }
                below
            })
            .collect();
        data.sort_by_key(|c| (c.row_index, c.column_index));

        let mut result = ReconstructedTable::new();
        let mut current: Option<(usize, TableRow)> = None;
        for cell in data {
            let key = match names.get(cell.column_index).cloned().flatten() {
                Some(name) if name.is_empty() => positional_key(cell.column_index),
                Some(name) => name,
                None if !headed => positional_key(cell.column_index),
                None => {
                    self.fail_or_warn(
                        path,
                        format!("column {} has no header name", cell.column_index),
                    )?;
                    positional_key(cell.column_index)
                }
            };

            let same_row = matches!(current, Some((r, _)) if r == cell.row_index);
            if !same_row {
                if let Some((_, row)) = current.take() {
                    result.add_row(row);
                }
                current = Some((cell.row_index, TableRow::new()));
            }
            if let Some((_, ref mut row)) = current {
                row.insert(key, self.text(&cell.content));
            }
        }
        if let Some((_, row)) = current {
            result.add_row(row);
        }

        log::debug!(
            "Reconstructed {}: {} columns, {} rows",
            path,
            names.iter().flatten().count(),
            result.row_count()
        );
        Ok(result)
    }

    /// Cells whose indices fit the declared dimensions. Spans reaching past
    /// the grid are reported; the cell is kept and its span clipped later.
    fn cells_in_bounds<'t>(&self, path: &str, table: &'t RawTable) -> Result<Vec<&'t RawCell>> {
        let mut cells = Vec::with_capacity(table.cells.len());
        for cell in &table.cells {
            if cell.row_index >= table.row_count || cell.column_index >= table.column_count {
                self.fail_or_warn(
                    path,
                    format!(
                        "cell ({}, {}) lies outside the declared {}x{} grid",
                        cell.row_index, cell.column_index, table.row_count, table.column_count
                    ),
                )?;
                continue;
            }
            let rows_fit = cell
                .row_index
                .checked_add(cell.row_span)
                .is_some_and(|end| end <= table.row_count);
            let columns_fit = cell
                .column_index
                .checked_add(cell.column_span)
                .is_some_and(|end| end <= table.column_count);
            if !rows_fit || !columns_fit {
                self.fail_or_warn(
                    path,
                    format!(
                        "cell ({}, {}) spans {}x{} past the declared {}x{} grid",
                        cell.row_index,
                        cell.column_index,
                        cell.row_span,
                        cell.column_span,
                        table.row_count,
                        table.column_count
                    ),
                )?;
            }
            cells.push(cell);
        }
        Ok(cells)
    }

    /// Header cells in the contiguous band of rows starting at `top`, and
    /// the first row past that band. A header cell below a data row is
    /// inconsistent and reported.
    fn header_band<'t>(
        &self,
        path: &str,
        row_count: usize,
        top: usize,
        mut headers: Vec<&'t RawCell>,
    ) -> Result<(Vec<&'t RawCell>, usize)> {
        headers.sort_by_key(|c| (c.row_index, c.column_index));

        let mut end = top;
        let mut band = Vec::with_capacity(headers.len());
        for cell in headers {
            if cell.row_index > end {
                self.fail_or_warn(
                    path,
                    format!(
                        "header cell ({}, {}) lies below data rows",
                        cell.row_index, cell.column_index
                    ),
                )?;
                continue;
            }
            end = end.max(span_end(cell.row_index, cell.row_span, row_count));
            band.push(cell);
        }
        Ok((band, end))
    }

    /// Header name per column index. Stacked header rows are joined with a
    /// space; a spanning header names every column it covers. An empty
    /// stub head leaves an empty name, which maps to a positional key.
    fn column_names(&self, column_count: usize, headers: &[&RawCell]) -> Vec<Option<String>> {
        let mut names: Vec<Option<String>> = vec![None; column_count];
        for cell in headers {
            let text = self.text(&cell.content);
            let end = span_end(cell.column_index, cell.column_span, column_count);
            for slot in &mut names[cell.column_index..end] {
                *slot = Some(match slot.take() {
                    Some(above) if !text.is_empty() => format!("{} {}", above, text),
                    Some(above) => above,
                    None => text.clone(),
                });
            }
        }
        names
    }

    fn fail_or_warn(&self, path: &str, reason: String) -> Result<()> {
        match self.options.error_mode {
            ErrorMode::Strict => Err(Error::malformed_table(path, reason)),
            ErrorMode::Lenient => {
                log::warn!("Repairing {}: {}", path, reason);
                Ok(())
            }
        }
    }

    fn text(&self, content: &str) -> String {
        if self.options.normalize_text {
            normalize_text(content)
        } else {
            content.to_string()
        }
    }
}

/// End of a span clipped to the grid. Zero spans count as one.
fn span_end(start: usize, span: usize, limit: usize) -> usize {
    start.saturating_add(span.max(1)).min(limit)
}

fn positional_key(column: usize) -> String {
    format!("col{}", column)
}
