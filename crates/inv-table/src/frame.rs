//! In-memory tabular data model.
//!
//! A [`Frame`] is an immutable table: named columns over row-major string
//! cells. Nothing is typed at construction; numeric interpretation happens
//! at the operation that needs it, and a missing column surfaces as a typed
//! [`Error::MissingColumn`] at that point rather than at parse time.

use inv_core::{Error, Result};
use serde::Serialize;

/// An immutable table of string cells with named columns.
///
/// Every row is guaranteed to have exactly `columns.len()` cells.
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// A numeric column extracted from a frame.
///
/// `None` marks a null cell (empty text in the source table).
#[derive(Debug, Clone)]
pub struct NumericColumn {
    /// Column name.
    pub name: String,
    /// One entry per table row; `None` for null cells.
    pub values: Vec<Option<f64>>,
}

impl NumericColumn {
    /// The non-null values, in row order.
    pub fn present(&self) -> Vec<f64> {
        self.values.iter().filter_map(|v| *v).collect()
    }
}

/// A cell is null when its trimmed text is empty.
fn is_null(cell: &str) -> bool {
    cell.trim().is_empty()
}

fn parse_numeric(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

impl Frame {
    /// Build a frame, checking that every row matches the header width.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let width = columns.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(Error::Parse(format!(
                    "row {} has {} fields, expected {}",
                    i + 1,
                    row.len(),
                    width
                )));
            }
        }
        Ok(Self { columns, rows })
    }

    /// Column names, in declared order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows, row-major.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// A new frame holding the first `n` rows (all rows if `n` exceeds the
    /// table length). Used for data previews.
    pub fn head(&self, n: usize) -> Frame {
        Frame {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// Index of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Index of a column that must exist.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name).ok_or_else(|| Error::MissingColumn(name.to_string()))
    }

    /// The string cells of one column, in row order.
    pub fn column(&self, idx: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().map(move |r| r[idx].as_str())
    }

    /// A new frame holding only the rows where `predicate` accepts the cell
    /// at `idx`. The column set is unchanged.
    pub fn filter_rows<F>(&self, idx: usize, predicate: F) -> Frame
    where
        F: Fn(&str) -> bool,
    {
        Frame {
            columns: self.columns.clone(),
            rows: self.rows.iter().filter(|r| predicate(r[idx].as_str())).cloned().collect(),
        }
    }

    /// Read a named column as numeric values.
    ///
    /// Null cells become `None`; a non-null cell that does not parse as a
    /// finite number is a [`Error::Parse`] naming the column and row.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<Option<f64>>> {
        let idx = self.require_column(name)?;
        let mut out = Vec::with_capacity(self.rows.len());
        for (row_idx, row) in self.rows.iter().enumerate() {
            let cell = row[idx].as_str();
            if is_null(cell) {
                out.push(None);
            } else {
                match parse_numeric(cell) {
                    Some(v) => out.push(Some(v)),
                    None => {
                        return Err(Error::Parse(format!(
                            "column `{}` row {} is not numeric: {:?}",
                            name,
                            row_idx + 1,
                            cell
                        )));
                    }
                }
            }
        }
        Ok(out)
    }

    /// Extract every numeric column, in declared order.
    ///
    /// A column qualifies when it has at least one non-null cell and every
    /// non-null cell parses as a finite number. This mirrors dataframe
    /// numeric-dtype selection: string columns drop out, fully-null columns
    /// drop out.
    pub fn numeric_columns(&self) -> Vec<NumericColumn> {
        let mut out = Vec::new();
        'cols: for (idx, name) in self.columns.iter().enumerate() {
            let mut values = Vec::with_capacity(self.rows.len());
            let mut non_null = 0usize;
            for row in &self.rows {
                let cell = row[idx].as_str();
                if is_null(cell) {
                    values.push(None);
                } else {
                    match parse_numeric(cell) {
                        Some(v) => {
                            non_null += 1;
                            values.push(Some(v));
                        }
                        None => continue 'cols,
                    }
                }
            }
            if non_null > 0 {
                out.push(NumericColumn { name: name.clone(), values });
            }
        }
        out
    }
}
