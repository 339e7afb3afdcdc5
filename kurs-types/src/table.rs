//! Tabular results.

use serde::{Deserialize, Serialize};

use crate::KursError;

/// Ordered columns and rows of text cells, as extracted from a page.
///
/// Row order mirrors the order in the source document. Every row has exactly
/// one cell per column; [`Table::push_row`] rejects anything else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

#[derive(Deserialize)]
struct RawTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TryFrom<RawTable> for Table {
    type Error = KursError;

    fn try_from(raw: RawTable) -> Result<Self, Self::Error> {
        Self::from_rows(raw.columns, raw.rows)
    }
}

impl Table {
    /// Create an empty table with the given header.
    #[must_use]
    pub const fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Create a table from a header and rows.
    ///
    /// # Errors
    /// Returns `ShapeMismatch` if any row width differs from the header width.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, KursError> {
        let mut table = Self::new(columns);
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Append a row.
    ///
    /// # Errors
    /// Returns `ShapeMismatch` if the row width differs from the header width.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<(), KursError> {
        if row.len() != self.columns.len() {
            return Err(KursError::shape(format!(
                "row has {} cells but the header has {} columns",
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Column names in order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in source order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// `(rows, columns)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    /// True when the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when a column with this exact name exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Position of a column by exact name.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Position of a column, or `MissingField` listing the available columns.
    ///
    /// # Errors
    /// Returns `MissingField` when the column is absent.
    pub fn require_column(&self, name: &str) -> Result<usize, KursError> {
        self.column_index(name)
            .ok_or_else(|| KursError::missing_field(name, &self.columns))
    }

    /// All cells of a column, top to bottom.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|r| r[idx].as_str()).collect())
    }

    /// Single cell by row position and column name.
    #[must_use]
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|r| r[idx].as_str())
    }

    /// Keep only the named columns, in the given order.
    ///
    /// # Errors
    /// Returns `MissingField` for the first name that is not a column.
    pub fn select(&self, names: &[&str]) -> Result<Self, KursError> {
        let idx = names
            .iter()
            .map(|n| self.require_column(n))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            columns: names.iter().map(|n| (*n).to_string()).collect(),
            rows: self
                .rows
                .iter()
                .map(|r| idx.iter().map(|&i| r[i].clone()).collect())
                .collect(),
        })
    }

    /// Drop every row that has an empty cell.
    #[must_use]
    pub fn drop_incomplete_rows(mut self) -> Self {
        self.rows
            .retain(|r| r.iter().all(|c| !c.trim().is_empty()));
        self
    }

    /// Pivot around the first column.
    ///
    /// The first column's values become the new header (after the original
    /// first header cell) and every other column becomes a row led by its
    /// former name. A table with a `Breakdown` column of line items and one
    /// column per period turns into one row per period.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let Some((key, rest)) = self.columns.split_first() else {
            return Self::default();
        };
        let mut columns = Vec::with_capacity(self.rows.len() + 1);
        columns.push(key.clone());
        columns.extend(self.rows.iter().map(|r| r[0].clone()));

        let rows = rest
            .iter()
            .enumerate()
            .map(|(offset, name)| {
                let mut row = Vec::with_capacity(columns.len());
                row.push(name.clone());
                row.extend(self.rows.iter().map(|r| r[offset + 1].clone()));
                row
            })
            .collect();
        Self { columns, rows }
    }
}
