//! Numeric series prepared from scraped tables for downstream charting.

use kurs_types::{KursError, Table};
use serde::Serialize;

use crate::normalize::{parse_date, parse_iso_date, parse_number};

/// How the date column of a table is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `Dec. 31, 2023` style, normalized with [`parse_date`].
    Human,
    /// Already `YYYY-MM-DD`; validated only.
    Iso,
    /// Leave the label as it is (e.g. `TTM`, `2023`).
    Label,
}

/// One named line of `(date, value)` points in table order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    /// Column the values came from.
    pub name: String,
    /// Points in source row order.
    pub points: Vec<(String, f64)>,
}

impl Series {
    /// Values only, in order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|(_, v)| *v).collect()
    }

    /// Date labels only, in order.
    #[must_use]
    pub fn dates(&self) -> Vec<&str> {
        self.points.iter().map(|(d, _)| d.as_str()).collect()
    }
}

/// Build one series per value column, normalizing the date column with
/// `style` and every value with [`parse_number`].
///
/// `value_of` maps a raw cell to the text that should be parsed, so a cell
/// like `0.24 (4.35%)` can be narrowed to its leading amount.
///
/// # Errors
/// `MissingField` when a named column is absent; `NormalizationFailed` for the
/// first cell that does not parse.
pub fn numeric_series_with(
    table: &Table,
    date_column: &str,
    style: DateStyle,
    value_columns: &[&str],
    value_of: impl Fn(&str) -> &str,
) -> Result<Vec<Series>, KursError> {
    let date_idx = table.require_column(date_column)?;
    let value_idx = value_columns
        .iter()
        .map(|c| table.require_column(c))
        .collect::<Result<Vec<_>, _>>()?;

    let dates = table
        .rows()
        .iter()
        .map(|row| {
            let raw = row[date_idx].as_str();
            match style {
                DateStyle::Human => parse_date(raw),
                DateStyle::Iso => parse_iso_date(raw),
                DateStyle::Label => Ok(raw.trim().to_string()),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    value_columns
        .iter()
        .zip(value_idx)
        .map(|(name, idx)| {
            let points = table
                .rows()
                .iter()
                .zip(&dates)
                .map(|(row, date)| Ok((date.clone(), parse_number(value_of(row[idx].as_str()))?)))
                .collect::<Result<Vec<_>, KursError>>()?;
            Ok(Series {
                name: (*name).to_string(),
                points,
            })
        })
        .collect()
}

/// [`numeric_series_with`] parsing each cell as a whole.
///
/// # Errors
/// See [`numeric_series_with`].
pub fn numeric_series(
    table: &Table,
    date_column: &str,
    style: DateStyle,
    value_columns: &[&str],
) -> Result<Vec<Series>, KursError> {
    numeric_series_with(table, date_column, style, value_columns, |c| c)
}

/// Leading whitespace-separated token of a cell, e.g. the amount in
/// `0.24 (4.35%)`.
#[must_use]
pub fn first_token(cell: &str) -> &str {
    cell.split_whitespace().next().unwrap_or("")
}
