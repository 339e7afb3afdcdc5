//! Turn located elements into [`Table`]s and embedded scripts into JSON.

use kurs_types::{KursError, Table};
use scraper::{ElementRef, Html};
use serde_json::Value;

use crate::locate::{children_named, find_all_in, find_first, find_in, text_of};

/// Table with a `<thead>` header and `<tbody>` rows.
///
/// Header cells are the `th` of the first `thead`; each `tr` of the first
/// `tbody` contributes its `td` cells.
///
/// # Errors
/// `ShapeMismatch` when `thead`/`tbody` is missing or a row is ragged.
pub fn thead_table(table: ElementRef<'_>) -> Result<Table, KursError> {
    let thead = find_in(table, "thead", &[]).ok_or_else(|| KursError::shape("table has no thead"))?;
    let tbody = find_in(table, "tbody", &[]).ok_or_else(|| KursError::shape("table has no tbody"))?;

    let mut out = Table::new(cell_texts(thead, "th"));
    for tr in find_all_in(tbody, "tr", &[]) {
        out.push_row(cell_texts(tr, "td"))?;
    }
    Ok(out)
}

/// Table whose header is every `th` and whose rows are the `tr` after the
/// first, read from their `td` cells.
///
/// # Errors
/// `ShapeMismatch` when a row is ragged.
pub fn header_row_table(table: ElementRef<'_>) -> Result<Table, KursError> {
    let mut out = Table::new(cell_texts(table, "th"));
    for tr in find_all_in(table, "tr", &[]).into_iter().skip(1) {
        out.push_row(cell_texts(tr, "td"))?;
    }
    Ok(out)
}

/// Like [`header_row_table`] but drops rows whose `td` count differs from the
/// header width (spacer and banner rows).
///
/// # Errors
/// Propagates row-width failures from [`Table::from_rows`].
pub fn uniform_rows_table(table: ElementRef<'_>) -> Result<Table, KursError> {
    let header = cell_texts(table, "th");
    let width = header.len();
    let rows = find_all_in(table, "tr", &[])
        .into_iter()
        .skip(1)
        .map(|tr| cell_texts(tr, "td"))
        .filter(|cells| cells.len() == width)
        .collect();
    Table::from_rows(header, rows)
}

/// Two-column key/value table from the `td` pairs of every `tr` in `scope`.
///
/// Rows with fewer than two cells are skipped.
///
/// # Errors
/// Propagates row-width failures from [`Table::push_row`].
pub fn key_value_rows(
    scope: ElementRef<'_>,
    key: &str,
    value: &str,
) -> Result<Table, KursError> {
    let mut out = Table::new(vec![key.to_string(), value.to_string()]);
    for tr in find_all_in(scope, "tr", &[]) {
        let cells = cell_texts(tr, "td");
        if let [k, v, ..] = cells.as_slice() {
            out.push_row(vec![k.clone(), v.clone()])?;
        }
    }
    Ok(out)
}

/// Text of every descendant of `scope` named `tag`, whitespace-normalized.
#[must_use]
pub fn cell_texts(scope: ElementRef<'_>, tag: &str) -> Vec<String> {
    find_all_in(scope, tag, &[]).into_iter().map(text_of).collect()
}

/// Text of the direct children of `scope` named `tag`.
#[must_use]
pub fn child_texts(scope: ElementRef<'_>, tag: &str) -> Vec<String> {
    children_named(scope, tag).into_iter().map(text_of).collect()
}

/// Right-hand side of `name = ...;` from the first `<script>` in `scope`
/// that mentions `name`.
#[must_use]
pub fn script_assignment(scope: ElementRef<'_>, name: &str) -> Option<String> {
    find_all_in(scope, "script", &[])
        .into_iter()
        .map(|s| s.text().collect::<String>())
        .find(|text| text.contains(name))
        .and_then(|text| {
            text.lines().find_map(|line| {
                let at = line.find(name)?;
                let (_, rhs) = line[at + name.len()..].split_once('=')?;
                Some(rhs.to_string())
            })
        })
        .map(|rhs| rhs.trim().trim_end_matches(';').trim_end().to_string())
}

/// Decode the JSON body of the `<script id="...">` element.
///
/// # Errors
/// `ShapeMismatch` when the script is absent or is not valid JSON.
pub fn script_json_by_id(doc: &Html, id: &str) -> Result<Value, KursError> {
    let script = find_first(doc, "script", &[("id", id)])
        .ok_or_else(|| KursError::shape(format!("script#{id} not found")))?;
    parse_json(&script.text().collect::<String>(), &format!("script#{id}"))
}

/// Decode JSON, reporting failures as `ShapeMismatch` on `what`.
///
/// # Errors
/// `ShapeMismatch` when `text` is not valid JSON.
pub fn parse_json(text: &str, what: &str) -> Result<Value, KursError> {
    serde_json::from_str(text).map_err(|e| KursError::shape(format!("{what} is not valid JSON: {e}")))
}

/// Fail with `NoDataForSymbol` when the table has no rows.
///
/// # Errors
/// `NoDataForSymbol` for an empty table.
pub fn non_empty(table: Table, symbol: &str, what: &str) -> Result<Table, KursError> {
    if table.is_empty() {
        Err(KursError::no_data(symbol, what))
    } else {
        Ok(table)
    }
}

/// Render a JSON scalar as cell text; `null` becomes an empty cell.
#[must_use]
pub fn json_cell(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
