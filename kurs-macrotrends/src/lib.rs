//! kurs-macrotrends
//!
//! Annual financial statements and ratios from Macrotrends chart pages.
//!
//! The pages ship their grid data as a JavaScript array assigned to
//! `originalData`. Each record has a `field_name` (an HTML link around the
//! line item name), a `popup_icon` and one key per reporting period. The
//! income statement is served statically; the other pages only fill the grid
//! after scripts run and are read through the renderer source.
#![warn(missing_docs)]

use std::sync::Arc;

use kurs_core::extract::{json_cell, non_empty, parse_json, script_assignment};
use kurs_core::locate::find_by_text;
use kurs_core::{KursError, PageSource, Security, SecurityType, Table, parse_document};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static LINK_TEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r">(.*)<").expect("valid link regex"));

const UNRESOLVED_SLUG: &str = "TBD";

const FIELD_NAME: &str = "field_name";
const POPUP_ICON: &str = "popup_icon";

/// Client for one stock's Macrotrends pages.
#[derive(Clone)]
pub struct Macrotrends {
    security: Security,
    base: String,
    slug: String,
    fetcher: Arc<dyn PageSource>,
    renderer: Arc<dyn PageSource>,
}

impl Macrotrends {
    /// Build a client. `fetcher` serves static pages, `renderer` pages that
    /// need script execution; pass the same source twice when no renderer is
    /// available.
    pub fn new(
        security: Security,
        base: impl Into<String>,
        fetcher: Arc<dyn PageSource>,
        renderer: Arc<dyn PageSource>,
    ) -> Self {
        Self {
            security,
            base: base.into().trim_end_matches('/').to_string(),
            slug: UNRESOLVED_SLUG.to_string(),
            fetcher,
            renderer,
        }
    }

    /// Use the company name as the URL slug (`Apple Inc` becomes
    /// `apple-inc`). Without it the site's `TBD` placeholder is used and the
    /// site redirects to the canonical page.
    #[must_use]
    pub fn with_company_name(mut self, name: &str) -> Self {
        let slug = company_slug(name);
        if !slug.is_empty() {
            self.slug = slug;
        }
        self
    }

    /// Company slug placed between the ticker and the page name.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Security this client reads.
    #[must_use]
    pub const fn security(&self) -> &Security {
        &self.security
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "kurs_macrotrends::statement",
            skip(self, source),
            fields(ticker = %self.security.label()),
            err,
        )
    )]
    async fn statement(
        &self,
        source: &dyn PageSource,
        page: &str,
        anchor: &str,
    ) -> Result<Table, KursError> {
        self.security.require(&[SecurityType::Stock])?;
        let ticker = self.security.ticker()?;
        let url = format!("{}/{ticker}/{}/{page}", self.base, self.slug);
        let body = source.fetch(&url).await?;
        statement_table(&body, anchor, ticker, page)
    }

    /// Income statement, one row per line item and one column per period.
    ///
    /// # Errors
    /// `InvalidConfiguration` for non-stocks, `ShapeMismatch` when the grid
    /// data is missing or malformed, `NoDataForSymbol` when it is empty,
    /// `FetchFailed` when the page cannot be loaded.
    pub async fn income_statement(&self) -> Result<Table, KursError> {
        self.statement(self.fetcher.as_ref(), "income-statement", "Revenue")
            .await
    }

    /// Balance sheet.
    ///
    /// # Errors
    /// See [`Macrotrends::income_statement`].
    pub async fn balance_sheet(&self) -> Result<Table, KursError> {
        self.statement(self.renderer.as_ref(), "balance-sheet", "Cash On Hand")
            .await
    }

    /// Cash flow statement.
    ///
    /// # Errors
    /// See [`Macrotrends::income_statement`].
    pub async fn cash_flow(&self) -> Result<Table, KursError> {
        self.statement(self.renderer.as_ref(), "cash-flow-statement", "Net Income/Loss")
            .await
    }

    /// Key financial ratios.
    ///
    /// # Errors
    /// See [`Macrotrends::income_statement`].
    pub async fn key_financial_ratios(&self) -> Result<Table, KursError> {
        self.statement(self.renderer.as_ref(), "financial-ratios", "Current Ratio")
            .await
    }
}

/// Lowercased, hyphen-separated company name as used in Macrotrends URLs.
#[must_use]
pub fn company_slug(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

fn statement_table(body: &str, anchor: &str, symbol: &str, what: &str) -> Result<Table, KursError> {
    let doc = parse_document(body);
    let container = find_by_text(&doc, "div", anchor, &[], 0)
        .ok_or_else(|| KursError::shape(format!("macrotrends {what} (\"{anchor}\") not found")))?;
    let raw = script_assignment(container, "originalData")
        .ok_or_else(|| KursError::shape(format!("macrotrends {what} has no originalData")))?;
    let data = parse_json(&raw, "macrotrends originalData")?;
    let records = data
        .as_array()
        .ok_or_else(|| KursError::shape("macrotrends originalData is not an array"))?
        .iter()
        .map(|r| {
            r.as_object()
                .ok_or_else(|| KursError::shape("macrotrends record is not an object"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut columns = vec![FIELD_NAME.to_string()];
    for record in &records {
        for key in record.keys() {
            if key != FIELD_NAME && key != POPUP_ICON && !columns.contains(key) {
                columns.push(key.clone());
            }
        }
    }

    let mut table = Table::new(columns.clone());
    for record in records {
        let row = columns
            .iter()
            .map(|col| match (col.as_str(), record.get(col)) {
                (FIELD_NAME, Some(v)) => link_text(v),
                (_, Some(v)) => json_cell(v),
                (_, None) => String::new(),
            })
            .collect();
        table.push_row(row)?;
    }
    non_empty(table, symbol, what)
}

fn link_text(v: &Value) -> String {
    let markup = json_cell(v);
    LINK_TEXT
        .captures(&markup)
        .and_then(|c| c.get(1))
        .map_or_else(|| markup.clone(), |m| m.as_str().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_text_unwraps_anchor_markup() {
        let v = Value::from("<a href='/stocks/charts/AAPL/apple/revenue'>Revenue</a>");
        assert_eq!(link_text(&v), "Revenue");
        assert_eq!(link_text(&Value::from("Plain")), "Plain");
    }

    #[test]
    fn periods_follow_first_appearance_and_missing_keys_are_blank() {
        let body = r#"<html><body><div>Revenue
            <script>
            var originalData = [{"field_name":"<a href='#'>Revenue</a>","popup_icon":"x","2024-09-30":"1.0"},{"field_name":"<a href='#'>Net</a>","2023-09-30":null,"2024-09-30":"2.0"}];
            </script></div></body></html>"#;
        let t = statement_table(body, "Revenue", "T", "income-statement").unwrap();
        assert_eq!(t.columns(), ["field_name", "2024-09-30", "2023-09-30"]);
        assert_eq!(t.rows()[0], ["Revenue", "1.0", ""]);
        assert_eq!(t.rows()[1], ["Net", "2.0", ""]);
    }

    #[test]
    fn broken_json_is_a_shape_mismatch() {
        let body = "<div>Revenue<script>var originalData = [{oops;</script></div>";
        let err = statement_table(body, "Revenue", "T", "income-statement").unwrap_err();
        assert!(matches!(err, KursError::ShapeMismatch { .. }));
    }
}
