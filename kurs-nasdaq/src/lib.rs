//! kurs-nasdaq
//!
//! Earnings surprise and consensus forecasts from the NASDAQ earnings page.
//! The tables are filled in by scripts, so every call goes through the
//! renderer source.
#![warn(missing_docs)]

use std::sync::Arc;

use kurs_core::extract::{cell_texts, non_empty};
use kurs_core::locate::{find_all_in, find_by_text, find_first, find_in};
use kurs_core::{KursError, PageSource, Security, Table, parse_document};
use scraper::ElementRef;

const SURPRISE: &str = "earnings-surprise";
const FORECAST: &str = "earnings-forecast";

/// Client for one security's NASDAQ earnings page.
#[derive(Clone)]
pub struct Nasdaq {
    security: Security,
    base: String,
    renderer: Arc<dyn PageSource>,
}

impl Nasdaq {
    /// Build a client reading `{base}/{ticker}/earnings` through `renderer`.
    pub fn new(security: Security, base: impl Into<String>, renderer: Arc<dyn PageSource>) -> Self {
        Self {
            security,
            base: base.into().trim_end_matches('/').to_string(),
            renderer,
        }
    }

    /// Security this client reads.
    #[must_use]
    pub const fn security(&self) -> &Security {
        &self.security
    }

    async fn earnings_page(&self) -> Result<String, KursError> {
        let ticker = self.security.ticker()?.to_lowercase();
        let url = format!("{}/{ticker}/earnings", self.base);
        self.renderer.fetch(&url).await
    }

    /// Reported EPS against the consensus forecast for recent quarters.
    ///
    /// # Errors
    /// `ShapeMismatch` when the table or its header is missing,
    /// `NoDataForSymbol` when it has no rows, `FetchFailed` when the page
    /// cannot be loaded.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "kurs_nasdaq::quarterly_earnings_surprise",
            skip(self),
            fields(ticker = %self.security.label()),
            err,
        )
    )]
    pub async fn quarterly_earnings_surprise(&self) -> Result<Table, KursError> {
        let body = self.earnings_page().await?;
        let doc = parse_document(&body);
        let class = format!("{SURPRISE}__table");
        let table = find_first(&doc, "table", &[("class", class.as_str())])
            .ok_or_else(|| KursError::shape(format!("table.{class} not found")))?;
        non_empty(
            prefixed_table(table, SURPRISE)?,
            self.security.label(),
            "quarterly earnings surprise",
        )
    }

    /// Consensus EPS forecast for the coming fiscal years.
    ///
    /// # Errors
    /// See [`Nasdaq::quarterly_earnings_surprise`].
    pub async fn yearly_earnings_forecast(&self) -> Result<Table, KursError> {
        self.forecast(0, "yearly earnings forecast").await
    }

    /// Consensus EPS forecast for the coming fiscal quarters.
    ///
    /// # Errors
    /// See [`Nasdaq::quarterly_earnings_surprise`].
    pub async fn quarterly_earnings_forecast(&self) -> Result<Table, KursError> {
        self.forecast(1, "quarterly earnings forecast").await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "kurs_nasdaq::forecast",
            skip(self),
            fields(ticker = %self.security.label()),
            err,
        )
    )]
    async fn forecast(&self, skip: usize, what: &str) -> Result<Table, KursError> {
        let body = self.earnings_page().await?;
        let doc = parse_document(&body);
        let class = format!("{FORECAST}__table");
        let table = find_by_text(&doc, "table", "EPS* Forecast", &[("class", class.as_str())], skip)
            .ok_or_else(|| KursError::shape(format!("{what}: table.{class} #{skip} not found")))?;
        non_empty(prefixed_table(table, FORECAST)?, self.security.label(), what)
    }
}

/// Header from `tr.{prefix}__header`, rows from `tbody.{prefix}__table-body`
/// with each row's `th` cells ahead of its `td` cells.
fn prefixed_table(table: ElementRef<'_>, prefix: &str) -> Result<Table, KursError> {
    let header_class = format!("{prefix}__header");
    let header = find_in(table, "tr", &[("class", header_class.as_str())])
        .ok_or_else(|| KursError::shape(format!("tr.{header_class} not found")))?;
    let body_class = format!("{prefix}__table-body");
    let tbody = find_in(table, "tbody", &[("class", body_class.as_str())])
        .ok_or_else(|| KursError::shape(format!("tbody.{body_class} not found")))?;

    let mut out = Table::new(cell_texts(header, "th"));
    for tr in find_all_in(tbody, "tr", &[]) {
        let mut row = cell_texts(tr, "th");
        row.extend(cell_texts(tr, "td"));
        out.push_row(row)?;
    }
    Ok(out)
}
