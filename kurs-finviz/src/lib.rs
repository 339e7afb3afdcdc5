//! kurs-finviz
//!
//! Insider trades and the price reaction to past earnings reports from the
//! Finviz quote page.
#![warn(missing_docs)]

use std::sync::Arc;

use kurs_core::extract::{non_empty, script_json_by_id, uniform_rows_table};
use kurs_core::locate::find_by_text;
use kurs_core::{KursError, PageSource, Security, Table, parse_document};
use serde_json::Value;
use url::Url;

/// Client for one security's Finviz quote pages.
#[derive(Clone)]
pub struct Finviz {
    security: Security,
    base: String,
    source: Arc<dyn PageSource>,
}

impl Finviz {
    /// Build a client for the quote page at `base` (the ticker goes in the
    /// `t` query parameter).
    pub fn new(security: Security, base: impl Into<String>, source: Arc<dyn PageSource>) -> Self {
        Self {
            security,
            base: base.into(),
            source,
        }
    }

    /// Security this client reads.
    #[must_use]
    pub const fn security(&self) -> &Security {
        &self.security
    }

    fn quote_url(&self, extra: &[(&str, &str)]) -> Result<Url, KursError> {
        let ticker = self.security.ticker()?;
        let params = std::iter::once(("t", ticker)).chain(extra.iter().copied());
        Url::parse_with_params(&self.base, params)
            .map_err(|e| KursError::invalid_config(format!("finviz base url {:?}: {e}", self.base)))
    }

    /// Recent insider transactions.
    ///
    /// Rows whose cell count differs from the header (spacers, banners) are
    /// skipped.
    ///
    /// # Errors
    /// `ShapeMismatch` when the insider table is missing, `NoDataForSymbol`
    /// when it has no transactions, `FetchFailed` when the page cannot be
    /// loaded.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "kurs_finviz::insider_trading",
            skip(self),
            fields(ticker = %self.security.label()),
            err,
        )
    )]
    pub async fn insider_trading(&self) -> Result<Table, KursError> {
        let url = self.quote_url(&[])?;
        let body = self.source.fetch(url.as_str()).await?;
        let doc = parse_document(&body);
        let table = find_by_text(&doc, "table", "Insider Trading", &[("class", "body-table")], 0)
            .ok_or_else(|| KursError::shape("finviz insider trading table not found"))?;
        non_empty(uniform_rows_table(table)?, self.security.label(), "insider trading")
    }

    /// Price reaction around each past earnings report, as published in the
    /// page's `route-init-data` JSON.
    ///
    /// # Errors
    /// `ShapeMismatch` when the script is missing or not JSON, `FetchFailed`
    /// when the page cannot be loaded.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "kurs_finviz::price_reaction_to_earnings",
            skip(self),
            fields(ticker = %self.security.label()),
            err,
        )
    )]
    pub async fn price_reaction_to_earnings(&self) -> Result<Value, KursError> {
        let url = self.quote_url(&[("ty", "ea"), ("p", "d")])?;
        let body = self.source.fetch(url.as_str()).await?;
        let doc = parse_document(&body);
        script_json_by_id(&doc, "route-init-data")
    }
}
