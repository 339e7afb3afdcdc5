//! kurs-digrin
//!
//! Tables from the Digrin stock detail pages: dividends, payout ratio, price
//! history, splits, financials, dividend growth estimates and upcoming
//! earnings.
//!
//! Every table is found by a label that appears in its header (for example
//! `Ex-dividend date`), then read from its `thead`/`tbody`. The `*_series`
//! helpers turn the same tables into numeric series for charting.
#![warn(missing_docs)]

use std::sync::Arc;

use kurs_core::extract::{non_empty, thead_table};
use kurs_core::locate::find_by_text;
use kurs_core::series::{first_token, numeric_series, numeric_series_with};
use kurs_core::{DateStyle, KursError, PageSource, Security, Series, Table, parse_document};

/// Client for one security's Digrin pages.
#[derive(Clone)]
pub struct Digrin {
    security: Security,
    base: String,
    source: Arc<dyn PageSource>,
}

impl Digrin {
    /// Build a client reading pages under `base` through `source`.
    pub fn new(security: Security, base: impl Into<String>, source: Arc<dyn PageSource>) -> Self {
        Self {
            security,
            base: base.into().trim_end_matches('/').to_string(),
            source,
        }
    }

    /// Security this client reads.
    #[must_use]
    pub const fn security(&self) -> &Security {
        &self.security
    }

    fn url(&self, ticker: &str, page: &str) -> String {
        if page.is_empty() {
            format!("{}/{ticker}", self.base)
        } else {
            format!("{}/{ticker}/{page}", self.base)
        }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "kurs_digrin::table",
            skip(self),
            fields(ticker = %self.security.label()),
            err,
        )
    )]
    async fn table_by_anchor(&self, page: &str, anchor: &str, what: &str) -> Result<Table, KursError> {
        let ticker = self.security.ticker()?;
        let body = self.source.fetch(&self.url(ticker, page)).await?;
        let doc = parse_document(&body);
        let table = find_by_text(&doc, "table", anchor, &[], 0)
            .ok_or_else(|| KursError::shape(format!("digrin {what} table (\"{anchor}\") not found")))?;
        non_empty(thead_table(table)?, ticker, what)
    }

    /// Dividend history: ex-dividend date, payment date, amount and change.
    ///
    /// # Errors
    /// `ShapeMismatch` when the page has no dividend table, `NoDataForSymbol`
    /// when it has no rows, `FetchFailed` when the page cannot be loaded.
    pub async fn dividend(&self) -> Result<Table, KursError> {
        self.table_by_anchor("", "Ex-dividend date", "dividend").await
    }

    /// Payout ratio history.
    ///
    /// # Errors
    /// See [`Digrin::dividend`].
    pub async fn payout_ratio(&self) -> Result<Table, KursError> {
        self.table_by_anchor("payout_ratio", "Payout ratio", "payout ratio")
            .await
    }

    /// Real and dividend-adjusted price history.
    ///
    /// # Errors
    /// See [`Digrin::dividend`].
    pub async fn price(&self) -> Result<Table, KursError> {
        self.table_by_anchor("price", "Adjusted price", "price").await
    }

    /// Stock splits and their ratios.
    ///
    /// # Errors
    /// See [`Digrin::dividend`].
    pub async fn stock_splits(&self) -> Result<Table, KursError> {
        self.table_by_anchor("stock_split", "Split Ratio", "stock split")
            .await
    }

    /// Total assets against total liabilities.
    ///
    /// # Errors
    /// See [`Digrin::dividend`].
    pub async fn assets_vs_liabilities(&self) -> Result<Table, KursError> {
        self.table_by_anchor("financials", "Assets", "assets vs liabilities")
            .await
    }

    /// Free cash flow and stock based compensation.
    ///
    /// # Errors
    /// See [`Digrin::dividend`].
    pub async fn free_cash_flow(&self) -> Result<Table, KursError> {
        self.table_by_anchor("financials", "Free Cash Flow", "free cash flow")
            .await
    }

    /// Net income.
    ///
    /// # Errors
    /// See [`Digrin::dividend`].
    pub async fn net_income(&self) -> Result<Table, KursError> {
        self.table_by_anchor("financials", "Net Income", "net income")
            .await
    }

    /// Cash, debt and capital lease obligations.
    ///
    /// # Errors
    /// See [`Digrin::dividend`].
    pub async fn cash_and_debt(&self) -> Result<Table, KursError> {
        self.table_by_anchor("financials", "Capital Lease", "cash and debt")
            .await
    }

    /// Shares outstanding.
    ///
    /// # Errors
    /// See [`Digrin::dividend`].
    pub async fn shares_outstanding(&self) -> Result<Table, KursError> {
        self.table_by_anchor("financials", "Shares Outstanding", "shares outstanding")
            .await
    }

    /// Capex, R&D, G&A and S&M expenses.
    ///
    /// # Errors
    /// See [`Digrin::dividend`].
    pub async fn expenses(&self) -> Result<Table, KursError> {
        self.table_by_anchor("financials", "Capex", "expenses").await
    }

    /// Cost of revenue against revenue.
    ///
    /// # Errors
    /// See [`Digrin::dividend`].
    pub async fn cost_of_revenue(&self) -> Result<Table, KursError> {
        self.table_by_anchor("financials", "Cost of Revenue", "cost of revenue")
            .await
    }

    /// Estimated yield on cost assuming the 3-year dividend growth rate.
    ///
    /// # Errors
    /// See [`Digrin::dividend`].
    pub async fn dgr3(&self) -> Result<Table, KursError> {
        self.table_by_anchor("dgr3", "Estimated Yield on Cost", "dgr3")
            .await
    }

    /// Estimated yield on cost assuming the 5-year dividend growth rate.
    ///
    /// # Errors
    /// See [`Digrin::dividend`].
    pub async fn dgr5(&self) -> Result<Table, KursError> {
        self.table_by_anchor("dgr5", "Estimated Yield on Cost", "dgr5")
            .await
    }

    /// Estimated yield on cost assuming the 10-year dividend growth rate.
    ///
    /// # Errors
    /// See [`Digrin::dividend`].
    pub async fn dgr10(&self) -> Result<Table, KursError> {
        self.table_by_anchor("dgr10", "Estimated Yield on Cost", "dgr10")
            .await
    }

    /// Upcoming earnings with actual and estimated EPS.
    ///
    /// # Errors
    /// See [`Digrin::dividend`].
    pub async fn upcoming_estimated_earnings(&self) -> Result<Table, KursError> {
        self.table_by_anchor("earnings", "Actual / Estimated EPS", "upcoming earnings")
            .await
    }

    /// Shares outstanding by date.
    ///
    /// # Errors
    /// Fetch and lookup errors of [`Digrin::shares_outstanding`], then
    /// `MissingField` or `NormalizationFailed` from the conversion.
    pub async fn shares_outstanding_series(&self) -> Result<Vec<Series>, KursError> {
        let table = self.shares_outstanding().await?;
        numeric_series(&table, "Date", DateStyle::Human, &["Shares Outstanding"])
    }

    /// Assets and liabilities by date.
    ///
    /// # Errors
    /// See [`Digrin::shares_outstanding_series`].
    pub async fn assets_vs_liabilities_series(&self) -> Result<Vec<Series>, KursError> {
        let table = self.assets_vs_liabilities().await?;
        numeric_series(&table, "Date", DateStyle::Human, &["Assets", "Liabilities"])
    }

    /// Free cash flow and stock based compensation by date.
    ///
    /// # Errors
    /// See [`Digrin::shares_outstanding_series`].
    pub async fn free_cash_flow_series(&self) -> Result<Vec<Series>, KursError> {
        let table = self.free_cash_flow().await?;
        numeric_series(
            &table,
            "Date",
            DateStyle::Human,
            &["Free Cash Flow", "Stock based compensation"],
        )
    }

    /// Net income by date.
    ///
    /// # Errors
    /// See [`Digrin::shares_outstanding_series`].
    pub async fn net_income_series(&self) -> Result<Vec<Series>, KursError> {
        let table = self.net_income().await?;
        numeric_series(&table, "Date", DateStyle::Human, &["Net Income"])
    }

    /// Cash and debt by date.
    ///
    /// # Errors
    /// See [`Digrin::shares_outstanding_series`].
    pub async fn cash_and_debt_series(&self) -> Result<Vec<Series>, KursError> {
        let table = self.cash_and_debt().await?;
        numeric_series(&table, "Date", DateStyle::Human, &["Cash", "Debt"])
    }

    /// Capex, R&D, G&A and S&M by date.
    ///
    /// # Errors
    /// See [`Digrin::shares_outstanding_series`].
    pub async fn expenses_series(&self) -> Result<Vec<Series>, KursError> {
        let table = self.expenses().await?;
        numeric_series(&table, "Date", DateStyle::Human, &["Capex", "R&D", "G&A", "S&M"])
    }

    /// Cost of revenue and revenue by date.
    ///
    /// # Errors
    /// See [`Digrin::shares_outstanding_series`].
    pub async fn cost_of_revenue_series(&self) -> Result<Vec<Series>, KursError> {
        let table = self.cost_of_revenue().await?;
        numeric_series(&table, "Date", DateStyle::Human, &["Cost of Revenue", "Revenue"])
    }

    /// Real and adjusted price by date.
    ///
    /// # Errors
    /// See [`Digrin::shares_outstanding_series`].
    pub async fn price_series(&self) -> Result<Vec<Series>, KursError> {
        let table = self.price().await?;
        numeric_series(&table, "Date", DateStyle::Iso, &["Real price", "Adjusted price"])
    }

    /// Dividend amount by ex-dividend date, without the change in brackets.
    ///
    /// # Errors
    /// See [`Digrin::shares_outstanding_series`].
    pub async fn dividend_series(&self) -> Result<Vec<Series>, KursError> {
        let table = self.dividend().await?;
        numeric_series_with(
            &table,
            "Ex-dividend date",
            DateStyle::Iso,
            &["Dividend amount (change)"],
            first_token,
        )
    }
}
