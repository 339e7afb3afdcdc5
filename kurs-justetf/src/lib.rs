//! kurs-justetf
//!
//! ETF profile data from JustETF, addressed by ISIN.
//!
//! General info, WKN and description come from the static profile page.
//! Basics, holdings and the live quote are only present after scripts run
//! and are read through the renderer source.
#![warn(missing_docs)]

use std::sync::Arc;

use kurs_core::extract::{cell_texts, non_empty};
use kurs_core::locate::{
    find_all_in, find_by_text, find_first, find_in, find_next_after, next_sibling_element, text_of,
};
use kurs_core::{Html, KursError, PageSource, Security, SecurityType, Table, parse_document};
use scraper::ElementRef;
use url::Url;

/// Breakdown offered by the holdings section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Holdings {
    /// Top 10 companies.
    Companies,
    /// Country weights.
    Countries,
    /// Sector weights.
    Sectors,
}

impl Holdings {
    const fn heading(self) -> &'static str {
        match self {
            Self::Companies => "Top 10 Holdings",
            Self::Countries => "Countries",
            Self::Sectors => "Sectors",
        }
    }

    const fn name_column(self) -> &'static str {
        match self {
            Self::Companies => "company name",
            Self::Countries => "country name",
            Self::Sectors => "sector name",
        }
    }
}

/// Client for one ETF's JustETF profile.
#[derive(Clone)]
pub struct JustEtf {
    security: Security,
    base: String,
    fetcher: Arc<dyn PageSource>,
    renderer: Arc<dyn PageSource>,
}

impl std::fmt::Debug for JustEtf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JustEtf")
            .field("security", &self.security)
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl JustEtf {
    /// Build a client for the profile pages under `base`.
    ///
    /// # Errors
    /// `InvalidConfiguration` when the security carries no ISIN.
    pub fn new(
        security: Security,
        base: impl Into<String>,
        fetcher: Arc<dyn PageSource>,
        renderer: Arc<dyn PageSource>,
    ) -> Result<Self, KursError> {
        security.isin()?;
        Ok(Self {
            security,
            base: base.into().trim_end_matches('/').to_string(),
            fetcher,
            renderer,
        })
    }

    /// Security this client reads.
    #[must_use]
    pub const fn security(&self) -> &Security {
        &self.security
    }

    fn profile_url(&self, section: Option<&str>) -> Result<Url, KursError> {
        let isin = self.security.isin()?;
        let page = format!("{}/etf-profile.html", self.base);
        let mut url = Url::parse_with_params(&page, [("isin", isin)])
            .map_err(|e| KursError::invalid_config(format!("justetf base url {:?}: {e}", self.base)))?;
        url.set_fragment(section);
        Ok(url)
    }

    async fn profile(
        &self,
        source: &dyn PageSource,
        section: Option<&str>,
    ) -> Result<String, KursError> {
        self.security.require(&[SecurityType::Etf])?;
        let url = self.profile_url(section)?;
        source.fetch(url.as_str()).await
    }

    /// Headline facts (fund size, TER, replication, ...) as a single row.
    /// Column names are the labels with spaces removed.
    ///
    /// # Errors
    /// `InvalidConfiguration` for non-ETFs, `ShapeMismatch` when the overview
    /// block is missing, `NoDataForSymbol` when it has no labels,
    /// `FetchFailed` when the page cannot be loaded.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "kurs_justetf::general_info",
            skip(self),
            fields(isin = %self.security.label()),
            err,
        )
    )]
    pub async fn general_info(&self) -> Result<Table, KursError> {
        let body = self.profile(self.fetcher.as_ref(), None).await?;
        let doc = parse_document(&body);
        let overview = find_first(&doc, "div", &[("class", "data-overview mt-4 mb-3")])
            .ok_or_else(|| KursError::shape("justetf data overview not found"))?;
        let pairs = find_all_in(overview, "div", &[("class", "vallabel")])
            .into_iter()
            .map(|label| {
                let value = next_sibling_element(label, "div").map(text_of).unwrap_or_default();
                (text_of(label).replace(' ', ""), value)
            })
            .collect();
        non_empty(single_row(pairs)?, self.security.label(), "general info")
    }

    /// German securities identification number.
    ///
    /// # Errors
    /// `ShapeMismatch` when the identifier is missing; see also
    /// [`JustEtf::general_info`].
    pub async fn wkn(&self) -> Result<String, KursError> {
        let body = self.profile(self.fetcher.as_ref(), None).await?;
        text_by_id(&parse_document(&body), "span", "etf-second-id")
    }

    /// Fund description.
    ///
    /// # Errors
    /// See [`JustEtf::wkn`].
    pub async fn description(&self) -> Result<String, KursError> {
        let body = self.profile(self.fetcher.as_ref(), None).await?;
        text_by_id(&parse_document(&body), "div", "etf-description")
    }

    /// Basics table (fund size, domicile, legal structure, ...) as a single row.
    ///
    /// # Errors
    /// See [`JustEtf::general_info`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "kurs_justetf::basics",
            skip(self),
            fields(isin = %self.security.label()),
            err,
        )
    )]
    pub async fn basics(&self) -> Result<Table, KursError> {
        let body = self.profile(self.renderer.as_ref(), Some("basics")).await?;
        let doc = parse_document(&body);
        let table = find_first(&doc, "table", &[("class", "table etf-data-table")])
            .ok_or_else(|| KursError::shape("justetf basics table not found"))?;
        let pairs = find_all_in(table, "tr", &[])
            .into_iter()
            .filter_map(|tr| match cell_texts(tr, "td").as_slice() {
                [k, v, ..] => Some((k.clone(), v.clone())),
                _ => None,
            })
            .collect();
        non_empty(single_row(pairs)?, self.security.label(), "basics")
    }

    /// Top 10 holdings by company.
    ///
    /// # Errors
    /// See [`JustEtf::holdings`].
    pub async fn holdings_companies(&self) -> Result<Table, KursError> {
        self.holdings(Holdings::Companies).await
    }

    /// Holdings by country.
    ///
    /// # Errors
    /// See [`JustEtf::holdings`].
    pub async fn holdings_countries(&self) -> Result<Table, KursError> {
        self.holdings(Holdings::Countries).await
    }

    /// Holdings by sector.
    ///
    /// # Errors
    /// See [`JustEtf::holdings`].
    pub async fn holdings_sectors(&self) -> Result<Table, KursError> {
        self.holdings(Holdings::Sectors).await
    }

    /// Holdings breakdown: the table following the breakdown's heading, with
    /// a name column and `shares in percent`.
    ///
    /// # Errors
    /// `ShapeMismatch` when the heading or its table is missing,
    /// `NoDataForSymbol` when the table is empty; see also
    /// [`JustEtf::general_info`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "kurs_justetf::holdings",
            skip(self),
            fields(isin = %self.security.label()),
            err,
        )
    )]
    pub async fn holdings(&self, breakdown: Holdings) -> Result<Table, KursError> {
        let body = self.profile(self.renderer.as_ref(), Some("holdings")).await?;
        let doc = parse_document(&body);
        let heading = find_by_text(&doc, "h3", breakdown.heading(), &[], 0)
            .ok_or_else(|| {
                KursError::shape(format!("justetf heading {:?} not found", breakdown.heading()))
            })?;
        let table = find_next_after(&doc, heading, "table")
            .ok_or_else(|| KursError::shape(format!("no table after {:?}", breakdown.heading())))?;
        let tbody = find_in(table, "tbody", &[]).unwrap_or(table);

        let mut out = Table::new(vec![
            breakdown.name_column().to_string(),
            "shares in percent".to_string(),
        ]);
        for tr in find_all_in(tbody, "tr", &[]) {
            if let [name, share, ..] = cell_texts(tr, "td").as_slice() {
                out.push_row(vec![name.clone(), share.clone()])?;
            }
        }
        non_empty(out, self.security.label(), breakdown.name_column())
    }

    /// Latest quote: price, currency, date, time, exchange, daily change,
    /// bid/ask and spread.
    ///
    /// # Errors
    /// `ShapeMismatch` when any quote block is missing; see also
    /// [`JustEtf::general_info`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "kurs_justetf::price",
            skip(self),
            fields(isin = %self.security.label()),
            err,
        )
    )]
    pub async fn price(&self) -> Result<Table, KursError> {
        let body = self.profile(self.renderer.as_ref(), None).await?;
        let doc = parse_document(&body);

        let quote = block(&doc, "col-xs-7")?;
        let currency = nth_span(quote, 0)?;
        let price = nth_span(quote, 1)?;
        let stamp = find_in(quote, "div", &[("class", "vallabel")])
            .map(text_of)
            .ok_or_else(|| KursError::shape("justetf quote timestamp not found"))?;
        let [date, time, exchange] = match stamp.split(' ').collect::<Vec<_>>().as_slice() {
            [d, t, e, ..] => [d.to_string(), t.to_string(), e.to_string()],
            _ => return Err(KursError::shape(format!("justetf quote timestamp {stamp:?}"))),
        };

        let change = block(&doc, "col-xs-5")?;
        let bid_ask = block(&doc, "col-xs-12 col-md-6")?;

        Table::from_rows(
            [
                "price",
                "currency",
                "date",
                "time",
                "exchange",
                "daily_change",
                "daily_change_percent",
                "buy|sell",
                "spread",
            ]
            .map(String::from)
            .to_vec(),
            vec![vec![
                price,
                currency,
                date,
                time,
                exchange,
                nth_span(change, 0)?,
                nth_span(change, 1)?,
                nth_span(bid_ask, 1)?,
                nth_span(bid_ask, 3)?,
            ]],
        )
    }
}

fn single_row(pairs: Vec<(String, String)>) -> Result<Table, KursError> {
    if pairs.is_empty() {
        return Ok(Table::default());
    }
    let (columns, values) = pairs.into_iter().unzip();
    Table::from_rows(columns, vec![values])
}

fn text_by_id(doc: &Html, tag: &str, id: &str) -> Result<String, KursError> {
    find_first(doc, tag, &[("id", id)])
        .map(text_of)
        .ok_or_else(|| KursError::shape(format!("{tag}#{id} not found")))
}

fn block<'a>(doc: &'a Html, class: &str) -> Result<ElementRef<'a>, KursError> {
    find_first(doc, "div", &[("class", class)])
        .ok_or_else(|| KursError::shape(format!("justetf div.{class} not found")))
}

fn nth_span(scope: ElementRef<'_>, n: usize) -> Result<String, KursError> {
    cell_texts(scope, "span")
        .into_iter()
        .nth(n)
        .ok_or_else(|| KursError::shape(format!("justetf quote span #{n} not found")))
}
