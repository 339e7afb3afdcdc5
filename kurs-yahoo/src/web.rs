//! Yahoo Finance quote pages: financial grids, options, profile, holders,
//! summary, analysis and key statistics.

use std::sync::Arc;

use kurs_core::extract::{
    cell_texts, child_texts, header_row_table, key_value_rows, non_empty, thead_table,
};
use kurs_core::locate::{
    children_named, find_all_in, find_by_text, find_first, find_in, find_next_after, text_of,
};
use kurs_core::{Html, KursError, PageSource, Security, SecurityType, Table, parse_document};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Selector};

static SUMMARY_CELLS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td[data-test]").expect("valid summary selector"));
static STREAMERS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("fin-streamer[data-field]").expect("valid streamer selector"));
static NAME_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w\s]+").expect("valid name regex"));

const STOCK: &[SecurityType] = &[SecurityType::Stock];
const STOCK_OR_ETF: &[SecurityType] = &[SecurityType::Stock, SecurityType::Etf];

const MUTUAL_FUND_COLUMNS: [&str; 5] = ["holder", "shares", "date_reported", "percentage", "value"];

/// Client for one security's Yahoo Finance quote pages.
#[derive(Clone)]
pub struct YahooWeb {
    security: Security,
    base: String,
    source: Arc<dyn PageSource>,
}

impl YahooWeb {
    /// Build a client for quote pages under `base` (`{base}/{ticker}/...`).
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

    /// Check the security type, then fetch `{base}/{ticker}/{page}` (the
    /// quote summary when `page` is empty).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "kurs_yahoo::web::page",
            skip(self, allowed),
            fields(ticker = %self.security.label()),
            err,
        )
    )]
    async fn page(&self, page: &str, allowed: &[SecurityType]) -> Result<String, KursError> {
        if !allowed.is_empty() {
            self.security.require(allowed)?;
        }
        let ticker = self.security.ticker()?;
        let url = if page.is_empty() {
            format!("{}/{ticker}", self.base)
        } else {
            format!("{}/{ticker}/{page}", self.base)
        };
        self.source.fetch(&url).await
    }

    async fn financials_grid(&self, page: &str) -> Result<Table, KursError> {
        let body = self.page(page, STOCK).await?;
        let table = grid_table(&parse_document(&body))?;
        Ok(non_empty(table, self.security.label(), page)?.transpose())
    }

    /// Cash flow grid, one row per period (`TTM` first) and one column per
    /// line item after `Breakdown`.
    ///
    /// # Errors
    /// `InvalidConfiguration` for non-stocks, `ShapeMismatch` when the grid
    /// is missing, `NoDataForSymbol` when it has no line items, `FetchFailed`
    /// when the page cannot be loaded.
    pub async fn cash_flow(&self) -> Result<Table, KursError> {
        self.financials_grid("cash-flow").await
    }

    /// Balance sheet grid.
    ///
    /// # Errors
    /// See [`YahooWeb::cash_flow`].
    pub async fn balance_sheet(&self) -> Result<Table, KursError> {
        self.financials_grid("balance-sheet").await
    }

    /// Income statement grid.
    ///
    /// # Errors
    /// See [`YahooWeb::cash_flow`].
    pub async fn income_statement(&self) -> Result<Table, KursError> {
        self.financials_grid("financials").await
    }

    async fn options_table(&self, skip: usize, what: &str) -> Result<Table, KursError> {
        let body = self.page("options", STOCK_OR_ETF).await?;
        let doc = parse_document(&body);
        let table = find_by_text(&doc, "table", "Contract Name", &[], skip)
            .ok_or_else(|| KursError::shape(format!("yahoo {what} table not found")))?;
        non_empty(header_row_table(table)?, self.security.label(), what)
    }

    /// Call contracts of the nearest expiry.
    ///
    /// # Errors
    /// `InvalidConfiguration` for unsupported security types; see also
    /// [`YahooWeb::cash_flow`].
    pub async fn calls(&self) -> Result<Table, KursError> {
        self.options_table(0, "calls").await
    }

    /// Put contracts of the nearest expiry.
    ///
    /// # Errors
    /// See [`YahooWeb::calls`].
    pub async fn puts(&self) -> Result<Table, KursError> {
        self.options_table(1, "puts").await
    }

    /// Business description from the profile page.
    ///
    /// # Errors
    /// `ShapeMismatch` when the description is missing, `FetchFailed` when
    /// the page cannot be loaded.
    pub async fn description(&self) -> Result<String, KursError> {
        let body = self.page("profile", &[]).await?;
        let doc = parse_document(&body);
        let section = section(&doc, "description")?;
        find_in(section, "p", &[])
            .map(text_of)
            .ok_or_else(|| KursError::shape("yahoo description paragraph not found"))
    }

    /// Governance score sentence from the profile page.
    ///
    /// # Errors
    /// `InvalidConfiguration` for non-stocks; see also
    /// [`YahooWeb::description`].
    pub async fn corporate_governance(&self) -> Result<String, KursError> {
        let body = self.page("profile", STOCK).await?;
        let doc = parse_document(&body);
        let section = section(&doc, "corporate-governance")?;
        find_in(section, "div", &[])
            .map(text_of)
            .ok_or_else(|| KursError::shape("yahoo corporate governance text not found"))
    }

    /// Key executives with title, pay and year of birth.
    ///
    /// # Errors
    /// See [`YahooWeb::cash_flow`].
    pub async fn key_executives(&self) -> Result<Table, KursError> {
        let body = self.page("profile", STOCK).await?;
        let doc = parse_document(&body);
        let table = thead_table(section(&doc, "key-executives")?)?;
        non_empty(table, self.security.label(), "key executives")
    }

    /// Ownership breakdown as `value, description` pairs.
    ///
    /// # Errors
    /// See [`YahooWeb::cash_flow`].
    pub async fn major_holders(&self) -> Result<Table, KursError> {
        let body = self.page("holders", STOCK).await?;
        let doc = parse_document(&body);
        let scope = section(&doc, "holders-major-holders-table")?;
        let table = key_value_rows(scope, "value", "description")?;
        non_empty(table, self.security.label(), "major holders")
    }

    /// Largest institutional holders.
    ///
    /// # Errors
    /// See [`YahooWeb::cash_flow`].
    pub async fn top_institutional_holders(&self) -> Result<Table, KursError> {
        let body = self.page("holders", STOCK).await?;
        let doc = parse_document(&body);
        let table = thead_table(section(&doc, "holders-top-institutional-holders")?)?;
        non_empty(table, self.security.label(), "top institutional holders")
    }

    /// Largest mutual fund holders, with columns `holder, shares,
    /// date_reported, percentage, value`.
    ///
    /// # Errors
    /// See [`YahooWeb::cash_flow`].
    pub async fn top_mutual_fund_holders(&self) -> Result<Table, KursError> {
        let body = self.page("holders", STOCK).await?;
        let doc = parse_document(&body);
        let scope = section(&doc, "holders-top-mutual-fund-holders")?;
        let mut table = Table::new(MUTUAL_FUND_COLUMNS.map(String::from).to_vec());
        for tr in find_all_in(scope, "tr", &[]) {
            let cells = cell_texts(tr, "td");
            if !cells.is_empty() {
                table.push_row(cells)?;
            }
        }
        non_empty(table, self.security.label(), "top mutual fund holders")
    }

    /// Quote summary as `field, value` rows: the summary table cells (keyed
    /// by their `data-test` name without `-value`) then the live streamer
    /// fields.
    ///
    /// # Errors
    /// See [`YahooWeb::cash_flow`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "kurs_yahoo::web::summary",
            skip(self),
            fields(ticker = %self.security.label()),
            err,
        )
    )]
    pub async fn summary(&self) -> Result<Table, KursError> {
        let body = self.page("", STOCK).await?;
        let doc = parse_document(&body);
        let mut table = Table::new(vec!["field".to_string(), "value".to_string()]);
        for cell in doc.select(&SUMMARY_CELLS) {
            let field = cell.value().attr("data-test").unwrap_or_default();
            let field = field.trim_end_matches("-value").to_string();
            table.push_row(vec![field, text_of(cell)])?;
        }
        for streamer in doc.select(&STREAMERS) {
            let field = streamer.value().attr("data-field").unwrap_or_default();
            table.push_row(vec![field.to_string(), text_of(streamer)])?;
        }
        non_empty(table, self.security.label(), "summary")
    }

    /// Every analysis table body flattened into `Criteria, Value 1..n` rows;
    /// shorter rows are padded with empty cells.
    ///
    /// # Errors
    /// See [`YahooWeb::cash_flow`].
    pub async fn analysis(&self) -> Result<Table, KursError> {
        let body = self.page("analysis", STOCK).await?;
        let doc = parse_document(&body);
        let rows: Vec<Vec<String>> = find_all_in(doc.root_element(), "tbody", &[])
            .into_iter()
            .flat_map(|tbody| find_all_in(tbody, "tr", &[]))
            .map(|tr| cell_texts(tr, "td"))
            .filter(|cells| !cells.is_empty())
            .collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(1);

        let mut columns = vec!["Criteria".to_string()];
        columns.extend((1..width).map(|i| format!("Value {i}")));
        let mut table = Table::new(columns);
        for mut row in rows {
            row.resize(width, String::new());
            table.push_row(row)?;
        }
        non_empty(table, self.security.label(), "analysis")
    }

    /// Valuation measures by period; the unnamed label column is called
    /// `Criteria`.
    ///
    /// # Errors
    /// See [`YahooWeb::cash_flow`].
    pub async fn valuation_measures(&self) -> Result<Table, KursError> {
        let body = self.page("key-statistics", STOCK).await?;
        let doc = parse_document(&body);
        let heading = find_by_text(&doc, "h3", "Valuation Measures", &[], 0)
            .ok_or_else(|| KursError::shape("yahoo valuation measures heading not found"))?;
        let table = find_next_after(&doc, heading, "table")
            .ok_or_else(|| KursError::shape("yahoo valuation measures table not found"))?;
        let raw = thead_table(table)?;

        let mut columns = raw.columns().to_vec();
        if let Some(first) = columns.first_mut().filter(|c| c.is_empty()) {
            "Criteria".clone_into(first);
        }
        let table = Table::from_rows(columns, raw.rows().to_vec())?;
        non_empty(table, self.security.label(), "valuation measures")
    }

    /// Financial highlights (fiscal year, profitability, ...) as
    /// `Criteria, Value` rows.
    ///
    /// # Errors
    /// See [`YahooWeb::cash_flow`].
    pub async fn financial_highlights(&self) -> Result<Table, KursError> {
        self.highlight_card(0, "financial highlights").await
    }

    /// Trading information (price history, share statistics, ...) as
    /// `Criteria, Value` rows.
    ///
    /// # Errors
    /// See [`YahooWeb::cash_flow`].
    pub async fn trading_information(&self) -> Result<Table, KursError> {
        self.highlight_card(1, "trading information").await
    }

    async fn highlight_card(&self, index: usize, what: &str) -> Result<Table, KursError> {
        let body = self.page("key-statistics", STOCK).await?;
        let doc = parse_document(&body);
        let block = find_first(&doc, "div", &[("data-testid", "stats-highlight")])
            .ok_or_else(|| KursError::shape("yahoo stats highlight block not found"))?;
        let card = children_named(block, "section")
            .into_iter()
            .nth(index)
            .ok_or_else(|| KursError::shape(format!("yahoo {what} card not found")))?;
        non_empty(key_value_rows(card, "Criteria", "Value")?, self.security.label(), what)
    }

    /// Company name from the quote header, e.g. `Apple Inc` for
    /// `Apple Inc. (AAPL)`.
    ///
    /// # Errors
    /// `ShapeMismatch` when no header mentions the ticker; see also
    /// [`YahooWeb::cash_flow`].
    pub async fn full_name(&self) -> Result<String, KursError> {
        let body = self.page("", STOCK).await?;
        let doc = parse_document(&body);
        let ticker = self.security.ticker()?;
        let header = find_by_text(&doc, "h1", &format!("({ticker})"), &[], 0)
            .ok_or_else(|| KursError::shape(format!("no h1 mentions ({ticker})")))?;
        let text = text_of(header);
        NAME_PREFIX
            .find(&text)
            .map(|m| m.as_str().trim().to_string())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| KursError::shape(format!("no name in header {text:?}")))
    }
}

fn section<'a>(doc: &'a Html, testid: &str) -> Result<ElementRef<'a>, KursError> {
    find_first(doc, "section", &[("data-testid", testid)])
        .ok_or_else(|| KursError::shape(format!("yahoo section[data-testid={testid}] not found")))
}

/// The div grid headed by `Breakdown`: header from the first `div.row`'s
/// child divs, one row per `div.row.lv-0` read from its last header-width
/// descendant divs.
fn grid_table(doc: &Html) -> Result<Table, KursError> {
    let grid = find_by_text(doc, "div", "Breakdown", &[("class", "table")], 0)
        .ok_or_else(|| KursError::shape("yahoo financials grid (\"Breakdown\") not found"))?;
    let header_row = find_in(grid, "div", &[("class", "row")])
        .ok_or_else(|| KursError::shape("yahoo financials grid has no header row"))?;
    let header = child_texts(header_row, "div");
    let width = header.len();

    let mut table = Table::new(header);
    for row in find_all_in(grid, "div", &[("class", "row lv-0")]) {
        let cells = cell_texts(row, "div");
        let start = cells.len().saturating_sub(width);
        table.push_row(cells[start..].to_vec())?;
    }
    Ok(table)
}
