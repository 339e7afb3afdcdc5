//! JSON endpoints: chart (prices, trading periods) and fundamentals-timeseries.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use chrono::DateTime;
use kurs_core::extract::{json_cell, parse_json};
use kurs_core::series::numeric_series;
use kurs_core::{DateStyle, KursError, PageSource, Security, Series, Table};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::params::{FundamentalsRequest, Interval, Range, Statement, ValueFormat};

const PRICE_COLUMNS: [&str; 11] = [
    "timestamp",
    "volume",
    "close",
    "open",
    "high",
    "low",
    "currency",
    "timezone",
    "exchangeTimezoneName",
    "exchangeName",
    "instrumentType",
];

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: ChartMeta,
    #[serde(default)]
    timestamp: Vec<i64>,
    #[serde(default)]
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartMeta {
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    timezone: Option<String>,
    #[serde(default)]
    exchange_timezone_name: Option<String>,
    #[serde(default)]
    exchange_name: Option<String>,
    #[serde(default)]
    instrument_type: Option<String>,
    #[serde(default)]
    current_trading_period: Option<TradingPeriods>,
}

#[derive(Debug, Deserialize)]
struct TradingPeriods {
    pre: TradingPeriod,
    regular: TradingPeriod,
    post: TradingPeriod,
}

#[derive(Debug, Deserialize)]
struct TradingPeriod {
    #[serde(default)]
    timezone: String,
    start: i64,
    end: i64,
    #[serde(default)]
    gmtoffset: i64,
}

#[derive(Debug, Default, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteBars>,
}

#[derive(Debug, Default, Deserialize)]
struct QuoteBars {
    #[serde(default)]
    volume: Vec<Option<u64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
}

fn bar<T: ToString>(values: &[Option<T>], i: usize) -> String {
    values
        .get(i)
        .and_then(Option::as_ref)
        .map(ToString::to_string)
        .unwrap_or_default()
}

fn utc(ts: i64) -> Result<String, KursError> {
    DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .ok_or_else(|| KursError::normalization(ts.to_string(), "unix timestamp"))
}

/// Client for the Yahoo JSON endpoints of one security.
#[derive(Clone)]
pub struct YahooApi {
    security: Security,
    chart_base: String,
    fundamentals_base: String,
    source: Arc<dyn PageSource>,
}

impl YahooApi {
    /// Build a client for the chart API under `chart_base` and the
    /// fundamentals-timeseries API under `fundamentals_base`.
    pub fn new(
        security: Security,
        chart_base: impl Into<String>,
        fundamentals_base: impl Into<String>,
        source: Arc<dyn PageSource>,
    ) -> Self {
        Self {
            security,
            chart_base: chart_base.into().trim_end_matches('/').to_string(),
            fundamentals_base: fundamentals_base.into().trim_end_matches('/').to_string(),
            source,
        }
    }

    /// Security this client reads.
    #[must_use]
    pub const fn security(&self) -> &Security {
        &self.security
    }

    async fn chart(&self, params: &[(&str, &str)]) -> Result<ChartResult, KursError> {
        let ticker = self.security.ticker()?;
        let base = format!("{}/chart/{ticker}", self.chart_base);
        let url = if params.is_empty() {
            Url::parse(&base)
        } else {
            Url::parse_with_params(&base, params)
        }
        .map_err(|e| KursError::invalid_config(format!("yahoo chart url {base:?}: {e}")))?;

        let body = self.source.fetch(url.as_str()).await?;
        let envelope: ChartEnvelope = serde_json::from_str(&body)
            .map_err(|e| KursError::shape(format!("yahoo chart response: {e}")))?;
        envelope
            .chart
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| KursError::no_data(ticker, "chart"))
    }

    /// Price bars with the instrument's metadata repeated on every row.
    ///
    /// Timestamps are rendered as UTC `YYYY-MM-DD HH:MM:SS`; missing bars are
    /// empty cells.
    ///
    /// # Errors
    /// `NoDataForSymbol` when the chart has no timestamps, `ShapeMismatch`
    /// when the response is not a chart, `FetchFailed` when it cannot be
    /// loaded.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "kurs_yahoo::api::price",
            skip(self),
            fields(ticker = %self.security.label()),
            err,
        )
    )]
    pub async fn price(&self, range: Range, interval: Interval) -> Result<Table, KursError> {
        let result = self
            .chart(&[("range", range.as_str()), ("interval", interval.as_str())])
            .await?;
        if result.timestamp.is_empty() {
            return Err(KursError::no_data(self.security.label(), "price"));
        }

        let quote = result.indicators.quote.first();
        let meta = &result.meta;
        let constant = [
            &meta.currency,
            &meta.timezone,
            &meta.exchange_timezone_name,
            &meta.exchange_name,
            &meta.instrument_type,
        ]
        .map(|v| v.clone().unwrap_or_default());

        let mut table = Table::new(PRICE_COLUMNS.map(String::from).to_vec());
        for (i, ts) in result.timestamp.iter().enumerate() {
            let mut row = vec![utc(*ts)?];
            match quote {
                Some(q) => row.extend([
                    bar(&q.volume, i),
                    bar(&q.close, i),
                    bar(&q.open, i),
                    bar(&q.high, i),
                    bar(&q.low, i),
                ]),
                None => row.extend(std::iter::repeat_n(String::new(), 5)),
            }
            row.extend(constant.iter().cloned());
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Pre-market, regular and post-market sessions of the current day.
    ///
    /// Columns `field, pre, regular, post`; rows `timezone, start, end,
    /// gmtoffset` with start and end in UTC.
    ///
    /// # Errors
    /// `ShapeMismatch` when the chart metadata has no trading periods; see
    /// also [`YahooApi::price`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "kurs_yahoo::api::current_trading_period",
            skip(self),
            fields(ticker = %self.security.label()),
            err,
        )
    )]
    pub async fn current_trading_period(&self) -> Result<Table, KursError> {
        let result = self.chart(&[]).await?;
        let periods = result
            .meta
            .current_trading_period
            .ok_or_else(|| KursError::shape("chart meta has no currentTradingPeriod"))?;
        let sessions = [&periods.pre, &periods.regular, &periods.post];

        let mut table = Table::new(["field", "pre", "regular", "post"].map(String::from).to_vec());
        let fields: [(&str, fn(&TradingPeriod) -> Result<String, KursError>); 4] = [
            ("timezone", |p| Ok(p.timezone.clone())),
            ("start", |p| utc(p.start)),
            ("end", |p| utc(p.end)),
            ("gmtoffset", |p| Ok(p.gmtoffset.to_string())),
        ];
        for (name, render) in fields {
            let mut row = vec![name.to_string()];
            for session in sessions {
                row.push(render(session)?);
            }
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Income statement. See [`YahooApi::statement`].
    ///
    /// # Errors
    /// See [`YahooApi::statement`].
    pub async fn income_statement(&self, request: &FundamentalsRequest) -> Result<Table, KursError> {
        self.statement(Statement::IncomeStatement, request).await
    }

    /// Cash flow statement. See [`YahooApi::statement`].
    ///
    /// # Errors
    /// See [`YahooApi::statement`].
    pub async fn cash_flow(&self, request: &FundamentalsRequest) -> Result<Table, KursError> {
        self.statement(Statement::CashFlow, request).await
    }

    /// Balance sheet. See [`YahooApi::statement`].
    ///
    /// # Errors
    /// See [`YahooApi::statement`].
    pub async fn balance_sheet(&self, request: &FundamentalsRequest) -> Result<Table, KursError> {
        self.statement(Statement::BalanceSheet, request).await
    }

    /// Financials. See [`YahooApi::statement`].
    ///
    /// # Errors
    /// See [`YahooApi::statement`].
    pub async fn financials(&self, request: &FundamentalsRequest) -> Result<Table, KursError> {
        self.statement(Statement::Financials, request).await
    }

    /// One statement from the fundamentals-timeseries endpoint.
    ///
    /// The table has `asOfDate` followed by one column per field that came
    /// back with data (named with the frequency prefix, e.g.
    /// `annualTotalRevenue`), one row per reporting date in ascending order.
    /// A field without a value for some date gets an empty cell.
    ///
    /// # Errors
    /// `NoDataForSymbol` when no field has data, `ShapeMismatch` when the
    /// response is not a timeseries, `FetchFailed` when it cannot be loaded.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "kurs_yahoo::api::statement",
            skip(self, request),
            fields(ticker = %self.security.label(), frequency = request.frequency.as_str()),
            err,
        )
    )]
    pub async fn statement(
        &self,
        statement: Statement,
        request: &FundamentalsRequest,
    ) -> Result<Table, KursError> {
        let ticker = self.security.ticker()?;
        let base = format!("{}/{ticker}/", self.fundamentals_base);
        let types = statement.query_types(request.frequency);
        let period1 = request.period1.timestamp().to_string();
        let period2 = request.period2.timestamp().to_string();
        let url = Url::parse_with_params(
            &base,
            [
                ("symbol", ticker),
                ("type", types.as_str()),
                ("period1", period1.as_str()),
                ("period2", period2.as_str()),
            ],
        )
        .map_err(|e| KursError::invalid_config(format!("yahoo fundamentals url {base:?}: {e}")))?;

        let body = self.source.fetch(url.as_str()).await?;
        let json = parse_json(&body, "yahoo fundamentals response")?;
        let items = json
            .pointer("/timeseries/result")
            .and_then(Value::as_array)
            .ok_or_else(|| KursError::shape("yahoo fundamentals response has no timeseries.result"))?;
        timeseries_table(items, request.format, ticker)
    }

    /// Numeric series of `fields` (unprefixed, e.g. `TotalRevenue`) from a
    /// statement, fetched with raw values. Dates where any of the fields is
    /// missing are dropped; an empty `fields` charts the statement's
    /// headline fields.
    ///
    /// # Errors
    /// `MissingField` when a field is not in the statement; see also
    /// [`YahooApi::statement`].
    pub async fn statement_series(
        &self,
        statement: Statement,
        request: &FundamentalsRequest,
        fields: &[&str],
    ) -> Result<Vec<Series>, KursError> {
        let request = FundamentalsRequest {
            format: ValueFormat::Raw,
            ..request.clone()
        };
        let table = self.statement(statement, &request).await?;

        let fields = if fields.is_empty() {
            statement.headline_fields()
        } else {
            fields
        };
        let prefixed: Vec<String> = fields
            .iter()
            .map(|f| format!("{}{f}", request.frequency.as_str()))
            .collect();
        let mut selected: Vec<&str> = vec!["asOfDate"];
        selected.extend(prefixed.iter().map(String::as_str));

        let table = table.select(&selected)?.drop_incomplete_rows();
        numeric_series(&table, "asOfDate", DateStyle::Iso, &selected[1..])
    }
}

fn timeseries_table(items: &[Value], format: ValueFormat, symbol: &str) -> Result<Table, KursError> {
    let mut columns = vec!["asOfDate".to_string()];
    let mut dates = BTreeSet::new();
    let mut cells: HashMap<(String, String), String> = HashMap::new();

    for item in items {
        let Some(field) = item.pointer("/meta/type/0").and_then(Value::as_str) else {
            continue;
        };
        let Some(points) = item.get(field).and_then(Value::as_array) else {
            continue;
        };
        let mut by_date = BTreeMap::new();
        for point in points.iter().filter(|p| !p.is_null()) {
            let date = point
                .get("asOfDate")
                .and_then(Value::as_str)
                .ok_or_else(|| KursError::shape(format!("{field} point has no asOfDate")))?;
            let value = point
                .pointer(&format!("/reportedValue/{}", format.as_str()))
                .map(json_cell)
                .unwrap_or_default();
            by_date.insert(date.to_string(), value);
        }
        if by_date.is_empty() {
            continue;
        }
        columns.push(field.to_string());
        for (date, value) in by_date {
            dates.insert(date.clone());
            cells.insert((field.to_string(), date), value);
        }
    }

    if columns.len() == 1 {
        return Err(KursError::no_data(symbol, "fundamentals"));
    }

    let mut table = Table::new(columns.clone());
    for date in dates {
        let mut row = vec![date.clone()];
        row.extend(columns[1..].iter().map(|field| {
            cells
                .remove(&(field.clone(), date.clone()))
                .unwrap_or_default()
        }));
        table.push_row(row)?;
    }
    Ok(table)
}
