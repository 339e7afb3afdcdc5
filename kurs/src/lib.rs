//! Kurs scrapes stock and ETF data from public finance sites and returns it
//! as plain tables.
//!
//! Overview
//! - [`Ticker`] bundles one security with a client per site: Yahoo Finance
//!   (JSON API and quote pages), Digrin, Finviz, Macrotrends, NASDAQ and
//!   JustETF.
//! - Every operation is a single page fetch followed by parsing; nothing is
//!   fetched at construction time.
//! - Results are [`Table`]s of strings (column order as published) or, for the
//!   `*_series` helpers, numeric [`Series`] ready for charting.
//! - Errors are uniform across sites: [`KursError::FetchFailed`] for transport
//!   and status problems, [`KursError::ShapeMismatch`] when a page no longer
//!   looks the way the parser expects, [`KursError::NoDataForSymbol`] when the
//!   page is intact but empty.
//!
//! Key behaviors and trade-offs
//! - Rate limiting: HTTP 429 is retried with a fixed pause up to
//!   `HttpConfig::max_retries` times; any other non-200 status fails at once.
//! - Rendering: some pages (NASDAQ earnings, parts of Macrotrends and
//!   JustETF) are built by scripts. Supply a renderer with
//!   [`TickerBuilder::renderer`]; without one the static page is used, which
//!   may yield `ShapeMismatch`.
//! - Caching: off by default. A [`CacheConfig`] with a TTL keeps page bodies
//!   per `Ticker`, so repeated calls skip the network at the cost of staleness.
//!
//! Examples
//! ```rust,ignore
//! use kurs::{SecurityType, Ticker};
//! use kurs::yahoo::{Interval, Range};
//!
//! let aapl = Ticker::stock("AAPL")?;
//! let bars = aapl.yahoo_api().price(Range::FiveDays, Interval::OneDay).await?;
//! let dividends = aapl.digrin().dividend().await?;
//!
//! let world = Ticker::builder()
//!     .isin("IE00B4L5Y983")
//!     .security_type(SecurityType::Etf)
//!     .build()?;
//! let sectors = world.justetf()?.holdings_sectors().await?;
//! ```
#![warn(missing_docs)]

mod ticker;

pub use kurs_core::{
    CacheConfig, DateStyle, Endpoints, Frequency, HttpConfig, HttpSource, KursConfig, KursError,
    PageSource, Security, SecurityType, Series, SourceLayer, Table,
};
pub use kurs_middleware::SourceBuilder;
pub use ticker::{Ticker, TickerBuilder};

/// Digrin client.
pub mod digrin {
    pub use kurs_digrin::Digrin;
}

/// Finviz client.
pub mod finviz {
    pub use kurs_finviz::Finviz;
}

/// JustETF client.
pub mod justetf {
    pub use kurs_justetf::{Holdings, JustEtf};
}

/// Macrotrends client.
pub mod macrotrends {
    pub use kurs_macrotrends::{Macrotrends, company_slug};
}

/// NASDAQ client.
pub mod nasdaq {
    pub use kurs_nasdaq::Nasdaq;
}

/// Yahoo Finance clients and request parameters.
pub mod yahoo {
    pub use kurs_yahoo::{
        FundamentalsRequest, Interval, Range, Statement, ValueFormat, YahooApi, YahooWeb,
    };
}
