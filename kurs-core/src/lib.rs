//! kurs-core
//!
//! Building blocks shared by every site client.
//!
//! - `source`: the `PageSource` trait (URL in, page text out).
//! - `http`: the static HTTP source with browser headers and 429 retries.
//! - `locate`: find elements by tag, attributes and contained text.
//! - `normalize`: human-formatted numbers and dates to `f64` / `YYYY-MM-DD`.
//! - `extract`: header/body tables and embedded script JSON.
//! - `series`: numeric series for charting.
//!
//! Async runtime (Tokio)
//! ---------------------
//! Retry pauses use `tokio::time::sleep`, so fetching must run under a Tokio
//! 1.x runtime. Parsing is synchronous and happens after the page text has
//! been fully received.
#![warn(missing_docs)]

/// Table and script extraction helpers.
pub mod extract;
/// HTTP page source and the rate-limit retry loop.
pub mod http;
/// Element lookup by tag, attributes and text.
pub mod locate;
/// Number and date normalization.
pub mod normalize;
/// Numeric series preparation.
pub mod series;
/// The `PageSource` seam.
pub mod source;

pub use http::{HttpSource, RawResponse, fetch_with_retry};
pub use kurs_types::{
    CacheConfig, Endpoints, Frequency, HttpConfig, KursConfig, KursError, Security, SecurityType,
    Table,
};
pub use scraper::Html;
pub use series::{DateStyle, Series};
pub use source::{PageSource, SourceLayer};

/// Parse page text into a document.
#[must_use]
pub fn parse_document(text: &str) -> Html {
    Html::parse_document(text)
}
