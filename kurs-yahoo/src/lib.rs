//! kurs-yahoo
//!
//! Yahoo Finance for the kurs client, in two flavours:
//!
//! - [`YahooApi`]: the JSON chart and fundamentals-timeseries endpoints
//!   (price bars, trading sessions, financial statements by period).
//! - [`YahooWeb`]: the quote pages (financial grids, options, profile,
//!   holders, summary, analysis, key statistics).
//!
//! Both read through a [`kurs_core::PageSource`], so a cache or a test double
//! can sit in front of the network.
#![warn(missing_docs)]

mod api;
/// Chart and fundamentals request parameters.
pub mod params;
mod web;

pub use api::YahooApi;
pub use params::{FundamentalsRequest, Interval, Range, Statement, ValueFormat};
pub use web::YahooWeb;
