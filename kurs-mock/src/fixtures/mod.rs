use std::collections::HashMap;

use kurs_core::KursError;
use url::Url;

mod digrin;
mod finviz;
mod justetf;
mod macrotrends;
mod nasdaq;
mod yahoo;

/// Ticker with complete fixtures on every site.
pub const STOCK: &str = "AAPL";

/// ISIN with complete JustETF fixtures.
pub const ETF_ISIN: &str = "IE00B4L5Y983";

/// Page without any of the anchors the site clients look for.
pub const BLANK_PAGE: &str =
    "<html><head><title>Not here</title></head><body><p>Nothing to see.</p></body></html>";

pub fn route(url: &str) -> Result<String, KursError> {
    let parsed = Url::parse(url).map_err(|e| KursError::fetch_failed(url, None, e.to_string()))?;
    let segments: Vec<&str> = parsed
        .path_segments()
        .map(|s| s.filter(|p| !p.is_empty()).collect())
        .unwrap_or_default();
    let query: HashMap<String, String> = parsed.query_pairs().into_owned().collect();

    let mentions = |symbol: &str| {
        segments.iter().any(|s| s.eq_ignore_ascii_case(symbol))
            || query.values().any(|v| v.eq_ignore_ascii_case(symbol))
    };
    if mentions("FAIL") {
        return Err(KursError::fetch_failed(url, Some(500), "forced failure"));
    }
    if mentions("BARE") {
        return Ok(BLANK_PAGE.to_string());
    }

    let param = |k: &str| query.get(k).map(String::as_str);
    let page = match segments.as_slice() {
        ["yahoo-chart", rest @ ..] => yahoo::chart(rest),
        ["yahoo-fundamentals", rest @ ..] => yahoo::fundamentals(rest, param("type").unwrap_or("")),
        ["yahoo", rest @ ..] => yahoo::web(rest),
        ["digrin", rest @ ..] => digrin::page(rest),
        ["finviz"] => finviz::page(param("t"), param("ty")),
        ["macrotrends", rest @ ..] => macrotrends::page(rest),
        ["nasdaq", rest @ ..] => nasdaq::page(rest),
        ["justetf", "etf-profile.html"] => justetf::page(param("isin")),
        _ => None,
    };
    page.ok_or_else(|| {
        KursError::fetch_failed(url, Some(404), "failed to load page, check if the symbol exists")
    })
}
