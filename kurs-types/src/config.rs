//! Configuration types shared by the page sources and site clients.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Desktop Chrome user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/130.0.0.0 Safari/537.36";

/// HTTP behaviour of the fetch helper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// `User-Agent` header.
    pub user_agent: String,
    /// `Accept` header.
    pub accept: String,
    /// `Referer` header.
    pub referer: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// How many times a 429 answer is retried before giving up.
    pub max_retries: u32,
    /// Fixed pause between rate-limited attempts.
    pub retry_delay: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8".to_string(),
            referer: "https://www.google.com/".to_string(),
            timeout: Duration::from_secs(10),
            max_retries: 5,
            retry_delay: Duration::from_secs(10),
        }
    }
}

/// Base URLs of every site. Override them to point at a mirror or a local
/// test server; paths are appended to these without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    /// Yahoo chart API root (`{root}/chart/{ticker}`).
    pub yahoo_chart: String,
    /// Yahoo fundamentals-timeseries API root (`{root}/{ticker}/`).
    pub yahoo_fundamentals: String,
    /// Yahoo quote pages (`{root}/{ticker}/...`).
    pub yahoo_web: String,
    /// Digrin stock detail pages (`{root}/{ticker}/...`).
    pub digrin: String,
    /// Finviz quote page; the ticker is passed as the `t` query parameter.
    pub finviz: String,
    /// Macrotrends chart pages (`{root}/{ticker}/TBD/{page}`).
    pub macrotrends: String,
    /// NASDAQ market-activity pages (`{root}/{ticker}/earnings`).
    pub nasdaq: String,
    /// JustETF site root (`{root}/etf-profile.html?isin=...`).
    pub justetf: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            yahoo_chart: "https://query2.finance.yahoo.com/v8/finance".to_string(),
            yahoo_fundamentals:
                "https://query1.finance.yahoo.com/ws/fundamentals-timeseries/v1/finance/timeseries"
                    .to_string(),
            yahoo_web: "https://finance.yahoo.com/quote".to_string(),
            digrin: "https://www.digrin.com/stocks/detail".to_string(),
            finviz: "https://finviz.com/quote.ashx".to_string(),
            macrotrends: "https://www.macrotrends.net/stocks/charts".to_string(),
            nasdaq: "https://www.nasdaq.com/market-activity/stocks".to_string(),
            justetf: "https://www.justetf.com/en".to_string(),
        }
    }
}

impl Endpoints {
    /// Point every site at the same root, e.g. a local mock server.
    #[must_use]
    pub fn all_at(root: &str) -> Self {
        let root = root.trim_end_matches('/');
        Self {
            yahoo_chart: format!("{root}/yahoo-chart"),
            yahoo_fundamentals: format!("{root}/yahoo-fundamentals"),
            yahoo_web: format!("{root}/yahoo"),
            digrin: format!("{root}/digrin"),
            finviz: format!("{root}/finviz"),
            macrotrends: format!("{root}/macrotrends"),
            nasdaq: format!("{root}/nasdaq"),
            justetf: format!("{root}/justetf"),
        }
    }
}

/// Per-instance result cache.
///
/// Caching is off unless both `ttl` and `capacity` are non-zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// How long a fetched page stays valid.
    pub ttl: Duration,
    /// Maximum number of pages kept.
    pub capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::ZERO,
            capacity: 256,
        }
    }
}

impl CacheConfig {
    /// Cache pages for `ttl` with the default capacity.
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            ..Self::default()
        }
    }

    /// True when the configuration actually caches anything.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero() && self.capacity > 0
    }
}

/// Top-level configuration for a `kurs` client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KursConfig {
    /// Request headers, timeout and rate-limit retries.
    pub http: HttpConfig,
    /// Base URLs of every site.
    pub endpoints: Endpoints,
    /// Result cache; disabled by default.
    pub cache: CacheConfig,
}
