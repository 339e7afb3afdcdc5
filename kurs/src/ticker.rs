use std::sync::Arc;

use kurs_core::{
    CacheConfig, Endpoints, HttpConfig, HttpSource, KursConfig, KursError, PageSource, Security,
    SecurityType,
};
use kurs_digrin::Digrin;
use kurs_finviz::Finviz;
use kurs_justetf::JustEtf;
use kurs_macrotrends::Macrotrends;
use kurs_middleware::SourceBuilder;
use kurs_nasdaq::Nasdaq;
use kurs_yahoo::{YahooApi, YahooWeb};

/// One security and a client for every supported site.
///
/// All clients share the same page sources: a static HTTP source (one
/// `reqwest::Client`, so connections and cookies are reused) and the
/// renderer for script-driven pages. When caching is enabled each source
/// gets its own URL-keyed cache that lives as long as the `Ticker`.
#[derive(Clone)]
pub struct Ticker {
    security: Security,
    config: KursConfig,
    yahoo_api: YahooApi,
    yahoo_web: YahooWeb,
    digrin: Digrin,
    finviz: Finviz,
    macrotrends: Macrotrends,
    nasdaq: Nasdaq,
    justetf: Option<JustEtf>,
}

impl Ticker {
    /// Start configuring a `Ticker`.
    #[must_use]
    pub fn builder() -> TickerBuilder {
        TickerBuilder::new()
    }

    /// Stock by ticker with the default configuration.
    ///
    /// # Errors
    /// `InvalidConfiguration` if the HTTP client cannot be built.
    pub fn stock(ticker: impl Into<String>) -> Result<Self, KursError> {
        Self::builder().ticker(ticker).build()
    }

    /// Security every call is made for.
    #[must_use]
    pub const fn security(&self) -> &Security {
        &self.security
    }

    /// Configuration the clients were built with.
    #[must_use]
    pub const fn config(&self) -> &KursConfig {
        &self.config
    }

    /// Yahoo chart and fundamentals API.
    #[must_use]
    pub const fn yahoo_api(&self) -> &YahooApi {
        &self.yahoo_api
    }

    /// Yahoo quote pages.
    #[must_use]
    pub const fn yahoo_web(&self) -> &YahooWeb {
        &self.yahoo_web
    }

    /// Digrin dividend and financials pages.
    #[must_use]
    pub const fn digrin(&self) -> &Digrin {
        &self.digrin
    }

    /// Finviz quote page.
    #[must_use]
    pub const fn finviz(&self) -> &Finviz {
        &self.finviz
    }

    /// Macrotrends statements (stocks).
    #[must_use]
    pub const fn macrotrends(&self) -> &Macrotrends {
        &self.macrotrends
    }

    /// Look up the company name on Yahoo and use it as the Macrotrends URL
    /// slug in place of the `TBD` placeholder.
    ///
    /// # Errors
    /// Errors of [`YahooWeb::full_name`]; the slug is left unchanged.
    pub async fn resolve_company_name(&mut self) -> Result<String, KursError> {
        let name = self.yahoo_web.full_name().await?;
        self.macrotrends = self.macrotrends.clone().with_company_name(&name);
        Ok(name)
    }

    /// NASDAQ earnings page.
    #[must_use]
    pub const fn nasdaq(&self) -> &Nasdaq {
        &self.nasdaq
    }

    /// JustETF profile (ETFs with an ISIN).
    ///
    /// # Errors
    /// `InvalidConfiguration` when the `Ticker` was built without an ISIN.
    pub fn justetf(&self) -> Result<&JustEtf, KursError> {
        self.justetf
            .as_ref()
            .ok_or_else(|| KursError::invalid_config("no ISIN provided, please provide an ISIN"))
    }
}

/// Builder for [`Ticker`].
#[derive(Default)]
pub struct TickerBuilder {
    ticker: Option<String>,
    isin: Option<String>,
    kind: SecurityType,
    config: KursConfig,
    source: Option<Arc<dyn PageSource>>,
    renderer: Option<Arc<dyn PageSource>>,
}

impl TickerBuilder {
    /// Empty builder: stock, default configuration, no cache, no renderer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticker symbol.
    #[must_use]
    pub fn ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }

    /// ISIN, required by JustETF.
    #[must_use]
    pub fn isin(mut self, isin: impl Into<String>) -> Self {
        self.isin = Some(isin.into());
        self
    }

    /// Security type; defaults to stock.
    #[must_use]
    pub fn security_type(mut self, kind: SecurityType) -> Self {
        self.kind = kind;
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: KursConfig) -> Self {
        self.config = config;
        self
    }

    /// Request headers, timeout and rate-limit retries.
    #[must_use]
    pub fn http(mut self, http: HttpConfig) -> Self {
        self.config.http = http;
        self
    }

    /// Site base URLs.
    #[must_use]
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.config.endpoints = endpoints;
        self
    }

    /// Per-instance page cache. Disabled unless `ttl` and `capacity` are
    /// both non-zero.
    #[must_use]
    pub fn cache(mut self, cache: CacheConfig) -> Self {
        self.config.cache = cache;
        self
    }

    /// Source for pages that need script execution (a headless browser).
    /// Without one, those pages are fetched statically.
    #[must_use]
    pub fn renderer(mut self, renderer: Arc<dyn PageSource>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Replace the static HTTP source, e.g. with a proxy-aware client.
    #[must_use]
    pub fn source(mut self, source: Arc<dyn PageSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Build every site client.
    ///
    /// # Errors
    /// `InvalidConfiguration` when neither a ticker nor an ISIN was given, or
    /// when the HTTP client cannot be built.
    pub fn build(self) -> Result<Ticker, KursError> {
        let security = Security::new(self.ticker, self.isin, self.kind);
        if security.ticker().is_err() && security.isin().is_err() {
            return Err(KursError::invalid_config("provide a ticker or an ISIN"));
        }
        let config = self.config;

        let raw: Arc<dyn PageSource> = match self.source {
            Some(source) => source,
            None => Arc::new(HttpSource::new(config.http.clone())?),
        };
        let raw_renderer = self.renderer.unwrap_or_else(|| raw.clone());

        let fetcher = SourceBuilder::new(raw).with_cache(&config.cache).build();
        let renderer = SourceBuilder::new(raw_renderer)
            .with_cache(&config.cache)
            .build();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            security = %security.label(),
            fetcher = fetcher.name(),
            renderer = renderer.name(),
            "building site clients"
        );

        let ep = &config.endpoints;
        let justetf = JustEtf::new(
            security.clone(),
            &ep.justetf,
            fetcher.clone(),
            renderer.clone(),
        )
        .ok();

        Ok(Ticker {
            yahoo_api: YahooApi::new(
                security.clone(),
                &ep.yahoo_chart,
                &ep.yahoo_fundamentals,
                fetcher.clone(),
            ),
            yahoo_web: YahooWeb::new(security.clone(), &ep.yahoo_web, fetcher.clone()),
            digrin: Digrin::new(security.clone(), &ep.digrin, fetcher.clone()),
            finviz: Finviz::new(security.clone(), &ep.finviz, fetcher.clone()),
            macrotrends: Macrotrends::new(
                security.clone(),
                &ep.macrotrends,
                fetcher.clone(),
                renderer.clone(),
            ),
            nasdaq: Nasdaq::new(security.clone(), &ep.nasdaq, renderer),
            justetf,
            security,
            config,
        })
    }
}
