use std::sync::Arc;
use std::time::Duration;

use kurs::{CacheConfig, Endpoints, KursError, SecurityType, Ticker};
use kurs_mock::{ETF_ISIN, MOCK_ROOT, MockSource, STOCK};

fn mock_ticker(source: Arc<MockSource>) -> kurs::TickerBuilder {
    Ticker::builder()
        .ticker(STOCK)
        .endpoints(Endpoints::all_at(MOCK_ROOT))
        .source(source)
}

#[test]
fn build_requires_ticker_or_isin() {
    let err = Ticker::builder().build().err().unwrap();
    assert!(matches!(err, KursError::InvalidConfiguration(_)), "{err:?}");

    let err = Ticker::builder().ticker("").isin("  ").build().err().unwrap();
    assert!(matches!(err, KursError::InvalidConfiguration(_)), "{err:?}");
}

#[test]
fn justetf_needs_isin() {
    let t = mock_ticker(Arc::new(MockSource::new())).build().unwrap();
    let err = t.justetf().err().unwrap();
    assert!(matches!(err, KursError::InvalidConfiguration(ref m) if m.contains("ISIN")));
}

#[tokio::test]
async fn every_site_reads_through_the_shared_source() {
    let source = Arc::new(MockSource::new());
    let t = mock_ticker(source.clone()).build().unwrap();

    assert_eq!(t.security().ticker().unwrap(), STOCK);
    assert_eq!(t.digrin().dividend().await.unwrap().shape(), (2, 3));
    assert_eq!(t.finviz().insider_trading().await.unwrap().shape(), (2, 9));
    assert_eq!(t.nasdaq().quarterly_earnings_surprise().await.unwrap().shape(), (3, 5));
    assert_eq!(t.yahoo_web().full_name().await.unwrap(), "Apple Inc");
    assert_eq!(source.calls(), 4);
}

#[tokio::test]
async fn renderer_serves_script_driven_pages() {
    let fetcher = Arc::new(MockSource::new());
    let renderer = Arc::new(MockSource::named("renderer"));
    let t = mock_ticker(fetcher.clone())
        .renderer(renderer.clone())
        .build()
        .unwrap();

    t.nasdaq().yearly_earnings_forecast().await.unwrap();
    t.macrotrends().balance_sheet().await.unwrap();
    t.macrotrends().income_statement().await.unwrap();

    assert_eq!(renderer.calls(), 2);
    assert_eq!(fetcher.calls(), 1);
}

#[tokio::test]
async fn cache_is_per_ticker_and_off_by_default() {
    let source = Arc::new(MockSource::new());
    let uncached = mock_ticker(source.clone()).build().unwrap();
    uncached.digrin().dividend().await.unwrap();
    uncached.digrin().dividend().await.unwrap();
    assert_eq!(source.calls(), 2);

    let source = Arc::new(MockSource::new());
    let cached = mock_ticker(source.clone())
        .cache(CacheConfig::with_ttl(Duration::from_secs(60)))
        .build()
        .unwrap();
    let first = cached.digrin().dividend().await.unwrap();
    let second = cached.digrin().dividend().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(source.calls(), 1);

    let other = mock_ticker(source.clone())
        .cache(CacheConfig::with_ttl(Duration::from_secs(60)))
        .build()
        .unwrap();
    other.digrin().dividend().await.unwrap();
    assert_eq!(source.calls(), 2);
}

#[tokio::test]
async fn etf_by_isin_reaches_justetf() {
    let t = Ticker::builder()
        .isin(ETF_ISIN)
        .security_type(SecurityType::Etf)
        .endpoints(Endpoints::all_at(MOCK_ROOT))
        .source(Arc::new(MockSource::new()))
        .build()
        .unwrap();

    let etf = t.justetf().unwrap();
    assert_eq!(etf.wkn().await.unwrap(), "A0RPWH");
    assert_eq!(etf.holdings_countries().await.unwrap().shape(), (2, 2));

    let err = t.digrin().dividend().await.unwrap_err();
    assert!(matches!(err, KursError::InvalidConfiguration(_)), "{err:?}");
}

#[tokio::test]
async fn company_name_feeds_macrotrends_slug() {
    let source = Arc::new(MockSource::new());
    let mut t = mock_ticker(source.clone()).build().unwrap();
    assert_eq!(t.macrotrends().slug(), "TBD");

    assert_eq!(t.resolve_company_name().await.unwrap(), "Apple Inc");
    assert_eq!(t.macrotrends().slug(), "apple-inc");
    assert_eq!(t.macrotrends().income_statement().await.unwrap().shape(), (4, 4));
    assert_eq!(source.calls(), 2);
}
