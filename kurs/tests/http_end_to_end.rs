use std::time::Duration;

use httpmock::prelude::*;
use kurs::{CacheConfig, Endpoints, HttpConfig, KursError, Ticker};
use kurs_mock::MOCK_ROOT;

fn fixture(path: &str) -> String {
    kurs_mock::page(&format!("{MOCK_ROOT}{path}")).unwrap()
}

fn ticker_at(server: &MockServer, symbol: &str) -> kurs::TickerBuilder {
    Ticker::builder()
        .ticker(symbol)
        .endpoints(Endpoints::all_at(&server.base_url()))
        .http(HttpConfig {
            retry_delay: Duration::from_millis(1),
            ..HttpConfig::default()
        })
}

#[tokio::test]
async fn dividend_over_http() {
    let server = MockServer::start_async().await;
    let m = server
        .mock_async(|when, then| {
            when.method(GET).path("/digrin/AAPL");
            then.status(200).body(fixture("/digrin/AAPL"));
        })
        .await;

    let t = ticker_at(&server, "AAPL").build().unwrap();
    let table = t.digrin().dividend().await.unwrap();

    assert_eq!(table.shape(), (2, 3));
    assert!(table.has_column("Ex-dividend date"));
    m.assert_async().await;
}

#[tokio::test]
async fn unknown_symbol_is_fetch_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/digrin/NOPE");
            then.status(404).body("not found");
        })
        .await;

    let t = ticker_at(&server, "NOPE").build().unwrap();
    let err = t.digrin().dividend().await.unwrap_err();

    assert!(matches!(err, KursError::FetchFailed { .. }), "{err:?}");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn repeated_calls_are_idempotent() {
    let server = MockServer::start_async().await;
    let m = server
        .mock_async(|when, then| {
            when.method(GET).path("/nasdaq/aapl/earnings");
            then.status(200).body(fixture("/nasdaq/aapl/earnings"));
        })
        .await;

    let t = ticker_at(&server, "AAPL").build().unwrap();
    let first = t.nasdaq().yearly_earnings_forecast().await.unwrap();
    let second = t.nasdaq().yearly_earnings_forecast().await.unwrap();

    assert_eq!(first, second);
    m.assert_calls_async(2).await;
}

#[tokio::test]
async fn cached_ticker_fetches_once() {
    let server = MockServer::start_async().await;
    let m = server
        .mock_async(|when, then| {
            when.method(GET).path("/digrin/AAPL/price");
            then.status(200).body(fixture("/digrin/AAPL/price"));
        })
        .await;

    let t = ticker_at(&server, "AAPL")
        .cache(CacheConfig::with_ttl(Duration::from_secs(60)))
        .build()
        .unwrap();
    let table = t.digrin().price().await.unwrap();
    let series = t.digrin().price_series().await.unwrap();

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].points.len(), table.shape().0);
    m.assert_calls_async(1).await;
}
