use std::sync::Arc;

use kurs_core::{KursError, PageSource, Security};
use kurs_digrin::Digrin;
use kurs_mock::{MOCK_ROOT, MockSource};

fn digrin(ticker: &str) -> Digrin {
    let source: Arc<dyn PageSource> = Arc::new(MockSource::new());
    Digrin::new(Security::stock(ticker), format!("{MOCK_ROOT}/digrin"), source)
}

#[tokio::test]
async fn dividend_table_has_header_and_rows() {
    let t = digrin("AAPL").dividend().await.unwrap();
    assert_eq!(t.shape(), (2, 3));
    assert!(t.has_column("Ex-dividend date"));
    assert_eq!(t.cell(0, "Ex-dividend date"), Some("2024-08-12"));
    assert_eq!(t.cell(1, "Dividend amount (change)"), Some("0.25 (4.17%)"));
}

#[tokio::test]
async fn repeated_calls_yield_equal_tables() {
    let d = digrin("AAPL");
    let a = d.dividend().await.unwrap();
    let b = d.dividend().await.unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn financials_page_tables_are_told_apart_by_anchor() {
    let d = digrin("AAPL");
    assert_eq!(
        d.assets_vs_liabilities().await.unwrap().columns(),
        ["Date", "Assets", "Liabilities"]
    );
    assert_eq!(
        d.free_cash_flow().await.unwrap().columns(),
        ["Date", "Free Cash Flow", "Stock based compensation"]
    );
    assert_eq!(d.net_income().await.unwrap().columns(), ["Date", "Net Income"]);
    assert_eq!(
        d.cash_and_debt().await.unwrap().columns(),
        ["Date", "Cash", "Debt", "Capital Lease"]
    );
    assert_eq!(
        d.shares_outstanding().await.unwrap().columns(),
        ["Date", "Shares Outstanding"]
    );
    assert_eq!(
        d.expenses().await.unwrap().columns(),
        ["Date", "Capex", "R&D", "G&A", "S&M"]
    );
    assert_eq!(
        d.cost_of_revenue().await.unwrap().columns(),
        ["Date", "Cost of Revenue", "Revenue"]
    );
}

#[tokio::test]
async fn other_pages_are_read() {
    let d = digrin("AAPL");
    assert_eq!(d.payout_ratio().await.unwrap().shape(), (3, 2));
    assert_eq!(d.price().await.unwrap().shape(), (3, 3));
    assert_eq!(d.stock_splits().await.unwrap().cell(0, "Split Ratio"), Some("4:1"));
    for t in [d.dgr3().await, d.dgr5().await, d.dgr10().await] {
        assert!(t.unwrap().has_column("Estimated Yield on Cost"));
    }
    let e = d.upcoming_estimated_earnings().await.unwrap();
    assert_eq!(e.cell(1, "Actual / Estimated EPS"), Some("1.64 / 1.60"));
}

#[tokio::test]
async fn empty_dividend_table_is_no_data() {
    let err = digrin("EMPTY").dividend().await.unwrap_err();
    assert_eq!(err, KursError::no_data("EMPTY", "dividend"));
}

#[tokio::test]
async fn missing_table_is_shape_mismatch() {
    let err = digrin("BARE").dividend().await.unwrap_err();
    assert!(matches!(err, KursError::ShapeMismatch { .. }));
}

#[tokio::test]
async fn unknown_ticker_is_fetch_failure() {
    let err = digrin("ZZZZ").price().await.unwrap_err();
    assert!(err.is_fetch_failure());
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn missing_ticker_is_invalid_configuration() {
    let source: Arc<dyn PageSource> = Arc::new(MockSource::new());
    let d = Digrin::new(
        Security::new(None, Some("US0378331005".into()), kurs_core::SecurityType::Stock),
        format!("{MOCK_ROOT}/digrin"),
        source,
    );
    assert!(matches!(
        d.dividend().await.unwrap_err(),
        KursError::InvalidConfiguration(_)
    ));
}
