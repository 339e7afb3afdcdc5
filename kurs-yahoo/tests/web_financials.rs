use std::sync::Arc;

use kurs_core::{KursError, PageSource, Security};
use kurs_mock::{MOCK_ROOT, MockSource};
use kurs_yahoo::YahooWeb;

fn web(security: Security) -> YahooWeb {
    let source: Arc<dyn PageSource> = Arc::new(MockSource::new());
    YahooWeb::new(security, format!("{MOCK_ROOT}/yahoo"), source)
}

#[tokio::test]
async fn grid_is_transposed_to_one_row_per_period() {
    let t = web(Security::stock("AAPL")).income_statement().await.unwrap();
    assert_eq!(
        t.columns(),
        ["Breakdown", "Total Revenue", "Cost of Revenue", "Net Income"]
    );
    assert_eq!(t.column("Breakdown").unwrap(), ["TTM", "9/30/2024", "9/30/2023", "9/30/2022"]);
    assert_eq!(t.cell(3, "Total Revenue"), Some("394,328,000"));
}

#[tokio::test]
async fn cash_flow_and_balance_sheet_grids() {
    let w = web(Security::stock("AAPL"));
    let cash = w.cash_flow().await.unwrap();
    assert_eq!(cash.shape(), (4, 3));
    assert_eq!(cash.cell(1, "Free Cash Flow"), Some("108,807,000"));

    let balance = w.balance_sheet().await.unwrap();
    assert_eq!(balance.cell(2, "Total Debt"), Some("123,930,000"));
}

#[tokio::test]
async fn grid_without_line_items_is_no_data() {
    let err = web(Security::stock("EMPTY")).income_statement().await.unwrap_err();
    assert!(matches!(err, KursError::NoDataForSymbol { .. }));
}

#[tokio::test]
async fn grids_are_stock_only() {
    let err = web(Security::etf("AAPL")).cash_flow().await.unwrap_err();
    assert!(matches!(err, KursError::InvalidConfiguration(_)));
}

#[tokio::test]
async fn calls_and_puts_are_first_and_second_contract_tables() {
    let w = web(Security::etf("AAPL"));
    let calls = w.calls().await.unwrap();
    let puts = w.puts().await.unwrap();
    assert_eq!(calls.shape(), (2, 6));
    assert_eq!(puts.shape(), (3, 6));
    assert_eq!(calls.cell(0, "Contract Name"), Some("AAPL241025C00230000"));
    assert_eq!(puts.cell(2, "Strike"), Some("235.00"));
}

#[tokio::test]
async fn options_page_is_parsed_the_same_way_twice() {
    let w = web(Security::stock("AAPL"));
    assert_eq!(w.calls().await.unwrap(), w.calls().await.unwrap());
}

#[tokio::test]
async fn blank_options_page_is_shape_mismatch() {
    let err = web(Security::stock("BARE")).puts().await.unwrap_err();
    assert!(matches!(err, KursError::ShapeMismatch { .. }));
}
