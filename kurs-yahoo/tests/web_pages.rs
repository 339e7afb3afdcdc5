use std::sync::Arc;

use kurs_core::{KursError, PageSource, Security};
use kurs_mock::{MOCK_ROOT, MockSource};
use kurs_yahoo::YahooWeb;

fn web(ticker: &str) -> YahooWeb {
    let source: Arc<dyn PageSource> = Arc::new(MockSource::new());
    YahooWeb::new(Security::stock(ticker), format!("{MOCK_ROOT}/yahoo"), source)
}

#[tokio::test]
async fn profile_texts_and_executives() {
    let w = web("AAPL");
    assert!(w.description().await.unwrap().starts_with("Apple Inc. designs"));
    assert_eq!(
        w.corporate_governance().await.unwrap(),
        "Apple Inc.'s ISS Governance QualityScore as of October 1, 2024 is 1."
    );
    let execs = w.key_executives().await.unwrap();
    assert_eq!(execs.shape(), (2, 5));
    assert_eq!(execs.cell(0, "Title"), Some("CEO & Director"));
}

#[tokio::test]
async fn description_is_available_for_etfs() {
    let source: Arc<dyn PageSource> = Arc::new(MockSource::new());
    let w = YahooWeb::new(Security::etf("AAPL"), format!("{MOCK_ROOT}/yahoo"), source);
    assert!(w.description().await.is_ok());
    assert!(matches!(
        w.corporate_governance().await.unwrap_err(),
        KursError::InvalidConfiguration(_)
    ));
}

#[tokio::test]
async fn holder_tables() {
    let w = web("AAPL");

    let major = w.major_holders().await.unwrap();
    assert_eq!(major.columns(), ["value", "description"]);
    assert_eq!(major.shape(), (4, 2));
    assert_eq!(major.rows()[0], ["2.72%", "% of Shares Held by All Insider"]);

    let institutions = w.top_institutional_holders().await.unwrap();
    assert_eq!(institutions.shape(), (2, 5));
    assert_eq!(institutions.cell(1, "Holder"), Some("Blackrock Inc."));

    let funds = w.top_mutual_fund_holders().await.unwrap();
    assert_eq!(funds.columns(), ["holder", "shares", "date_reported", "percentage", "value"]);
    assert_eq!(funds.shape(), (3, 5));
    assert_eq!(funds.cell(2, "date_reported"), Some("May 31, 2024"));
}

#[tokio::test]
async fn summary_lists_table_cells_then_streamers() {
    let t = web("AAPL").summary().await.unwrap();
    assert_eq!(t.columns(), ["field", "value"]);
    assert_eq!(
        t.column("field").unwrap(),
        [
            "PREV_CLOSE",
            "OPEN",
            "MARKET_CAP",
            "PE_RATIO",
            "regularMarketPrice",
            "regularMarketChange",
        ]
    );
    assert_eq!(t.cell(2, "value"), Some("3.573T"));
    assert_eq!(t.cell(5, "value"), Some("+1.15"));
}

#[tokio::test]
async fn analysis_rows_are_padded_to_the_widest() {
    let t = web("AAPL").analysis().await.unwrap();
    assert_eq!(t.columns(), ["Criteria", "Value 1", "Value 2", "Value 3", "Value 4"]);
    assert_eq!(t.shape(), (3, 5));
    assert_eq!(t.rows()[1], ["Avg. Estimate", "2.35", "1.61", "7.37", "8.18"]);
    assert_eq!(t.rows()[2], ["Current Qtr.", "5.70%", "6.68%", "", ""]);
}

#[tokio::test]
async fn valuation_measures_name_the_label_column() {
    let t = web("AAPL").valuation_measures().await.unwrap();
    assert_eq!(t.columns(), ["Criteria", "Current", "6/30/2024", "3/31/2024"]);
    assert_eq!(t.cell(1, "Criteria"), Some("Trailing P/E"));
}

#[tokio::test]
async fn highlight_cards() {
    let w = web("AAPL");

    let highlights = w.financial_highlights().await.unwrap();
    assert_eq!(highlights.columns(), ["Criteria", "Value"]);
    assert_eq!(highlights.shape(), (3, 2));
    assert_eq!(highlights.cell(2, "Value"), Some("23.97%"));

    let trading = w.trading_information().await.unwrap();
    assert_eq!(trading.shape(), (5, 2));
    assert_eq!(trading.cell(0, "Criteria"), Some("Beta (5Y Monthly)"));
}

#[tokio::test]
async fn full_name_stops_at_punctuation() {
    assert_eq!(web("AAPL").full_name().await.unwrap(), "Apple Inc");
}

#[tokio::test]
async fn blank_pages_are_shape_mismatches() {
    let w = web("BARE");
    assert!(matches!(w.full_name().await.unwrap_err(), KursError::ShapeMismatch { .. }));
    assert!(matches!(w.description().await.unwrap_err(), KursError::ShapeMismatch { .. }));
    assert!(matches!(
        w.financial_highlights().await.unwrap_err(),
        KursError::ShapeMismatch { .. }
    ));
}

#[tokio::test]
async fn empty_sections_are_no_data() {
    let w = web("EMPTY");
    for result in [
        w.major_holders().await,
        w.top_institutional_holders().await,
        w.top_mutual_fund_holders().await,
        w.summary().await,
        w.analysis().await,
    ] {
        match result.unwrap_err() {
            KursError::NoDataForSymbol { symbol, .. } => assert_eq!(symbol, "EMPTY"),
            other => panic!("expected no data, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn unknown_ticker_surfaces_the_status() {
    let err = web("ZZZZ").summary().await.unwrap_err();
    assert!(err.is_fetch_failure());
    assert_eq!(err.status(), Some(404));
}
