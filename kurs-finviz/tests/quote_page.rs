use std::sync::Arc;

use kurs_core::{KursError, PageSource, Security};
use kurs_finviz::Finviz;
use kurs_mock::{MOCK_ROOT, MockSource};

fn finviz(ticker: &str) -> Finviz {
    let source: Arc<dyn PageSource> = Arc::new(MockSource::new());
    Finviz::new(Security::stock(ticker), format!("{MOCK_ROOT}/finviz"), source)
}

#[tokio::test]
async fn insider_trading_skips_spacer_rows() {
    let t = finviz("AAPL").insider_trading().await.unwrap();
    assert_eq!(t.shape(), (2, 9));
    assert_eq!(t.columns()[0], "Insider Trading");
    assert_eq!(t.cell(0, "Insider Trading"), Some("LEVINSON ARTHUR D"));
    assert_eq!(t.cell(1, "Relationship"), Some("Senior Vice President"));
    assert_eq!(t.cell(1, "#Shares"), Some("8,119"));
}

#[tokio::test]
async fn price_reaction_is_raw_json() {
    let v = finviz("AAPL").price_reaction_to_earnings().await.unwrap();
    assert_eq!(v["ticker"], "AAPL");
    assert_eq!(v["earningsData"].as_array().map(Vec::len), Some(2));
    assert_eq!(v["earningsData"][0]["earningsDate"], "2024-08-01");
}

#[tokio::test]
async fn missing_structures_are_shape_mismatches() {
    let f = finviz("BARE");
    assert!(matches!(
        f.insider_trading().await.unwrap_err(),
        KursError::ShapeMismatch { .. }
    ));
    assert!(matches!(
        f.price_reaction_to_earnings().await.unwrap_err(),
        KursError::ShapeMismatch { .. }
    ));
}

#[tokio::test]
async fn insider_table_without_transactions_is_no_data() {
    let err = finviz("EMPTY").insider_trading().await.unwrap_err();
    assert!(
        matches!(err, KursError::NoDataForSymbol { ref symbol, .. } if symbol == "EMPTY"),
        "{err:?}"
    );
}

#[tokio::test]
async fn server_errors_surface_as_fetch_failures() {
    let err = finviz("FAIL").insider_trading().await.unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn unusable_base_url_is_invalid_configuration() {
    let source: Arc<dyn PageSource> = Arc::new(MockSource::new());
    let f = Finviz::new(Security::stock("AAPL"), "not a url", source);
    assert!(matches!(
        f.insider_trading().await.unwrap_err(),
        KursError::InvalidConfiguration(_)
    ));
}
