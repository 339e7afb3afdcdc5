use std::sync::Arc;

use kurs_core::{KursError, PageSource, Security};
use kurs_macrotrends::{Macrotrends, company_slug};
use kurs_mock::{MOCK_ROOT, MockSource};

fn client(security: Security) -> (Macrotrends, Arc<MockSource>, Arc<MockSource>) {
    let fetcher = Arc::new(MockSource::named("fetcher"));
    let renderer = Arc::new(MockSource::named("renderer"));
    let m = Macrotrends::new(
        security,
        format!("{MOCK_ROOT}/macrotrends"),
        fetcher.clone() as Arc<dyn PageSource>,
        renderer.clone() as Arc<dyn PageSource>,
    );
    (m, fetcher, renderer)
}

#[tokio::test]
async fn income_statement_uses_static_fetcher() {
    let (m, fetcher, renderer) = client(Security::stock("AAPL"));
    let t = m.income_statement().await.unwrap();
    assert_eq!(t.shape(), (4, 4));
    assert_eq!(
        t.columns(),
        ["field_name", "2024-09-30", "2023-09-30", "2022-09-30"]
    );
    assert_eq!(t.cell(0, "field_name"), Some("Revenue"));
    assert_eq!(t.cell(0, "2024-09-30"), Some("391035.00000"));
    assert_eq!(t.cell(3, "2022-09-30"), Some(""));
    assert!(!t.has_column("popup_icon"));
    assert_eq!((fetcher.calls(), renderer.calls()), (1, 0));
}

#[tokio::test]
async fn rendered_pages_go_through_the_renderer() {
    let (m, fetcher, renderer) = client(Security::stock("AAPL"));

    let balance = m.balance_sheet().await.unwrap();
    assert_eq!(balance.cell(0, "field_name"), Some("Cash On Hand"));

    let cash = m.cash_flow().await.unwrap();
    assert_eq!(cash.cell(0, "field_name"), Some("Net Income/Loss"));
    assert_eq!(cash.cell(1, "2022-09-30"), Some(""));

    let ratios = m.key_financial_ratios().await.unwrap();
    assert_eq!(ratios.shape(), (3, 4));
    assert_eq!(ratios.cell(1, "field_name"), Some("Long-term Debt / Capital"));

    assert_eq!((fetcher.calls(), renderer.calls()), (0, 3));
}

#[tokio::test]
async fn empty_grid_is_no_data() {
    let (m, _, _) = client(Security::stock("EMPTY"));
    let err = m.income_statement().await.unwrap_err();
    assert!(matches!(err, KursError::NoDataForSymbol { ref symbol, .. } if symbol == "EMPTY"));
}

#[tokio::test]
async fn missing_anchor_is_shape_mismatch() {
    let (m, _, _) = client(Security::stock("BARE"));
    assert!(matches!(
        m.balance_sheet().await.unwrap_err(),
        KursError::ShapeMismatch { .. }
    ));
}

#[tokio::test]
async fn etfs_are_rejected_before_fetching() {
    let (m, fetcher, renderer) = client(Security::etf("SPY"));
    assert!(matches!(
        m.income_statement().await.unwrap_err(),
        KursError::InvalidConfiguration(_)
    ));
    assert_eq!((fetcher.calls(), renderer.calls()), (0, 0));
}

#[test]
fn company_names_become_url_slugs() {
    assert_eq!(company_slug("Apple Inc"), "apple-inc");
    assert_eq!(company_slug("  Berkshire  Hathaway Inc "), "berkshire-hathaway-inc");
}

#[tokio::test]
async fn company_name_replaces_placeholder_slug() {
    let (m, fetcher, _) = client(Security::stock("AAPL"));
    assert_eq!(m.slug(), "TBD");
    let m = m.with_company_name("Apple Inc");
    assert_eq!(m.slug(), "apple-inc");
    assert_eq!(m.income_statement().await.unwrap().shape(), (4, 4));
    assert_eq!(fetcher.calls(), 1);

    assert_eq!(m.with_company_name("   ").slug(), "apple-inc");
}
