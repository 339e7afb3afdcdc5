use std::sync::Arc;

use kurs_core::{PageSource, Security};
use kurs_digrin::Digrin;
use kurs_mock::{MOCK_ROOT, MockSource};
use proptest::prelude::*;

fn digrin(ticker: &str) -> Digrin {
    let source: Arc<dyn PageSource> = Arc::new(MockSource::new());
    Digrin::new(Security::stock(ticker), format!("{MOCK_ROOT}/digrin"), source)
}

#[tokio::test]
async fn dividend_series_takes_the_leading_amount() {
    let s = digrin("AAPL").dividend_series().await.unwrap();
    assert_eq!(s.len(), 1);
    assert_eq!(s[0].dates(), vec!["2024-08-12", "2024-05-10"]);
    assert_eq!(s[0].values(), vec![0.25, 0.25]);
}

#[tokio::test]
async fn financial_series_normalize_dates_and_suffixes() {
    let s = digrin("AAPL").assets_vs_liabilities_series().await.unwrap();
    assert_eq!(s.len(), 2);
    assert_eq!(s[0].name, "Assets");
    assert_eq!(s[0].dates(), vec!["2024-09-28", "2023-09-30"]);
    assert!((s[0].values()[0] - 364.98e9).abs() < 1.0);
    assert!((s[1].values()[1] - 290.44e9).abs() < 1.0);
}

#[tokio::test]
async fn sentinels_become_zero() {
    let d = digrin("AAPL");
    let fcf = d.free_cash_flow_series().await.unwrap();
    assert_eq!(fcf[1].values()[1], 0.0);

    let exp = d.expenses_series().await.unwrap();
    assert_eq!(exp.len(), 4);
    assert_eq!(exp[3].name, "S&M");
    assert!(exp[3].values().iter().all(|v| *v == 0.0));

    let cash = d.cash_and_debt_series().await.unwrap();
    assert_eq!(cash.len(), 2);
}

#[tokio::test]
async fn price_series_strips_currency() {
    let s = digrin("AAPL").price_series().await.unwrap();
    assert_eq!(s[0].name, "Real price");
    assert_eq!(s[0].values()[2], 218.36);
    assert_eq!(s[1].dates()[0], "2024-10-01");
}

#[tokio::test]
async fn remaining_series_build() {
    let d = digrin("AAPL");
    assert_eq!(d.shares_outstanding_series().await.unwrap()[0].points.len(), 2);
    assert_eq!(d.net_income_series().await.unwrap()[0].points.len(), 2);
    assert_eq!(d.cost_of_revenue_series().await.unwrap().len(), 2);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn unknown_tickers_never_yield_tables(ticker in "[B-Z]{3,5}") {
        prop_assume!(!["BARE", "FAIL", "EMPTY"].contains(&ticker.as_str()));
        let d = digrin(&ticker);
        let res = tokio_test::block_on(async move { d.dividend().await });
        let err = res.unwrap_err();
        prop_assert_eq!(err.status(), Some(404));
    }
}
