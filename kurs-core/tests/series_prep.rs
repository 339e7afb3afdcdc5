use kurs_core::series::{first_token, numeric_series, numeric_series_with};
use kurs_core::{DateStyle, KursError, Table};

fn s(v: &[&str]) -> Vec<String> {
    v.iter().map(|x| (*x).to_string()).collect()
}

#[test]
fn financial_table_to_series() {
    let t = Table::from_rows(
        s(&["Date", "Assets", "Liabilities"]),
        vec![
            s(&["Dec. 31, 2023", "352.58 B", "290.44 B"]),
            s(&["Sept. 30, 2023", "?", "1.5 T"]),
        ],
    )
    .unwrap();

    let series = numeric_series(&t, "Date", DateStyle::Human, &["Assets", "Liabilities"]).unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].dates(), ["2023-12-31", "2023-09-30"]);
    assert_eq!(series[0].values()[1], 0.0);
    assert_eq!(series[1].values()[1], 1.5e12);
}

#[test]
fn dividend_amount_uses_leading_token() {
    let t = Table::from_rows(
        s(&["Ex-dividend date", "Dividend amount (change)"]),
        vec![s(&["2024-02-09", "0.24 (4.35%)"])],
    )
    .unwrap();
    let series = numeric_series_with(
        &t,
        "Ex-dividend date",
        DateStyle::Iso,
        &["Dividend amount (change)"],
        first_token,
    )
    .unwrap();
    assert_eq!(series[0].points, vec![("2024-02-09".to_string(), 0.24)]);
}

#[test]
fn missing_column_lists_available_fields() {
    let t = Table::new(s(&["Date", "Cash"]));
    match numeric_series(&t, "Date", DateStyle::Human, &["Debt"]) {
        Err(KursError::MissingField { field, available }) => {
            assert_eq!(field, "Debt");
            assert_eq!(available, s(&["Date", "Cash"]));
        }
        other => panic!("unexpected {other:?}"),
    }
}
