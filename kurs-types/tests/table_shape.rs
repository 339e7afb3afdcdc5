use kurs_types::{KursError, Security, SecurityType, Table};

fn s(v: &[&str]) -> Vec<String> {
    v.iter().map(|x| (*x).to_string()).collect()
}

fn financials() -> Table {
    Table::from_rows(
        s(&["Breakdown", "TTM", "9/30/2024"]),
        vec![
            s(&["Total Revenue", "391,035", "391,035"]),
            s(&["Cost of Revenue", "210,352", "210,352"]),
        ],
    )
    .unwrap()
}

#[test]
fn push_row_rejects_wrong_width() {
    let mut t = Table::new(s(&["a", "b"]));
    let err = t.push_row(s(&["1"])).unwrap_err();
    assert!(matches!(err, KursError::ShapeMismatch { .. }));
    assert!(t.is_empty());
}

#[test]
fn transpose_pivots_around_first_column() {
    let t = financials().transpose();
    assert_eq!(t.columns(), s(&["Breakdown", "Total Revenue", "Cost of Revenue"]));
    assert_eq!(t.shape(), (2, 3));
    assert_eq!(t.cell(0, "Breakdown"), Some("TTM"));
    assert_eq!(t.cell(1, "Cost of Revenue"), Some("210,352"));
}

#[test]
fn select_reports_available_fields() {
    let err = financials().select(&["Breakdown", "EBITDA"]).unwrap_err();
    match err {
        KursError::MissingField { field, available } => {
            assert_eq!(field, "EBITDA");
            assert_eq!(available.len(), 3);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn drop_incomplete_rows_removes_blanks() {
    let t = Table::from_rows(s(&["Date", "Value"]), vec![s(&["2024", "1"]), s(&["2023", " "])])
        .unwrap()
        .drop_incomplete_rows();
    assert_eq!(t.shape(), (1, 2));
}

#[test]
fn security_type_requirement() {
    let etf = Security::etf("IWDA").with_isin("IE00B4L5Y983");
    assert!(etf.require(&[SecurityType::Etf]).is_ok());
    let err = etf.require(&[SecurityType::Stock]).unwrap_err();
    assert!(matches!(err, KursError::InvalidConfiguration(_)));

    let no_isin = Security::etf("IWDA").with_isin("");
    assert!(matches!(no_isin.isin(), Err(KursError::InvalidConfiguration(_))));
}

#[test]
fn fetch_failed_display_includes_status() {
    let err = KursError::fetch_failed("https://x/y", Some(404), "check the symbol");
    assert_eq!(err.to_string(), "fetch failed for https://x/y (HTTP 404): check the symbol");
    assert_eq!(err.status(), Some(404));
    assert!(!err.is_rate_limited());
}

#[test]
fn deserialize_rejects_ragged_rows() {
    let err = serde_json::from_str::<Table>(r#"{"columns":["a","b"],"rows":[["1"]]}"#).unwrap_err();
    assert!(err.to_string().contains("row has 1 cells"), "{err}");

    let t: Table = serde_json::from_str(r#"{"columns":["a","b"],"rows":[["1","2"]]}"#).unwrap();
    assert_eq!(t.cell(0, "b"), Some("2"));
    assert_eq!(serde_json::from_str::<Table>(&serde_json::to_string(&t).unwrap()).unwrap(), t);
}
