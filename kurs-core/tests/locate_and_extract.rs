use kurs_core::extract::{header_row_table, script_assignment, script_json_by_id, thead_table, uniform_rows_table};
use kurs_core::locate::{find_by_text, find_first};
use kurs_core::{KursError, parse_document};

const OPTIONS: &str = r#"
<html><body>
  <section>
    <table id="calls">
      <tr><th>Contract Name</th><th>Strike</th></tr>
      <tr><td>AAPL240621C00100000</td><td>100.00</td></tr>
      <tr><td>AAPL240621C00105000</td><td>105.00</td></tr>
    </table>
  </section>
  <section>
    <table id="puts">
      <tr><th>Contract Name</th><th>Strike</th></tr>
      <tr><td>AAPL240621P00100000</td><td>100.00</td></tr>
    </table>
  </section>
</body></html>"#;

#[test]
fn skip_selects_later_matches() {
    let doc = parse_document(OPTIONS);
    let first = find_by_text(&doc, "table", "Contract Name", &[], 0).unwrap();
    let second = find_by_text(&doc, "table", "Contract Name", &[], 1).unwrap();
    assert_eq!(first.value().attr("id"), Some("calls"));
    assert_eq!(second.value().attr("id"), Some("puts"));
    assert!(find_by_text(&doc, "table", "Contract Name", &[], 2).is_none());
}

#[test]
fn missing_text_is_none_not_error() {
    let doc = parse_document(OPTIONS);
    assert!(find_by_text(&doc, "table", "Open Interest", &[], 0).is_none());
    assert!(find_by_text(&doc, "table", "Contract Name", &[("class", "body-table")], 0).is_none());
}

#[test]
fn header_row_tables_keep_source_order() {
    let doc = parse_document(OPTIONS);
    let calls = find_by_text(&doc, "table", "Contract Name", &[], 0).unwrap();
    let t = header_row_table(calls).unwrap();
    assert_eq!(t.columns(), ["Contract Name", "Strike"]);
    assert_eq!(t.shape(), (2, 2));
    assert_eq!(t.cell(1, "Strike"), Some("105.00"));
}

#[test]
fn thead_tables_need_both_sections() {
    let doc = parse_document(
        "<table><thead><tr><th>Date</th><th>Amount</th></tr></thead>\
         <tbody><tr><td> 2024-02-09 </td><td>0.24</td></tr></tbody></table>",
    );
    let table = find_first(&doc, "table", &[]).unwrap();
    let t = thead_table(table).unwrap();
    assert_eq!(t.cell(0, "Date"), Some("2024-02-09"));

    let bare = parse_document("<div><table><tr><td>x</td></tr></table></div>");
    let table = find_first(&bare, "table", &[]).unwrap();
    assert!(matches!(thead_table(table), Err(KursError::ShapeMismatch { .. })));
}

#[test]
fn ragged_rows_are_dropped_only_when_asked() {
    let doc = parse_document(
        "<table class='body-table'><tr><th>Insider</th><th>Cost</th></tr>\
         <tr><td>COOK TIMOTHY</td><td>224.35</td></tr>\
         <tr><td colspan='2'>Show more</td></tr></table>",
    );
    let table = find_first(&doc, "table", &[("class", "body-table")]).unwrap();
    assert!(header_row_table(table).is_err());
    assert_eq!(uniform_rows_table(table).unwrap().shape(), (1, 2));
}

#[test]
fn script_payloads() {
    let doc = parse_document(
        r#"<div><script>
            var x = 1;
            var originalData = [{"field_name":"<a href='/x'>Revenue</a>","2023-12-31":"1.0"}];
        </script>
        <script id="route-init-data" type="application/json">{"earnings":[{"ticker":"AAPL"}]}</script></div>"#,
    );
    let rhs = script_assignment(doc.root_element(), "originalData").unwrap();
    assert!(rhs.starts_with('[') && rhs.ends_with(']'));

    let json = script_json_by_id(&doc, "route-init-data").unwrap();
    assert_eq!(json["earnings"][0]["ticker"], "AAPL");
    assert!(script_json_by_id(&doc, "nope").is_err());
}
