const QUOTE: &str = r#"<!DOCTYPE html>
<html>
<head><title>AAPL Apple Inc. Stock Quote</title></head>
<body>
<table class="body-table-wrapper">
  <tr><td>
    <table class="body-table styled-table-new is-rounded">
      <tr>
        <th>Insider Trading</th><th>Relationship</th><th>Date</th><th>Transaction</th>
        <th>Cost</th><th>#Shares</th><th>Value ($)</th><th>#Shares Total</th><th>SEC Form 4</th>
      </tr>
      <tr>
        <td> LEVINSON ARTHUR D </td><td>Director</td><td>Aug 28 '24</td><td>Sale</td>
        <td>226.68</td><td>150,000</td><td>34,002,000</td><td>4,215,533</td><td>Aug 30 04:30 PM</td>
      </tr>
      <tr><td colspan="9" class="spacer"></td></tr>
      <tr>
        <td>O'BRIEN DEIRDRE</td><td>Senior Vice President</td><td>Aug 15 '24</td><td>Sale</td>
        <td>224.45</td><td>8,119</td><td>1,822,277</td><td>128,772</td><td>Aug 19 06:30 PM</td>
      </tr>
    </table>
  </td></tr>
</table>
</body>
</html>"#;

const QUOTE_EMPTY: &str = r#"<!DOCTYPE html>
<html>
<head><title>EMPTY Stock Quote</title></head>
<body>
<table class="body-table styled-table-new is-rounded">
  <tr>
    <th>Insider Trading</th><th>Relationship</th><th>Date</th><th>Transaction</th>
    <th>Cost</th><th>#Shares</th><th>Value ($)</th><th>#Shares Total</th><th>SEC Form 4</th>
  </tr>
  <tr><td colspan="9" class="spacer"></td></tr>
</table>
</body>
</html>"#;

const EARNINGS: &str = r#"<!DOCTYPE html>
<html>
<head><title>AAPL earnings</title></head>
<body>
<div id="root"></div>
<script id="route-init-data" type="application/json">{"ticker":"AAPL","earningsData":[{"earningsDate":"2024-08-01","priceReaction":[{"day":-1,"change":0.12},{"day":1,"change":-0.68}]},{"earningsDate":"2024-05-02","priceReaction":[{"day":-1,"change":2.2},{"day":1,"change":5.98}]}]}</script>
</body>
</html>"#;

pub fn page(ticker: Option<&str>, view: Option<&str>) -> Option<String> {
    let body = match (ticker, view) {
        (Some("AAPL"), None) => QUOTE,
        (Some("AAPL"), Some("ea")) => EARNINGS,
        (Some("EMPTY"), None) => QUOTE_EMPTY,
        _ => return None,
    };
    Some(body.to_string())
}
