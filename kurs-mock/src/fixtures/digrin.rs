const DIVIDEND: &str = r#"<!DOCTYPE html>
<html>
<head><title>Apple Inc. (AAPL) dividends | Digrin</title></head>
<body>
<div class="container">
  <h1>Apple Inc. (AAPL)</h1>
  <h2>Dividend history</h2>
  <table class="table table-striped">
    <thead>
      <tr><th>Ex-dividend date</th><th>Payment date</th><th>Dividend amount (change)</th></tr>
    </thead>
    <tbody>
      <tr><td>2024-08-12</td><td>2024-08-15</td><td>0.25 (0.00%)</td></tr>
      <tr><td>2024-05-10</td><td>2024-05-16</td><td>0.25 (4.17%)</td></tr>
    </tbody>
  </table>
</div>
</body>
</html>"#;

const EMPTY_DIVIDEND: &str = r#"<html><body>
<table class="table">
  <thead><tr><th>Ex-dividend date</th><th>Payment date</th><th>Dividend amount (change)</th></tr></thead>
  <tbody></tbody>
</table>
</body></html>"#;

const PAYOUT_RATIO: &str = r#"<html><body>
<table class="table">
  <thead><tr><th>Date</th><th>Payout ratio</th></tr></thead>
  <tbody>
    <tr><td>Sept. 28, 2024</td><td>16.25%</td></tr>
    <tr><td>June 29, 2024</td><td>15.51%</td></tr>
    <tr><td>March 30, 2024</td><td>14.93%</td></tr>
  </tbody>
</table>
</body></html>"#;

const PRICE: &str = r#"<html><body>
<table class="table">
  <thead><tr><th>Date</th><th>Real price</th><th>Adjusted price</th></tr></thead>
  <tbody>
    <tr><td>2024-10-01</td><td>$226.21</td><td>$225.96</td></tr>
    <tr><td>2024-09-03</td><td>$222.77</td><td>$222.28</td></tr>
    <tr><td>2024-08-01</td><td>$218.36</td><td>$217.88</td></tr>
  </tbody>
</table>
</body></html>"#;

const STOCK_SPLITS: &str = r#"<html><body>
<table class="table">
  <thead><tr><th>Date</th><th>Split Ratio</th></tr></thead>
  <tbody>
    <tr><td>Aug. 31, 2020</td><td>4:1</td></tr>
    <tr><td>June 9, 2014</td><td>7:1</td></tr>
  </tbody>
</table>
</body></html>"#;

const FINANCIALS: &str = r#"<html><body>
<h3>Assets vs Liabilities</h3>
<table class="table">
  <thead><tr><th>Date</th><th>Assets</th><th>Liabilities</th></tr></thead>
  <tbody>
    <tr><td>Sept. 28, 2024</td><td>364.98 B</td><td>308.03 B</td></tr>
    <tr><td>Sept. 30, 2023</td><td>352.58 B</td><td>290.44 B</td></tr>
  </tbody>
</table>
<h3>Free Cash Flow</h3>
<table class="table">
  <thead><tr><th>Date</th><th>Free Cash Flow</th><th>Stock based compensation</th></tr></thead>
  <tbody>
    <tr><td>Sept. 28, 2024</td><td>108.81 B</td><td>11.69 B</td></tr>
    <tr><td>Sept. 30, 2023</td><td>99.58 B</td><td>?</td></tr>
  </tbody>
</table>
<h3>Net Income</h3>
<table class="table">
  <thead><tr><th>Date</th><th>Net Income</th></tr></thead>
  <tbody>
    <tr><td>Sept. 28, 2024</td><td>93.74 B</td></tr>
    <tr><td>Sept. 30, 2023</td><td>97.00 B</td></tr>
  </tbody>
</table>
<h3>Cash and Debt</h3>
<table class="table">
  <thead><tr><th>Date</th><th>Cash</th><th>Debt</th><th>Capital Lease</th></tr></thead>
  <tbody>
    <tr><td>Sept. 28, 2024</td><td>65.17 B</td><td>106.63 B</td><td>12.00 B</td></tr>
    <tr><td>Sept. 30, 2023</td><td>61.56 B</td><td>111.09 B</td><td>-</td></tr>
  </tbody>
</table>
<h3>Shares</h3>
<table class="table">
  <thead><tr><th>Date</th><th>Shares Outstanding</th></tr></thead>
  <tbody>
    <tr><td>Sept. 28, 2024</td><td>15.20 B</td></tr>
    <tr><td>Sept. 30, 2023</td><td>15.55 B</td></tr>
  </tbody>
</table>
<h3>Expenses</h3>
<table class="table">
  <thead><tr><th>Date</th><th>Capex</th><th>R&amp;D</th><th>G&amp;A</th><th>S&amp;M</th></tr></thead>
  <tbody>
    <tr><td>Sept. 28, 2024</td><td>9.45 B</td><td>31.37 B</td><td>26.10 B</td><td>?</td></tr>
    <tr><td>Sept. 30, 2023</td><td>10.96 B</td><td>29.92 B</td><td>24.93 B</td><td>?</td></tr>
  </tbody>
</table>
<h3>Cost of Revenue</h3>
<table class="table">
  <thead><tr><th>Date</th><th>Cost of Revenue</th><th>Revenue</th></tr></thead>
  <tbody>
    <tr><td>Sept. 28, 2024</td><td>210.35 B</td><td>391.04 B</td></tr>
    <tr><td>Sept. 30, 2023</td><td>214.14 B</td><td>383.29 B</td></tr>
  </tbody>
</table>
</body></html>"#;

const DGR: &str = r#"<html><body>
<table class="table">
  <thead><tr><th>Year</th><th>Dividend</th><th>Estimated Yield on Cost</th></tr></thead>
  <tbody>
    <tr><td>2025</td><td>1.04</td><td>0.45%</td></tr>
    <tr><td>2026</td><td>1.09</td><td>0.48%</td></tr>
    <tr><td>2027</td><td>1.15</td><td>0.50%</td></tr>
  </tbody>
</table>
</body></html>"#;

const EARNINGS: &str = r#"<html><body>
<table class="table">
  <thead><tr><th>Date</th><th>Actual / Estimated EPS</th><th>Revenue</th></tr></thead>
  <tbody>
    <tr><td>Jan. 30, 2025</td><td>? / 2.35</td><td>? / 124.12 B</td></tr>
    <tr><td>Oct. 31, 2024</td><td>1.64 / 1.60</td><td>94.93 B / 94.50 B</td></tr>
  </tbody>
</table>
</body></html>"#;

pub fn page(rest: &[&str]) -> Option<String> {
    let body = match rest {
        ["AAPL"] => DIVIDEND,
        ["EMPTY"] => EMPTY_DIVIDEND,
        ["AAPL", "payout_ratio"] => PAYOUT_RATIO,
        ["AAPL", "price"] => PRICE,
        ["AAPL", "stock_split"] => STOCK_SPLITS,
        ["AAPL", "financials"] => FINANCIALS,
        ["AAPL", "dgr3" | "dgr5" | "dgr10"] => DGR,
        ["AAPL", "earnings"] => EARNINGS,
        _ => return None,
    };
    Some(body.to_string())
}
