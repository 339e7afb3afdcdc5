const EARNINGS: &str = r#"<!DOCTYPE html>
<html>
<head><title>Apple Inc. (AAPL) Earnings Report Date | Nasdaq</title></head>
<body>
<div class="earnings-surprise">
  <h2>Quarterly Earnings Surprise Amount</h2>
  <table class="earnings-surprise__table">
    <thead>
      <tr class="earnings-surprise__header">
        <th>Fiscal Quarter End</th><th>Date Reported</th><th>Earnings Per Share*</th>
        <th>Consensus EPS* Forecast</th><th>% Surprise</th>
      </tr>
    </thead>
    <tbody class="earnings-surprise__table-body">
      <tr><th>Sep 2024</th><td>10/31/2024</td><td>1.64</td><td>1.6</td><td>2.5</td></tr>
      <tr><th>Jun 2024</th><td>08/01/2024</td><td>1.4</td><td>1.35</td><td>3.7</td></tr>
      <tr><th>Mar 2024</th><td>05/02/2024</td><td>1.53</td><td>1.5</td><td>2</td></tr>
    </tbody>
  </table>
</div>
<div class="earnings-forecast">
  <h2>Yearly Earnings Forecast</h2>
  <table class="earnings-forecast__table">
    <thead>
      <tr class="earnings-forecast__header">
        <th>Fiscal Year End</th><th>Consensus EPS* Forecast</th><th>High EPS* Forecast</th>
        <th>Low EPS* Forecast</th><th>Number of Estimates</th>
      </tr>
    </thead>
    <tbody class="earnings-forecast__table-body">
      <tr><th>Sep 2025</th><td>7.37</td><td>7.78</td><td>7.08</td><td>14</td></tr>
      <tr><th>Sep 2026</th><td>8.18</td><td>8.87</td><td>7.6</td><td>14</td></tr>
    </tbody>
  </table>
  <h2>Quarterly Earnings Forecast</h2>
  <table class="earnings-forecast__table">
    <thead>
      <tr class="earnings-forecast__header">
        <th>Fiscal Quarter End</th><th>Consensus EPS* Forecast</th><th>High EPS* Forecast</th>
        <th>Low EPS* Forecast</th><th>Number of Estimates</th>
      </tr>
    </thead>
    <tbody class="earnings-forecast__table-body">
      <tr><th>Dec 2024</th><td>2.35</td><td>2.45</td><td>2.24</td><td>9</td></tr>
      <tr><th>Mar 2025</th><td>1.61</td><td>1.7</td><td>1.52</td><td>9</td></tr>
      <tr><th>Jun 2025</th><td>1.45</td><td>1.53</td><td>1.39</td><td>8</td></tr>
    </tbody>
  </table>
</div>
</body>
</html>"#;

const EMPTY: &str = r#"<html><body>
<table class="earnings-surprise__table">
  <thead><tr class="earnings-surprise__header"><th>Fiscal Quarter End</th><th>Date Reported</th></tr></thead>
  <tbody class="earnings-surprise__table-body"></tbody>
</table>
</body></html>"#;

pub fn page(rest: &[&str]) -> Option<String> {
    let body = match rest {
        ["aapl", "earnings"] => EARNINGS,
        ["empty", "earnings"] => EMPTY,
        _ => return None,
    };
    Some(body.to_string())
}
