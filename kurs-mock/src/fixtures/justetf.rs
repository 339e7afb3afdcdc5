const PROFILE: &str = r##"<!DOCTYPE html>
<html>
<head><title>iShares Core MSCI World UCITS ETF USD (Acc) | EUNL | IE00B4L5Y983</title></head>
<body>
<div class="container">
  <h1>iShares Core MSCI World UCITS ETF USD (Acc)</h1>
  <div class="identifier">
    <span id="etf-first-id">IE00B4L5Y983</span>
    <span id="etf-second-id">A0RPWH</span>
  </div>

  <div class="row">
    <div class="col-xs-7">
      <span class="val">EUR</span> <span class="val">98.45</span>
      <div class="vallabel">18.10.24 17:35 XETRA</div>
    </div>
    <div class="col-xs-5">
      <span class="val">+0.52</span> <span class="val">+0.53%</span>
    </div>
    <div class="col-xs-12 col-md-6">
      <span class="vallabel">Buy/Sell</span> <span class="val">98.44 | 98.46</span>
      <span class="vallabel">Spread</span> <span class="val">0.02%</span>
    </div>
  </div>

  <div class="data-overview mt-4 mb-3">
    <div class="row">
      <div class="vallabel">Fund size</div>
      <div class="val">EUR 84,302 m</div>
    </div>
    <div class="row">
      <div class="vallabel">Total expense ratio</div>
      <div class="val">0.20% p.a.</div>
    </div>
    <div class="row">
      <div class="vallabel">Replication</div>
      <div class="val">Physical (Full replication)</div>
    </div>
  </div>

  <div id="etf-description">
    The iShares Core MSCI World UCITS ETF USD (Acc) seeks to track the MSCI World index.
  </div>

  <div id="basics">
    <table class="table etf-data-table">
      <tbody>
        <tr><td>Fund size</td><td> EUR 84,302 m </td></tr>
        <tr><td>Fund domicile</td><td>Ireland</td></tr>
        <tr><td>Legal structure</td><td>ETF</td></tr>
        <tr><td>Replication</td><td>Physical</td></tr>
      </tbody>
    </table>
  </div>

  <div id="holdings">
    <h3>Top 10 Holdings</h3>
    <p>Weight of top 10 holdings out of 1,425</p>
    <table class="table mobile-table">
      <tbody>
        <tr><td>Apple</td><td>5.13%</td></tr>
        <tr><td>NVIDIA Corp.</td><td>4.68%</td></tr>
        <tr><td>Microsoft</td><td>4.27%</td></tr>
      </tbody>
    </table>
    <h3>Countries</h3>
    <table class="table mobile-table">
      <tbody>
        <tr><td>United States</td><td>71.88%</td></tr>
        <tr><td>Japan</td><td>5.40%</td></tr>
      </tbody>
    </table>
    <h3>Sectors</h3>
    <table class="table mobile-table">
      <tbody>
        <tr><td>Technology</td><td>26.33%</td></tr>
        <tr><td>Financials</td><td>14.89%</td></tr>
        <tr><td>Health Care</td><td>11.06%</td></tr>
        <tr><td>Other</td><td>47.72%</td></tr>
      </tbody>
    </table>
  </div>
</div>
</body>
</html>"##;

const PROFILE_EMPTY: &str = r##"<!DOCTYPE html>
<html>
<head><title>Unlisted fund | EMPTY</title></head>
<body>
<div class="container">
  <div class="data-overview mt-4 mb-3"></div>
  <div id="basics">
    <table class="table etf-data-table"><tbody></tbody></table>
  </div>
  <div id="holdings">
    <h3>Top 10 Holdings</h3>
    <table class="table mobile-table"><tbody></tbody></table>
    <h3>Countries</h3>
    <table class="table mobile-table"><tbody></tbody></table>
    <h3>Sectors</h3>
    <table class="table mobile-table"><tbody></tbody></table>
  </div>
</div>
</body>
</html>"##;

pub fn page(isin: Option<&str>) -> Option<String> {
    match isin {
        Some("IE00B4L5Y983") => Some(PROFILE.to_string()),
        Some("EMPTY") => Some(PROFILE_EMPTY.to_string()),
        _ => None,
    }
}
