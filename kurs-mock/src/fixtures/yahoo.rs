const CHART: &str = r#"{"chart":{"result":[{"meta":{"currency":"USD","symbol":"AAPL","exchangeName":"NMS","fullExchangeName":"NasdaqGS","instrumentType":"EQUITY","regularMarketPrice":235.0,"timezone":"EDT","exchangeTimezoneName":"America/New_York","currentTradingPeriod":{"pre":{"timezone":"EDT","start":1729238400,"end":1729258200,"gmtoffset":-14400},"regular":{"timezone":"EDT","start":1729258200,"end":1729281600,"gmtoffset":-14400},"post":{"timezone":"EDT","start":1729281600,"end":1729296000,"gmtoffset":-14400}},"dataGranularity":"1m","range":"1d"},"timestamp":[1729258200,1729258260,1729258320],"indicators":{"quote":[{"volume":[1523011,402183,null],"close":[235.1,235.3,null],"open":[236.18,235.1,null],"high":[236.18,235.42,null],"low":[234.9,235.02,null]}]}}],"error":null}}"#;

const CHART_EMPTY: &str = r#"{"chart":{"result":[{"meta":{"currency":"USD","symbol":"EMPTY","exchangeName":"NMS","instrumentType":"EQUITY","timezone":"EDT","exchangeTimezoneName":"America/New_York","currentTradingPeriod":{"pre":{"timezone":"EDT","start":1729238400,"end":1729258200,"gmtoffset":-14400},"regular":{"timezone":"EDT","start":1729258200,"end":1729281600,"gmtoffset":-14400},"post":{"timezone":"EDT","start":1729281600,"end":1729296000,"gmtoffset":-14400}}},"indicators":{"quote":[{}]}}],"error":null}}"#;

/// Yearly values (oldest first) of every fundamentals field the fixtures know.
const FUNDAMENTALS: &[(&str, [Option<i64>; 3])] = &[
    ("TotalRevenue", [Some(394_328_000_000), Some(383_285_000_000), Some(391_035_000_000)]),
    ("TotalExpenses", [Some(274_891_000_000), Some(268_984_000_000), Some(267_819_000_000)]),
    ("EBITDA", [None, Some(125_820_000_000), Some(134_661_000_000)]),
    ("NetIncome", [Some(99_803_000_000), Some(96_995_000_000), Some(93_736_000_000)]),
    (
        "NetIncomeCommonStockholders",
        [Some(99_803_000_000), Some(96_995_000_000), Some(93_736_000_000)],
    ),
    ("OperatingCashFlow", [Some(122_151_000_000), Some(110_543_000_000), Some(118_254_000_000)]),
    ("FreeCashFlow", [Some(111_443_000_000), Some(99_584_000_000), Some(108_807_000_000)]),
    ("TotalAssets", [Some(352_755_000_000), Some(352_583_000_000), Some(364_980_000_000)]),
    ("TotalDebt", [Some(132_480_000_000), Some(123_930_000_000), Some(119_059_000_000)]),
    ("TaxRateForCalcs", [None, None, None]),
];

const ANNUAL_DATES: [&str; 3] = ["2022-09-30", "2023-09-30", "2024-09-28"];
const QUARTERLY_DATES: [&str; 3] = ["2024-03-30", "2024-06-29", "2024-09-28"];

fn fmt_billions(raw: i64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let b = raw as f64 / 1e9;
    format!("{b:.2}B")
}

fn timeseries_item(kind: &str, dates: [&str; 3], values: &[Option<i64>; 3], scale: i64) -> String {
    let meta = format!(r#""meta":{{"symbol":["AAPL"],"type":["{kind}"]}}"#);
    if values.iter().all(Option::is_none) {
        return format!("{{{meta}}}");
    }
    let points = dates
        .iter()
        .zip(values)
        .map(|(date, v)| match v {
            Some(v) => {
                let raw = v / scale;
                format!(
                    r#"{{"dataId":20100,"asOfDate":"{date}","periodType":"12M","currencyCode":"USD","reportedValue":{{"raw":{raw},"fmt":"{}"}}}}"#,
                    fmt_billions(raw)
                )
            }
            None => "null".to_string(),
        })
        .collect::<Vec<_>>()
        .join(",");
    format!(r#"{{{meta},"timestamp":[1664496000,1696032000,1727481600],"{kind}":[{points}]}}"#)
}

pub fn chart(rest: &[&str]) -> Option<String> {
    match rest {
        ["chart", "AAPL"] => Some(CHART.to_string()),
        ["chart", "EMPTY"] => Some(CHART_EMPTY.to_string()),
        _ => None,
    }
}

/// Answer only the requested `types`, as the real endpoint does.
pub fn fundamentals(rest: &[&str], types: &str) -> Option<String> {
    let symbol = match rest {
        [symbol] => *symbol,
        _ => return None,
    };
    let items = match symbol {
        "AAPL" => types
            .split(',')
            .filter_map(|requested| {
                let (dates, scale, field) = if let Some(f) = requested.strip_prefix("annual") {
                    (ANNUAL_DATES, 1, f)
                } else if let Some(f) = requested.strip_prefix("quarterly") {
                    (QUARTERLY_DATES, 4, f)
                } else {
                    return None;
                };
                FUNDAMENTALS
                    .iter()
                    .find(|(name, _)| *name == field)
                    .map(|(_, values)| timeseries_item(requested, dates, values, scale))
            })
            .collect::<Vec<_>>(),
        "EMPTY" => Vec::new(),
        _ => return None,
    };
    Some(format!(
        r#"{{"timeseries":{{"result":[{}],"error":null}}}}"#,
        items.join(",")
    ))
}

fn financials_grid(title: &str, rows: &[(&str, [&str; 4])]) -> String {
    let body = rows
        .iter()
        .map(|(name, values)| {
            let cells = values
                .iter()
                .map(|v| format!(r#"<div class="column yf-t22klz">{v}</div>"#))
                .collect::<String>();
            format!(
                r#"<div class="row lv-0 yf-t22klz"><div class="column sticky yf-t22klz"><button class="btn"></button><div class="rowTitle yf-t22klz" title="{name}">{name}</div></div>{cells}</div>"#
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Apple Inc. (AAPL) {title} - Yahoo Finance</title></head>
<body>
<section data-testid="qsp-financial">
  <h2>{title}</h2>
  <div class="tableContainer yf-9ft13">
    <div class="table yf-9ft13">
      <div class="tableHeader yf-9ft13">
        <div class="row yf-9ft13"><div class="column sticky yf-9ft13">Breakdown</div><div class="column yf-9ft13">TTM</div><div class="column yf-9ft13">9/30/2024</div><div class="column yf-9ft13">9/30/2023</div><div class="column yf-9ft13">9/30/2022</div></div>
      </div>
      <div class="tableBody yf-9ft13">
{body}
      </div>
    </div>
  </div>
</section>
</body>
</html>"#
    )
}

const OPTIONS: &str = r#"<!DOCTYPE html>
<html>
<body>
<section data-testid="options-list-table">
  <h3>Calls</h3>
  <table class="yf-1m5g8yo">
    <thead><tr><th>Contract Name</th><th>Last Trade Date (EDT)</th><th>Strike</th><th>Last Price</th><th>Volume</th><th>Implied Volatility</th></tr></thead>
    <tbody>
      <tr><td>AAPL241025C00230000</td><td>10/18/2024 3:59 PM</td><td>230.00</td><td>6.51</td><td>5,372</td><td>24.37%</td></tr>
      <tr><td>AAPL241025C00235000</td><td>10/18/2024 3:59 PM</td><td>235.00</td><td>2.88</td><td>21,410</td><td>21.90%</td></tr>
    </tbody>
  </table>
  <h3>Puts</h3>
  <table class="yf-1m5g8yo">
    <thead><tr><th>Contract Name</th><th>Last Trade Date (EDT)</th><th>Strike</th><th>Last Price</th><th>Volume</th><th>Implied Volatility</th></tr></thead>
    <tbody>
      <tr><td>AAPL241025P00225000</td><td>10/18/2024 3:58 PM</td><td>225.00</td><td>0.62</td><td>3,012</td><td>25.10%</td></tr>
      <tr><td>AAPL241025P00230000</td><td>10/18/2024 3:59 PM</td><td>230.00</td><td>1.40</td><td>8,774</td><td>23.02%</td></tr>
      <tr><td>AAPL241025P00235000</td><td>10/18/2024 3:59 PM</td><td>235.00</td><td>3.35</td><td>6,120</td><td>21.45%</td></tr>
    </tbody>
  </table>
</section>
</body>
</html>"#;

const PROFILE: &str = r#"<!DOCTYPE html>
<html>
<body>
<section data-testid="asset-profile"><h3>Apple Inc.</h3></section>
<section data-testid="key-executives">
  <header><h3>Key Executives</h3></header>
  <table>
    <thead><tr><th>Name</th><th>Title</th><th>Pay</th><th>Exercised</th><th>Year Born</th></tr></thead>
    <tbody>
      <tr><td>Mr. Timothy D. Cook</td><td>CEO &amp; Director</td><td>16.52M</td><td>--</td><td>1961</td></tr>
      <tr><td>Mr. Luca Maestri</td><td>CFO &amp; Senior VP</td><td>4.64M</td><td>--</td><td>1964</td></tr>
    </tbody>
  </table>
</section>
<section data-testid="description">
  <h3>Description</h3>
  <p>Apple Inc. designs, manufactures, and markets smartphones, personal computers, tablets, wearables, and accessories worldwide.</p>
</section>
<section data-testid="corporate-governance">
  <header><h3>Corporate Governance</h3></header>
  <div>Apple Inc.'s ISS Governance QualityScore as of October 1, 2024 is 1.</div>
</section>
</body>
</html>"#;

const HOLDERS: &str = r#"<!DOCTYPE html>
<html>
<body>
<section data-testid="holders-major-holders-table">
  <h3>Major Holders</h3>
  <table>
    <tbody>
      <tr><td>2.72%</td><td>% of Shares Held by All Insider</td></tr>
      <tr><td>61.73%</td><td>% of Shares Held by Institutions</td></tr>
      <tr><td>63.46%</td><td>% of Float Held by Institutions</td></tr>
      <tr><td>6,526</td><td>Number of Institutions Holding Shares</td></tr>
    </tbody>
  </table>
</section>
<section data-testid="holders-top-institutional-holders">
  <h3>Top Institutional Holders</h3>
  <table>
    <thead><tr><th>Holder</th><th>Shares</th><th>Date Reported</th><th>% Out</th><th>Value</th></tr></thead>
    <tbody>
      <tr><td>Vanguard Group Inc</td><td>1.34B</td><td>Jun 30, 2024</td><td>8.80%</td><td>282.06B</td></tr>
      <tr><td>Blackrock Inc.</td><td>1.04B</td><td>Jun 30, 2024</td><td>6.83%</td><td>218.91B</td></tr>
    </tbody>
  </table>
</section>
<section data-testid="holders-top-mutual-fund-holders">
  <h3>Top Mutual Fund Holders</h3>
  <table>
    <thead><tr><th>Holder</th><th>Shares</th><th>Date Reported</th><th>% Out</th><th>Value</th></tr></thead>
    <tbody>
      <tr><td>Vanguard Total Stock Market Index Fund</td><td>468.29M</td><td>Jun 30, 2024</td><td>3.08%</td><td>98.63B</td></tr>
      <tr><td>Vanguard 500 Index Fund</td><td>414.24M</td><td>Jun 30, 2024</td><td>2.72%</td><td>87.25B</td></tr>
      <tr><td>Fidelity 500 Index Fund</td><td>196.11M</td><td>May 31, 2024</td><td>1.29%</td><td>37.71B</td></tr>
    </tbody>
  </table>
</section>
</body>
</html>"#;

const HOLDERS_EMPTY: &str = r#"<!DOCTYPE html>
<html>
<body>
<section data-testid="holders-major-holders-table">
  <h3>Major Holders</h3>
  <table><tbody></tbody></table>
</section>
<section data-testid="holders-top-institutional-holders">
  <h3>Top Institutional Holders</h3>
  <table>
    <thead><tr><th>Holder</th><th>Shares</th><th>Date Reported</th><th>% Out</th><th>Value</th></tr></thead>
    <tbody></tbody>
  </table>
</section>
<section data-testid="holders-top-mutual-fund-holders">
  <h3>Top Mutual Fund Holders</h3>
  <table>
    <thead><tr><th>Holder</th><th>Shares</th><th>Date Reported</th><th>% Out</th><th>Value</th></tr></thead>
    <tbody></tbody>
  </table>
</section>
</body>
</html>"#;

const SUMMARY_EMPTY: &str = r#"<!DOCTYPE html>
<html>
<body>
<section class="container">
  <h1 class="yf-xxbei9">Empty Holdings Corp. (EMPTY)</h1>
</section>
<div data-test="left-summary-table">
  <table><tbody></tbody></table>
</div>
</body>
</html>"#;

const ANALYSIS_EMPTY: &str = r#"<!DOCTYPE html>
<html>
<body>
<section data-testid="earningsEstimate">
  <table>
    <thead><tr><th>Currency in USD</th><th>Current Qtr. (Dec 2024)</th></tr></thead>
    <tbody></tbody>
  </table>
</section>
</body>
</html>"#;

const SUMMARY: &str = r#"<!DOCTYPE html>
<html>
<body>
<section class="container">
  <h1 class="yf-xxbei9">Apple Inc. (AAPL)</h1>
  <fin-streamer data-symbol="AAPL" data-field="regularMarketPrice" value="235">235.00</fin-streamer>
  <fin-streamer data-symbol="AAPL" data-field="regularMarketChange" value="1.15">+1.15</fin-streamer>
</section>
<div data-test="left-summary-table">
  <table>
    <tbody>
      <tr><td>Previous Close</td><td data-test="PREV_CLOSE-value">233.85</td></tr>
      <tr><td>Open</td><td data-test="OPEN-value">236.18</td></tr>
      <tr><td>Market Cap (intraday)</td><td data-test="MARKET_CAP-value">3.573T</td></tr>
      <tr><td>PE Ratio (TTM)</td><td data-test="PE_RATIO-value">35.73</td></tr>
    </tbody>
  </table>
</div>
</body>
</html>"#;

const ANALYSIS: &str = r#"<!DOCTYPE html>
<html>
<body>
<section data-testid="earningsEstimate">
  <table>
    <thead><tr><th>Currency in USD</th><th>Current Qtr. (Dec 2024)</th><th>Next Qtr. (Mar 2025)</th><th>Current Year (2025)</th><th>Next Year (2026)</th></tr></thead>
    <tbody>
      <tr><td>No. of Analysts</td><td>25</td><td>23</td><td>38</td><td>37</td></tr>
      <tr><td>Avg. Estimate</td><td>2.35</td><td>1.61</td><td>7.37</td><td>8.18</td></tr>
    </tbody>
  </table>
</section>
<section data-testid="growthEstimate">
  <table>
    <thead><tr><th>Currency in USD</th><th>AAPL</th><th>S&amp;P 500</th></tr></thead>
    <tbody>
      <tr><td>Current Qtr.</td><td>5.70%</td><td>6.68%</td></tr>
    </tbody>
  </table>
</section>
</body>
</html>"#;

const KEY_STATISTICS: &str = r#"<!DOCTYPE html>
<html>
<body>
<section data-testid="qsp-statistics">
  <div class="header"><h3>Valuation Measures</h3></div>
  <div class="table-container">
    <table>
      <thead><tr><th></th><th>Current</th><th>6/30/2024</th><th>3/31/2024</th></tr></thead>
      <tbody>
        <tr><td>Market Cap</td><td>3.57T</td><td>3.22T</td><td>2.65T</td></tr>
        <tr><td>Trailing P/E</td><td>35.73</td><td>32.71</td><td>26.68</td></tr>
        <tr><td>Forward P/E</td><td>31.85</td><td>30.77</td><td>26.39</td></tr>
      </tbody>
    </table>
  </div>
</section>
<div data-testid="stats-highlight">
  <section class="card">
    <h3>Financial Highlights</h3>
    <div class="column">
      <section>
        <h3>Fiscal Year</h3>
        <table><tbody>
          <tr><td>Fiscal Year Ends</td><td>9/28/2024</td></tr>
          <tr><td>Most Recent Quarter (mrq)</td><td>9/28/2024</td></tr>
        </tbody></table>
      </section>
      <section>
        <h3>Profitability</h3>
        <table><tbody>
          <tr><td>Profit Margin</td><td> 23.97% </td></tr>
        </tbody></table>
      </section>
    </div>
  </section>
  <section class="card">
    <h3>Trading Information</h3>
    <section>
      <h3>Stock Price History</h3>
      <table><tbody>
        <tr><td>Beta (5Y Monthly)</td><td>1.24</td></tr>
        <tr><td>52 Week Change</td><td>32.14%</td></tr>
      </tbody></table>
    </section>
    <section>
      <h3>Share Statistics</h3>
      <table><tbody>
        <tr><td>Avg Vol (3 month)</td><td>53.72M</td></tr>
        <tr><td>Shares Outstanding</td><td>15.12B</td></tr>
        <tr><td>Float</td><td>15.17B</td></tr>
      </tbody></table>
    </section>
  </section>
</div>
</body>
</html>"#;

pub fn web(rest: &[&str]) -> Option<String> {
    let page = match rest {
        ["AAPL"] => SUMMARY.to_string(),
        ["AAPL", "cash-flow"] => financials_grid(
            "Cash Flow",
            &[
                ("Operating Cash Flow", ["118,254,000", "118,254,000", "110,543,000", "122,151,000"]),
                ("Free Cash Flow", ["108,807,000", "108,807,000", "99,584,000", "111,443,000"]),
            ],
        ),
        ["AAPL", "balance-sheet"] => financials_grid(
            "Balance Sheet",
            &[
                ("Total Assets", ["364,980,000", "364,980,000", "352,583,000", "352,755,000"]),
                ("Total Debt", ["119,059,000", "119,059,000", "123,930,000", "132,480,000"]),
            ],
        ),
        ["AAPL", "financials"] => financials_grid(
            "Income Statement",
            &[
                ("Total Revenue", ["391,035,000", "391,035,000", "383,285,000", "394,328,000"]),
                ("Cost of Revenue", ["210,352,000", "210,352,000", "214,137,000", "223,546,000"]),
                ("Net Income", ["93,736,000", "93,736,000", "96,995,000", "99,803,000"]),
            ],
        ),
        ["EMPTY", "financials"] => financials_grid("Income Statement", &[]),
        ["EMPTY"] => SUMMARY_EMPTY.to_string(),
        ["EMPTY", "holders"] => HOLDERS_EMPTY.to_string(),
        ["EMPTY", "analysis"] => ANALYSIS_EMPTY.to_string(),
        ["AAPL", "options"] => OPTIONS.to_string(),
        ["AAPL", "profile"] => PROFILE.to_string(),
        ["AAPL", "holders"] => HOLDERS.to_string(),
        ["AAPL", "analysis"] => ANALYSIS.to_string(),
        ["AAPL", "key-statistics"] => KEY_STATISTICS.to_string(),
        _ => return None,
    };
    Some(page)
}
