//! Request parameters for the Yahoo chart and fundamentals endpoints.

use chrono::{DateTime, Months, Utc};
use kurs_core::Frequency;

/// How far back the chart endpoint reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Range {
    /// Current trading day.
    #[default]
    OneDay,
    /// Five trading days.
    FiveDays,
    /// One month.
    OneMonth,
    /// Three months.
    ThreeMonths,
    /// Six months.
    SixMonths,
    /// One year.
    OneYear,
    /// Two years.
    TwoYears,
    /// Five years.
    FiveYears,
    /// Ten years.
    TenYears,
    /// Since the first trading day of the year.
    YearToDate,
    /// Full history.
    Max,
}

impl Range {
    /// Query value, e.g. `5d`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneDay => "1d",
            Self::FiveDays => "5d",
            Self::OneMonth => "1mo",
            Self::ThreeMonths => "3mo",
            Self::SixMonths => "6mo",
            Self::OneYear => "1y",
            Self::TwoYears => "2y",
            Self::FiveYears => "5y",
            Self::TenYears => "10y",
            Self::YearToDate => "ytd",
            Self::Max => "max",
        }
    }
}

/// Bar width of the chart endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interval {
    /// One minute.
    #[default]
    OneMinute,
    /// Two minutes.
    TwoMinutes,
    /// Five minutes.
    FiveMinutes,
    /// Fifteen minutes.
    FifteenMinutes,
    /// Thirty minutes.
    ThirtyMinutes,
    /// Sixty minutes.
    SixtyMinutes,
    /// Ninety minutes.
    NinetyMinutes,
    /// One hour.
    OneHour,
    /// One day.
    OneDay,
    /// Five days.
    FiveDays,
    /// One week.
    OneWeek,
    /// One month.
    OneMonth,
    /// Three months.
    ThreeMonths,
}

impl Interval {
    /// Query value, e.g. `1wk`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneMinute => "1m",
            Self::TwoMinutes => "2m",
            Self::FiveMinutes => "5m",
            Self::FifteenMinutes => "15m",
            Self::ThirtyMinutes => "30m",
            Self::SixtyMinutes => "60m",
            Self::NinetyMinutes => "90m",
            Self::OneHour => "1h",
            Self::OneDay => "1d",
            Self::FiveDays => "5d",
            Self::OneWeek => "1wk",
            Self::OneMonth => "1mo",
            Self::ThreeMonths => "3mo",
        }
    }
}

/// Which rendering of a reported value to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValueFormat {
    /// Human readable, e.g. `394.33B`.
    #[default]
    Fmt,
    /// Exact number, e.g. `394328000000`.
    Raw,
}

impl ValueFormat {
    /// Key of the value inside `reportedValue`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fmt => "fmt",
            Self::Raw => "raw",
        }
    }
}

/// Financial statement served by the fundamentals-timeseries endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statement {
    /// Income statement.
    IncomeStatement,
    /// Cash flow statement.
    CashFlow,
    /// Balance sheet.
    BalanceSheet,
    /// Income statement with the reconciliation lines.
    Financials,
}

const INCOME_STATEMENT_FIELDS: &[&str] = &[
    "TotalRevenue",
    "OperatingRevenue",
    "CostOfRevenue",
    "GrossProfit",
    "OperatingExpense",
    "SellingGeneralAndAdministration",
    "ResearchAndDevelopment",
    "OperatingIncome",
    "NetNonOperatingInterestIncomeExpense",
    "OtherIncomeExpense",
    "PretaxIncome",
    "TaxProvision",
    "NetIncomeCommonStockholders",
    "NetIncome",
    "DilutedNIAvailtoComStockholders",
    "BasicEPS",
    "DilutedEPS",
    "BasicAverageShares",
    "DilutedAverageShares",
    "TotalExpenses",
    "EBIT",
    "EBITDA",
    "NormalizedEBITDA",
    "TaxRateForCalcs",
];

const FINANCIALS_FIELDS: &[&str] = &[
    "TotalRevenue",
    "CostOfRevenue",
    "GrossProfit",
    "OperatingExpense",
    "OperatingIncome",
    "InterestIncome",
    "InterestExpense",
    "NetInterestIncome",
    "PretaxIncome",
    "TaxProvision",
    "NetIncomeCommonStockholders",
    "NetIncome",
    "NetIncomeFromContinuingOperationNetMinorityInterest",
    "NormalizedIncome",
    "TotalOperatingIncomeAsReported",
    "ReconciledCostOfRevenue",
    "ReconciledDepreciation",
    "TotalExpenses",
    "EBIT",
    "EBITDA",
    "NormalizedEBITDA",
    "TaxEffectOfUnusualItems",
    "TaxRateForCalcs",
];

const CASH_FLOW_FIELDS: &[&str] = &[
    "OperatingCashFlow",
    "InvestingCashFlow",
    "FinancingCashFlow",
    "EndCashPosition",
    "BeginningCashPosition",
    "ChangesInCash",
    "CapitalExpenditure",
    "IssuanceOfDebt",
    "RepaymentOfDebt",
    "RepurchaseOfCapitalStock",
    "CashDividendsPaid",
    "StockBasedCompensation",
    "DepreciationAndAmortization",
    "ChangeInWorkingCapital",
    "NetIncomeFromContinuingOperations",
    "IncomeTaxPaidSupplementalData",
    "InterestPaidSupplementalData",
    "FreeCashFlow",
];

const BALANCE_SHEET_FIELDS: &[&str] = &[
    "TotalAssets",
    "CurrentAssets",
    "CashAndCashEquivalents",
    "CashCashEquivalentsAndShortTermInvestments",
    "Receivables",
    "Inventory",
    "NetPPE",
    "TotalNonCurrentAssets",
    "TotalLiabilitiesNetMinorityInterest",
    "CurrentLiabilities",
    "AccountsPayable",
    "CurrentDebt",
    "LongTermDebt",
    "TotalDebt",
    "NetDebt",
    "StockholdersEquity",
    "RetainedEarnings",
    "CommonStock",
    "WorkingCapital",
    "InvestedCapital",
    "TangibleBookValue",
    "TotalCapitalization",
    "ShareIssued",
    "OrdinarySharesNumber",
];

impl Statement {
    /// Fields requested for this statement, without the frequency prefix.
    #[must_use]
    pub const fn fields(self) -> &'static [&'static str] {
        match self {
            Self::IncomeStatement => INCOME_STATEMENT_FIELDS,
            Self::CashFlow => CASH_FLOW_FIELDS,
            Self::BalanceSheet => BALANCE_SHEET_FIELDS,
            Self::Financials => FINANCIALS_FIELDS,
        }
    }

    /// Fields charted when the caller does not pick any.
    #[must_use]
    pub const fn headline_fields(self) -> &'static [&'static str] {
        match self {
            Self::IncomeStatement | Self::Financials => &[
                "TotalRevenue",
                "EBITDA",
                "TotalExpenses",
                "NetIncomeCommonStockholders",
                "NetIncome",
            ],
            Self::CashFlow => &["OperatingCashFlow", "FreeCashFlow"],
            Self::BalanceSheet => &["TotalAssets", "TotalDebt"],
        }
    }

    /// Comma separated `type` query value, every field prefixed with the
    /// frequency (`annualTotalRevenue,...`).
    #[must_use]
    pub fn query_types(self, frequency: Frequency) -> String {
        self.fields()
            .iter()
            .map(|f| format!("{}{f}", frequency.as_str()))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Parameters of a fundamentals-timeseries call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundamentalsRequest {
    /// Annual or quarterly figures.
    pub frequency: Frequency,
    /// Formatted or raw values.
    pub format: ValueFormat,
    /// Start of the reporting window.
    pub period1: DateTime<Utc>,
    /// End of the reporting window.
    pub period2: DateTime<Utc>,
}

impl Default for FundamentalsRequest {
    /// Annual, formatted, the last five years (the longest window the
    /// endpoint serves).
    fn default() -> Self {
        let now = Utc::now();
        Self {
            frequency: Frequency::Annual,
            format: ValueFormat::Fmt,
            period1: now.checked_sub_months(Months::new(60)).unwrap_or(now),
            period2: now,
        }
    }
}

impl FundamentalsRequest {
    /// Quarterly figures over the default window.
    #[must_use]
    pub fn quarterly() -> Self {
        Self {
            frequency: Frequency::Quarterly,
            ..Self::default()
        }
    }

    /// Same request with raw values.
    #[must_use]
    pub const fn raw(mut self) -> Self {
        self.format = ValueFormat::Raw;
        self
    }

    /// Same request over `[period1, period2]`.
    #[must_use]
    pub const fn between(mut self, period1: DateTime<Utc>, period2: DateTime<Utc>) -> Self {
        self.period1 = period1;
        self.period2 = period2;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_types_are_prefixed() {
        let q = Statement::BalanceSheet.query_types(Frequency::Quarterly);
        assert!(q.starts_with("quarterlyTotalAssets,quarterlyCurrentAssets"));
        assert_eq!(q.split(',').count(), Statement::BalanceSheet.fields().len());
    }

    #[test]
    fn headline_fields_are_requested() {
        for s in [
            Statement::IncomeStatement,
            Statement::CashFlow,
            Statement::BalanceSheet,
            Statement::Financials,
        ] {
            for f in s.headline_fields() {
                assert!(s.fields().contains(f), "{s:?} does not request {f}");
            }
        }
    }

    #[test]
    fn default_window_is_five_years() {
        let r = FundamentalsRequest::default();
        let days = (r.period2 - r.period1).num_days();
        assert!((1825..=1827).contains(&days), "{days}");
        assert_eq!(r.format, ValueFormat::Fmt);
        assert_eq!(FundamentalsRequest::quarterly().raw().format, ValueFormat::Raw);
    }
}
