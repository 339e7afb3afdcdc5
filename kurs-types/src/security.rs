//! Security references used to build request URLs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::KursError;

/// Kind of security a call is made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum SecurityType {
    /// Common stock.
    #[default]
    Stock,
    /// Exchange-traded fund.
    Etf,
}

impl fmt::Display for SecurityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stock => f.write_str("stock"),
            Self::Etf => f.write_str("etf"),
        }
    }
}

/// Reporting frequency for financial statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Fiscal-year figures.
    #[default]
    Annual,
    /// Fiscal-quarter figures.
    Quarterly,
}

impl Frequency {
    /// Lowercase name as used in query parameters and field prefixes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Quarterly => "quarterly",
        }
    }
}

/// Identifies the security every call of a client is made for.
///
/// Either identifier may be absent; operations that need a missing one fail
/// with [`KursError::InvalidConfiguration`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Security {
    ticker: Option<String>,
    isin: Option<String>,
    kind: SecurityType,
}

impl Security {
    /// Build a reference from optional identifiers. Empty strings count as absent.
    #[must_use]
    pub fn new(ticker: Option<String>, isin: Option<String>, kind: SecurityType) -> Self {
        Self {
            ticker: ticker.filter(|t| !t.trim().is_empty()),
            isin: isin.filter(|i| !i.trim().is_empty()),
            kind,
        }
    }

    /// Reference a stock by ticker.
    #[must_use]
    pub fn stock(ticker: impl Into<String>) -> Self {
        Self::new(Some(ticker.into()), None, SecurityType::Stock)
    }

    /// Reference an ETF by ticker.
    #[must_use]
    pub fn etf(ticker: impl Into<String>) -> Self {
        Self::new(Some(ticker.into()), None, SecurityType::Etf)
    }

    /// Attach an ISIN.
    #[must_use]
    pub fn with_isin(mut self, isin: impl Into<String>) -> Self {
        let isin = isin.into();
        self.isin = (!isin.trim().is_empty()).then_some(isin);
        self
    }

    /// Security type tag.
    #[must_use]
    pub const fn kind(&self) -> SecurityType {
        self.kind
    }

    /// Ticker symbol.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` when no ticker was provided.
    pub fn ticker(&self) -> Result<&str, KursError> {
        self.ticker
            .as_deref()
            .ok_or_else(|| KursError::invalid_config("no ticker provided"))
    }

    /// ISIN.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` when no ISIN was provided.
    pub fn isin(&self) -> Result<&str, KursError> {
        self.isin
            .as_deref()
            .ok_or_else(|| KursError::invalid_config("no ISIN provided, please provide an ISIN"))
    }

    /// Best identifier for messages: ticker, then ISIN.
    #[must_use]
    pub fn label(&self) -> &str {
        self.ticker
            .as_deref()
            .or(self.isin.as_deref())
            .unwrap_or("<unknown>")
    }

    /// Check that the security type is one of `allowed`.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` naming the valid and the given type.
    pub fn require(&self, allowed: &[SecurityType]) -> Result<(), KursError> {
        if allowed.contains(&self.kind) {
            return Ok(());
        }
        let valid: Vec<String> = allowed.iter().map(ToString::to_string).collect();
        Err(KursError::invalid_config(format!(
            "security type {} is not supported here, valid types: {}",
            self.kind,
            valid.join(", ")
        )))
    }
}
