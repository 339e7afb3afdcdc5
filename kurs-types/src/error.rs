use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the kurs workspace.
///
/// Every site interface reports failures through these variants so callers can
/// branch on the kind of failure without knowing which site produced it.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum KursError {
    /// The remote answered with a non-200 status (after rate-limit retries) or
    /// the request never completed.
    #[error("fetch failed for {url}{}: {reason}", status_suffix(.status))]
    FetchFailed {
        /// Requested URL.
        url: String,
        /// HTTP status when one was received; `None` for transport failures.
        status: Option<u16>,
        /// Human-readable cause.
        reason: String,
    },

    /// The expected anchor or structure is absent from the document.
    #[error("unexpected page structure: {what}")]
    ShapeMismatch {
        /// Description of what could not be located.
        what: String,
    },

    /// The anchor was found but holds no data rows for the symbol.
    #[error("no {what} data for {symbol}")]
    NoDataForSymbol {
        /// Ticker or ISIN the call was made for.
        symbol: String,
        /// Dataset that came back empty, e.g. "dividend".
        what: String,
    },

    /// A raw cell could not be converted to the requested representation.
    #[error("cannot parse {input:?} as {expected}")]
    NormalizationFailed {
        /// Original cell text.
        input: String,
        /// Target representation, e.g. "number" or "date".
        expected: String,
    },

    /// The call is not valid for the configured security (wrong type,
    /// missing ticker or ISIN) or the client configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A column requested by name does not exist in the table.
    #[error("field {field:?} does not exist, available fields: {available:?}")]
    MissingField {
        /// Requested column.
        field: String,
        /// Columns present in the table.
        available: Vec<String>,
    },
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

impl KursError {
    /// Helper: build a `FetchFailed` error.
    pub fn fetch_failed(
        url: impl Into<String>,
        status: Option<u16>,
        reason: impl Into<String>,
    ) -> Self {
        Self::FetchFailed {
            url: url.into(),
            status,
            reason: reason.into(),
        }
    }

    /// Helper: build a `ShapeMismatch` error.
    pub fn shape(what: impl Into<String>) -> Self {
        Self::ShapeMismatch { what: what.into() }
    }

    /// Helper: build a `NoDataForSymbol` error.
    pub fn no_data(symbol: impl Into<String>, what: impl Into<String>) -> Self {
        Self::NoDataForSymbol {
            symbol: symbol.into(),
            what: what.into(),
        }
    }

    /// Helper: build a `NormalizationFailed` error.
    pub fn normalization(input: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::NormalizationFailed {
            input: input.into(),
            expected: expected.into(),
        }
    }

    /// Helper: build an `InvalidConfiguration` error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Helper: build a `MissingField` error.
    pub fn missing_field(field: impl Into<String>, available: &[String]) -> Self {
        Self::MissingField {
            field: field.into(),
            available: available.to_vec(),
        }
    }

    /// HTTP status attached to a `FetchFailed` error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::FetchFailed { status, .. } => *status,
            _ => None,
        }
    }

    /// Returns true for fetch-level failures (network or HTTP status).
    #[must_use]
    pub const fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::FetchFailed { .. })
    }

    /// Returns true if the remote kept answering 429 until retries ran out.
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self.status(), Some(429))
    }
}
