//! Convert scraped cell text into numbers and ISO dates.

use chrono::NaiveDate;
use kurs_types::KursError;

/// Cell values that stand for "no data" and normalize to `0.0`.
const NULL_SENTINELS: &[&str] = &["", "n/a", "na", "nan", "-", "_", "—", "–", "?", "--"];

const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '¥'];

const WORD_SUFFIXES: &[(&str, f64)] = &[
    ("trillion", 1e12),
    ("billion", 1e9),
    ("million", 1e6),
    ("thousand", 1e3),
];

/// Parse a human-formatted number.
///
/// Handles null sentinels (`N/A`, `-`, `?`, ... become `0.0`), currency
/// symbols, thousands separators, a trailing `%` (divides by 100), magnitude
/// suffixes (`K`, `M`, `B`, `T` or the full word) and accounting negatives in
/// parentheses.
///
/// # Errors
/// Returns `NormalizationFailed` naming the original input when what remains
/// is not a finite number.
pub fn parse_number(input: &str) -> Result<f64, KursError> {
    let fail = || KursError::normalization(input, "number");

    let mut s = input.trim();
    if NULL_SENTINELS.iter().any(|n| s.eq_ignore_ascii_case(n)) {
        return Ok(0.0);
    }

    s = s.trim_matches(|c: char| CURRENCY_SYMBOLS.contains(&c) || c.is_whitespace());
    let mut negative = false;
    if let Some(inner) = s.strip_prefix('(').and_then(|x| x.strip_suffix(')')) {
        negative = true;
        s = inner.trim();
    }

    let mut percent = false;
    if let Some(rest) = s.strip_suffix('%') {
        percent = true;
        s = rest.trim_end();
    }

    let cleaned: String = s
        .chars()
        .filter(|c| !CURRENCY_SYMBOLS.contains(c) && *c != ',' && !c.is_whitespace())
        .collect();
    let lower = cleaned.to_ascii_lowercase();

    let (body, multiplier) = split_suffix(&lower);
    let body = match body.strip_prefix('+') {
        Some(rest) => rest,
        None => body,
    };
    if body.is_empty() || !body.chars().any(|c| c.is_ascii_digit()) {
        return Err(fail());
    }

    let value: f64 = body.parse().map_err(|_| fail())?;
    let mut value = value * multiplier;
    if percent {
        value /= 100.0;
    }
    if !value.is_finite() {
        return Err(fail());
    }
    Ok(if negative { -value } else { value })
}

fn split_suffix(s: &str) -> (&str, f64) {
    for (word, mult) in WORD_SUFFIXES {
        if let Some(body) = s.strip_suffix(word) {
            return (body, *mult);
        }
    }
    let mult = match s.chars().last() {
        Some('t') => 1e12,
        Some('b') => 1e9,
        Some('m') => 1e6,
        Some('k') => 1e3,
        _ => return (s, 1.0),
    };
    (&s[..s.len() - 1], mult)
}

/// Parse a "Month[.] Day[,] Year" date such as `Dec. 31, 2023` into
/// `YYYY-MM-DD`.
///
/// # Errors
/// Returns `NormalizationFailed` for a wrong number of tokens, an unknown
/// month, a non-numeric day or year, or a date that does not exist.
pub fn parse_date(input: &str) -> Result<String, KursError> {
    let fail = || KursError::normalization(input, "date");

    let tokens: Vec<&str> = input.split_whitespace().collect();
    let [month, day, year] = tokens.as_slice() else {
        return Err(fail());
    };

    let month = month_number(month.trim_end_matches('.')).ok_or_else(fail)?;
    let day: u32 = day.trim_end_matches(',').parse().map_err(|_| fail())?;
    let year: i32 = year.parse().map_err(|_| fail())?;

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(fail)?;
    Ok(date.format("%Y-%m-%d").to_string())
}

/// Validate an ISO `YYYY-MM-DD` date, returning it unchanged.
///
/// # Errors
/// Returns `NormalizationFailed` when the text is not an ISO calendar date.
pub fn parse_iso_date(input: &str) -> Result<String, KursError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|_| KursError::normalization(input, "date"))
}

fn month_number(name: &str) -> Option<u32> {
    let n = match name.to_ascii_lowercase().as_str() {
        "jan" | "january" => 1,
        "feb" | "february" => 2,
        "mar" | "march" => 3,
        "apr" | "april" => 4,
        "may" => 5,
        "jun" | "june" => 6,
        "jul" | "july" => 7,
        "aug" | "august" => 8,
        "sep" | "sept" | "september" => 9,
        "oct" | "october" => 10,
        "nov" | "november" => 11,
        "dec" | "december" => 12,
        _ => return None,
    };
    Some(n)
}
