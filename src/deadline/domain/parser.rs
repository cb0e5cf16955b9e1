//! Deadline text parsing.
//!
//! Listings render deadlines in whatever format the page was configured with.
//! Parsing runs an ordered list of independent attempts and keeps the first
//! calendar date any of them produces.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::{Captures, Regex};
use std::str::FromStr;
use std::sync::LazyLock;

type ParseAttempt = fn(&str) -> Option<NaiveDate>;

const PARSE_ATTEMPTS: [ParseAttempt; 4] = [
    parse_generic,
    parse_iso,
    parse_day_month_year,
    parse_month_name,
];

const GENERIC_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

const GENERIC_DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%B %d, %Y", "%d %B %Y", "%A, %B %d, %Y"];

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

// Digit runs must not extend past the captured fields.
static ISO_DATE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?:^|\D)(\d{4})-(\d{1,2})-(\d{1,2})(?:\D|$)").ok());

static DAY_MONTH_YEAR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?:^|\D)(\d{1,2})/(\d{1,2})/(\d{4})(?:\D|$)").ok());

static MONTH_NAME_DATE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)\b([a-z]{3})[a-z]*\.?\s+(\d{1,2}),?\s+(\d{4})\b").ok()
});

/// Parses free-form deadline text into a calendar date.
///
/// Attempts, in order: a generic calendar parse, `YYYY-MM-DD`, `D/M/YYYY`
/// (day first), then `Mon DD, YYYY`. Returns `None` when nothing matches or
/// the extracted numbers do not form a real date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use taskflow::deadline::domain::parse_deadline;
///
/// let march_first = NaiveDate::from_ymd_opt(2024, 3, 1);
/// assert_eq!(parse_deadline("2024-03-01"), march_first);
/// assert_eq!(parse_deadline("01/03/2024"), march_first);
/// assert_eq!(parse_deadline("Mar. 1, 2024"), march_first);
/// assert_eq!(parse_deadline("not a date"), None);
/// ```
#[must_use]
pub fn parse_deadline(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    PARSE_ATTEMPTS.iter().find_map(|attempt| attempt(trimmed))
}

fn parse_generic(text: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(text)
        .or_else(|_| DateTime::parse_from_rfc2822(text))
        .map(|timestamp| timestamp.date_naive())
        .ok()
        .or_else(|| {
            GENERIC_DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
                .map(|timestamp| timestamp.date())
        })
        .or_else(|| {
            GENERIC_DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        })
}

fn parse_iso(text: &str) -> Option<NaiveDate> {
    let captures = ISO_DATE.as_ref()?.captures(text)?;
    NaiveDate::from_ymd_opt(
        capture_number(&captures, 1)?,
        capture_number(&captures, 2)?,
        capture_number(&captures, 3)?,
    )
}

fn parse_day_month_year(text: &str) -> Option<NaiveDate> {
    let captures = DAY_MONTH_YEAR.as_ref()?.captures(text)?;
    NaiveDate::from_ymd_opt(
        capture_number(&captures, 3)?,
        capture_number(&captures, 2)?,
        capture_number(&captures, 1)?,
    )
}

fn parse_month_name(text: &str) -> Option<NaiveDate> {
    let captures = MONTH_NAME_DATE.as_ref()?.captures(text)?;
    let month = month_from_abbreviation(captures.get(1)?.as_str())?;
    NaiveDate::from_ymd_opt(
        capture_number(&captures, 3)?,
        month,
        capture_number(&captures, 2)?,
    )
}

fn month_from_abbreviation(abbreviation: &str) -> Option<u32> {
    let lowered = abbreviation.to_ascii_lowercase();
    let index = MONTH_ABBREVIATIONS
        .iter()
        .position(|candidate| *candidate == lowered)?;
    u32::try_from(index).ok().map(|zero_based| zero_based + 1)
}

fn capture_number<T: FromStr>(captures: &Captures<'_>, group: usize) -> Option<T> {
    captures.get(group)?.as_str().parse().ok()
}
