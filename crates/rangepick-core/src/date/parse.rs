//! Text forms accepted by [`DateValue`](super::DateValue).
//!
//! `YYYY`, `YYYY-MM`, `YYYY-MM-DD` (each separator may be `-` or `/`) and
//! `YYYY-MM-DD HH:MM[:SS]`. The time part is validated and then dropped.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

static DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})(?:[-/](\d{2}))?(?:[-/](\d{2}))?$").expect("static date pattern")
});

static DATETIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})[-/](\d{2})[-/](\d{2})\s(\d{2}):(\d{2})(?::(\d{2}))?$")
        .expect("static datetime pattern")
});

/// Parse a date-like string into a calendar day.
///
/// Returns `None` when the text matches neither form or names a day that
/// does not exist.
pub(crate) fn parse_day(text: &str) -> Option<NaiveDate> {
    if let Some(caps) = DATE.captures(text) {
        let year = caps[1].parse().ok()?;
        let month = caps.get(2).map_or(Some(1), |m| m.as_str().parse().ok())?;
        let day = caps.get(3).map_or(Some(1), |m| m.as_str().parse().ok())?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    let caps = DATETIME.captures(text)?;
    let date = NaiveDate::from_ymd_opt(
        caps[1].parse().ok()?,
        caps[2].parse().ok()?,
        caps[3].parse().ok()?,
    )?;
    let seconds = caps.get(6).map_or(Some(0), |m| m.as_str().parse().ok())?;
    NaiveTime::from_hms_opt(caps[4].parse().ok()?, caps[5].parse().ok()?, seconds)?;
    Some(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn partial_forms_default_to_first() {
        assert_eq!(parse_day("2024"), Some(ymd(2024, 1, 1)));
        assert_eq!(parse_day("2024-06"), Some(ymd(2024, 6, 1)));
        assert_eq!(parse_day("2024/06/15"), Some(ymd(2024, 6, 15)));
    }

    #[test]
    fn datetime_drops_the_time() {
        assert_eq!(parse_day("2024-06-15 13:45"), Some(ymd(2024, 6, 15)));
        assert_eq!(parse_day("2024-06-15 23:59:59"), Some(ymd(2024, 6, 15)));
    }

    #[test]
    fn rejects_malformed_and_impossible_dates() {
        assert_eq!(parse_day(""), None);
        assert_eq!(parse_day("invalid"), None);
        assert_eq!(parse_day("24-06-15"), None);
        assert_eq!(parse_day("2024-13-01"), None);
        assert_eq!(parse_day("2024-02-30"), None);
        assert_eq!(parse_day("2024-06-15 25:00"), None);
        assert_eq!(parse_day("2024-06-15T10:00"), None);
    }
}
