//! Immutable calendar day value.
//!
//! A [`DateValue`] is built once from some input and never changes. Arithmetic
//! (`add`, `first_of`, `last_of`) returns a fresh value. Input that cannot be
//! read as a date produces the invalid variant instead of an error; it formats
//! as [`INVALID_DATE`] and stays invalid through every transformation.

use std::cmp::Ordering;
use std::fmt;

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime};

use super::parse::parse_day;
use crate::clock::Clock;
use crate::granularity::{Granularity, Unit};

/// Canonical text of the invalid variant.
pub const INVALID_DATE: &str = "Invalid Date";

const DAYS_PER_WEEK: i64 = 7;

/// What a [`DateValue`] was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource {
    /// No input: today.
    Now,
    /// Copied from another `DateValue`.
    Day,
    /// Null marker or unreadable input.
    Invalid,
    /// A native date/time, including the results of arithmetic.
    Native,
    /// A date string.
    Text,
}

/// Inputs accepted by [`DateValue::parse`].
#[derive(Debug, Clone, Copy)]
pub enum DateInput<'a> {
    Now,
    Day(&'a DateValue),
    Null,
    Native(NaiveDateTime),
    Text(&'a str),
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(s: &'a str) -> Self {
        DateInput::Text(s)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(s: &'a String) -> Self {
        DateInput::Text(s)
    }
}

impl<'a> From<Option<&'a str>> for DateInput<'a> {
    fn from(s: Option<&'a str>) -> Self {
        s.map_or(DateInput::Null, DateInput::Text)
    }
}

impl<'a> From<&'a DateValue> for DateInput<'a> {
    fn from(v: &'a DateValue) -> Self {
        DateInput::Day(v)
    }
}

impl From<NaiveDateTime> for DateInput<'_> {
    fn from(dt: NaiveDateTime) -> Self {
        DateInput::Native(dt)
    }
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(d: NaiveDate) -> Self {
        DateInput::Native(d.and_time(chrono::NaiveTime::MIN))
    }
}

/// A calendar day truncated to day precision, or the invalid sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateValue {
    source: DateSource,
    day: Option<NaiveDate>,
    /// The input as given, kept for diagnostics.
    arg: Option<String>,
    canonical: String,
}

impl DateValue {
    /// Build a value from any accepted input. Never fails.
    pub fn parse<'a>(input: impl Into<DateInput<'a>>) -> Self {
        match input.into() {
            DateInput::Now => Self::from_day(DateSource::Now, Local::now().date_naive(), None),
            DateInput::Day(other) => Self {
                source: DateSource::Day,
                day: other.day,
                arg: other.arg.clone(),
                canonical: other.canonical.clone(),
            },
            DateInput::Null => Self::invalid(None),
            DateInput::Native(dt) => Self::from_day(DateSource::Native, dt.date(), None),
            DateInput::Text(text) => match parse_day(text) {
                Some(day) => Self::from_day(DateSource::Text, day, Some(text.to_string())),
                None => Self::invalid(Some(text.to_string())),
            },
        }
    }

    /// Today according to the system clock.
    pub fn now() -> Self {
        Self::parse(DateInput::Now)
    }

    /// Today according to `clock`.
    pub fn today(clock: &dyn Clock) -> Self {
        Self::from_day(DateSource::Now, clock.today(), None)
    }

    pub fn invalid(arg: Option<String>) -> Self {
        Self {
            source: DateSource::Invalid,
            day: None,
            arg,
            canonical: INVALID_DATE.to_string(),
        }
    }

    fn from_day(source: DateSource, day: NaiveDate, arg: Option<String>) -> Self {
        Self {
            source,
            day: Some(day),
            arg,
            canonical: format_day(day, Granularity::Day),
        }
    }

    fn derived(day: Option<NaiveDate>) -> Self {
        match day {
            Some(day) => Self::from_day(DateSource::Native, day, None),
            None => Self::invalid(None),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn source(&self) -> DateSource {
        self.source
    }

    /// The calendar day, `None` for the invalid variant.
    pub fn day(&self) -> Option<NaiveDate> {
        self.day
    }

    pub fn arg(&self) -> Option<&str> {
        self.arg.as_deref()
    }

    pub fn is_invalid(&self) -> bool {
        self.day.is_none()
    }

    pub fn year(&self) -> Option<i32> {
        self.day.map(|d| d.year())
    }

    /// Zero-based month index.
    pub fn month0(&self) -> Option<u32> {
        self.day.map(|d| d.month0())
    }

    /// `YYYY`, `YYYY-MM` or `YYYY-MM-DD`; [`INVALID_DATE`] when invalid.
    pub fn format(&self, granularity: Granularity) -> String {
        match self.day {
            Some(_) if granularity == Granularity::Day => self.canonical.clone(),
            Some(day) => format_day(day, granularity),
            None => INVALID_DATE.to_string(),
        }
    }

    /// `format(granularity)` for valid values, `None` otherwise.
    pub fn format_valid(&self, granularity: Granularity) -> Option<String> {
        self.day.map(|day| format_day(day, granularity))
    }

    // ── Arithmetic ───────────────────────────────────────────────────

    /// Shift by `offset` units; `None` is a zero shift.
    ///
    /// Month and year shifts keep the day of month and let overflow roll into
    /// the following month, so Jan 31 + 1 month lands in early March.
    pub fn add(&self, offset: impl Into<Option<i64>>, unit: Unit) -> Self {
        let offset = offset.into().unwrap_or(0);
        let shifted = self.day.and_then(|day| match unit {
            Unit::Day => day.checked_add_signed(Duration::try_days(offset)?),
            Unit::Week => {
                day.checked_add_signed(Duration::try_days(offset.checked_mul(DAYS_PER_WEEK)?)?)
            }
            Unit::Month => {
                let total = (i64::from(day.year()) * 12 + i64::from(day.month0()))
                    .checked_add(offset)?;
                let year = i32::try_from(total.div_euclid(12)).ok()?;
                let month0 = u32::try_from(total.rem_euclid(12)).ok()?;
                rolled_over(year, month0 + 1, day.day())
            }
            Unit::Year => {
                let year = i32::try_from(i64::from(day.year()).checked_add(offset)?).ok()?;
                rolled_over(year, day.month(), day.day())
            }
        });
        Self::derived(shifted)
    }

    /// First day of the containing week (Sunday), month or year.
    pub fn first_of(&self, unit: Unit) -> Self {
        Self::derived(self.day.and_then(|day| first_of(day, unit)))
    }

    /// Last day of the containing week (Saturday), month or year.
    pub fn last_of(&self, unit: Unit) -> Self {
        let last = self.day.and_then(|day| {
            let first = first_of(day, unit)?;
            match unit {
                Unit::Day => Some(first),
                Unit::Week => first.checked_add_signed(Duration::days(DAYS_PER_WEEK - 1)),
                Unit::Month => {
                    let next = if first.month() == 12 {
                        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
                    } else {
                        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
                    };
                    next?.pred_opt()
                }
                Unit::Year => NaiveDate::from_ymd_opt(first.year(), 12, 31),
            }
        });
        Self::derived(last)
    }

    /// Calendar order of two valid values; `None` if either is invalid.
    pub fn cmp_day(&self, other: &DateValue) -> Option<Ordering> {
        Some(self.day?.cmp(&other.day?))
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

fn first_of(day: NaiveDate, unit: Unit) -> Option<NaiveDate> {
    match unit {
        Unit::Day => Some(day),
        Unit::Week => day.checked_sub_signed(Duration::days(i64::from(
            day.weekday().num_days_from_sunday(),
        ))),
        Unit::Month => day.with_day(1),
        Unit::Year => NaiveDate::from_ymd_opt(day.year(), 1, 1),
    }
}

/// `year-month-day`, with days past the end of the month carried forward.
fn rolled_over(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_signed(Duration::days(i64::from(day) - 1))
}

fn format_day(day: NaiveDate, granularity: Granularity) -> String {
    match granularity {
        Granularity::Day => format!("{:04}-{:02}-{:02}", day.year(), day.month(), day.day()),
        Granularity::Month => format!("{:04}-{:02}", day.year(), day.month()),
        Granularity::Year => format!("{:04}", day.year()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn day(s: &str) -> DateValue {
        DateValue::parse(s)
    }

    #[test]
    fn formats_at_each_granularity() {
        let v = day("2024-06-05");
        assert_eq!(v.format(Granularity::Day), "2024-06-05");
        assert_eq!(v.format(Granularity::Month), "2024-06");
        assert_eq!(v.format(Granularity::Year), "2024");
        assert_eq!(v.to_string(), "2024-06-05");
    }

    #[test]
    fn unparseable_input_is_invalid_and_keeps_its_argument() {
        let v = day("next tuesday");
        assert!(v.is_invalid());
        assert_eq!(v.source(), DateSource::Invalid);
        assert_eq!(v.arg(), Some("next tuesday"));
        assert_eq!(v.format(Granularity::Month), INVALID_DATE);

        let null = DateValue::parse(DateInput::Null);
        assert!(null.is_invalid());
        assert_eq!(null.to_string(), INVALID_DATE);
    }

    #[test]
    fn invalid_is_terminal() {
        let v = day("nope");
        assert!(v.add(3, Unit::Day).is_invalid());
        assert!(v.first_of(Unit::Month).is_invalid());
        assert!(v.last_of(Unit::Year).is_invalid());
    }

    #[test]
    fn datetime_text_is_truncated_to_the_day() {
        let v = day("2024-06-15 18:30:12");
        assert_eq!(v.source(), DateSource::Text);
        assert_eq!(v.to_string(), "2024-06-15");
    }

    #[test]
    fn clone_from_another_value_keeps_day_and_marks_source() {
        let original = day("2024-06-15");
        let copy = DateValue::parse(&original);
        assert_eq!(copy.source(), DateSource::Day);
        assert_eq!(copy.day(), original.day());
        assert_eq!(copy.arg(), Some("2024-06-15"));
    }

    #[test]
    fn native_datetime_drops_time() {
        let dt = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        let v = DateValue::parse(dt);
        assert_eq!(v.source(), DateSource::Native);
        assert_eq!(v.to_string(), "2024-06-15");
    }

    #[test]
    fn add_days_and_weeks() {
        let v = day("2024-06-15");
        assert_eq!(v.add(-1, Unit::Day).to_string(), "2024-06-14");
        assert_eq!(v.add(-30, Unit::Day).to_string(), "2024-05-16");
        assert_eq!(v.add(2, Unit::Week).to_string(), "2024-06-29");
        assert_eq!(v.add(None, Unit::Month).to_string(), "2024-06-15");
    }

    #[test]
    fn month_and_year_shifts_roll_over() {
        assert_eq!(day("2024-01-31").add(1, Unit::Month).to_string(), "2024-03-02");
        assert_eq!(day("2023-01-31").add(1, Unit::Month).to_string(), "2023-03-03");
        assert_eq!(day("2024-02-29").add(1, Unit::Year).to_string(), "2025-03-01");
        assert_eq!(day("2024-03-15").add(-3, Unit::Month).to_string(), "2023-12-15");
        assert_eq!(day("2024-06-15").add(-1, Unit::Year).to_string(), "2023-06-15");
    }

    #[test]
    fn first_and_last_of_periods() {
        // 2024-06-15 is a Saturday
        let v = day("2024-06-15");
        assert_eq!(v.first_of(Unit::Week).to_string(), "2024-06-09");
        assert_eq!(v.last_of(Unit::Week).to_string(), "2024-06-15");
        assert_eq!(v.first_of(Unit::Month).to_string(), "2024-06-01");
        assert_eq!(v.last_of(Unit::Month).to_string(), "2024-06-30");
        assert_eq!(v.first_of(Unit::Year).to_string(), "2024-01-01");
        assert_eq!(v.last_of(Unit::Year).to_string(), "2024-12-31");
        assert_eq!(v.first_of(Unit::Day), v.last_of(Unit::Day));
        assert_eq!(day("2024-02-10").last_of(Unit::Month).to_string(), "2024-02-29");
        assert_eq!(day("2024-12-03").last_of(Unit::Month).to_string(), "2024-12-31");
    }

    #[test]
    fn today_comes_from_the_clock() {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        let v = DateValue::today(&clock);
        assert_eq!(v.source(), DateSource::Now);
        assert_eq!(v.to_string(), "2024-06-15");
    }

    #[test]
    fn valid_values_order_by_day() {
        let early = day("2024-06-03");
        let late = DateValue::parse("2024/06/10 09:00");
        assert_eq!(early.cmp_day(&late), Some(Ordering::Less));
        assert_eq!(late.cmp_day(&DateValue::parse(&late)), Some(Ordering::Equal));
        assert_eq!(early.cmp_day(&day("later")), None);
    }

    #[test]
    fn year_and_zero_based_month() {
        let v = day("2024-06-15");
        assert_eq!(v.year(), Some(2024));
        assert_eq!(v.month0(), Some(5));
        assert_eq!(day("x").year(), None);
    }
}
