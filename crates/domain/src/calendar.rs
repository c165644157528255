// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar date primitives.
//!
//! All vacation arithmetic runs on [`CalendarDate`], a date with no time of
//! day and no time zone. Strings are converted to dates exactly once, at the
//! system boundary, through [`CalendarDate::parse`].
//!
//! ## Invariants
//!
//! - Ranges are inclusive on both ends
//! - A `DateRange` always satisfies `start <= end`
//! - Saturday and Sunday are weekend days; every other day is a workday

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::macros::format_description;
use time::{Date, Month, Weekday};

/// A calendar date (year, month, day) without time-of-day or time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(Date);

impl CalendarDate {
    /// Wraps an existing `time::Date`.
    #[must_use]
    pub const fn new(date: Date) -> Self {
        Self(date)
    }

    /// Builds a date from numeric components.
    ///
    /// # Errors
    ///
    /// Returns an error if the components do not form a valid date.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, DomainError> {
        let month: Month = Month::try_from(month).map_err(|e| DomainError::DateParseError {
            date_string: format!("{year:04}-{month:02}-{day:02}"),
            error: e.to_string(),
        })?;

        Date::from_calendar_date(year, month, day)
            .map(Self)
            .map_err(|e| DomainError::DateParseError {
                date_string: format!("{year:04}-{:02}-{day:02}", u8::from(month)),
                error: e.to_string(),
            })
    }

    /// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid `YYYY-MM-DD` date.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        if !is_iso_date_shape(value) {
            return Err(DomainError::DateParseError {
                date_string: value.to_string(),
                error: "expected YYYY-MM-DD".to_string(),
            });
        }
        Date::parse(value, format_description!("[year]-[month]-[day]"))
            .map(Self)
            .map_err(|e| DomainError::DateParseError {
                date_string: value.to_string(),
                error: e.to_string(),
            })
    }

    /// Returns the underlying `time::Date`.
    #[must_use]
    pub const fn date(self) -> Date {
        self.0
    }

    /// Returns the day of the week.
    #[must_use]
    pub const fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// Returns whether this date falls on a Saturday or Sunday.
    #[must_use]
    pub const fn is_weekend(self) -> bool {
        matches!(self.0.weekday(), Weekday::Saturday | Weekday::Sunday)
    }

    /// Returns the following day, or `None` at the end of the supported range.
    #[must_use]
    pub const fn next_day(self) -> Option<Self> {
        match self.0.next_day() {
            Some(next) => Some(Self(next)),
            None => None,
        }
    }
}

/// Exactly four year digits, two month digits and two day digits.
fn is_iso_date_shape(value: &str) -> bool {
    let bytes: &[u8] = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

impl FromStr for CalendarDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CalendarDate> for String {
    fn from(value: CalendarDate) -> Self {
        value.to_string()
    }
}

/// Iterator over every date in an inclusive range.
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<CalendarDate>,
    end: CalendarDate,
}

impl Iterator for Days {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current: CalendarDate = self.next.filter(|d| *d <= self.end)?;
        self.next = current.next_day();
        Some(current)
    }
}

/// Returns every date in `[start, end]`. Empty when `end < start`.
#[must_use]
pub const fn days_between(start: CalendarDate, end: CalendarDate) -> Days {
    Days {
        next: Some(start),
        end,
    }
}

/// Number of calendar days in `[start, end]`, counting both ends.
///
/// Returns 0 when `end < start`.
#[must_use]
pub fn inclusive_day_count(start: CalendarDate, end: CalendarDate) -> u32 {
    let span: i64 = (end.0 - start.0).whole_days();
    if span < 0 {
        return 0;
    }
    u32::try_from(span + 1).unwrap_or(u32::MAX)
}

/// Number of Monday-Friday dates in `[start, end]`.
#[must_use]
pub fn count_workdays(start: CalendarDate, end: CalendarDate) -> u32 {
    let count: usize = days_between(start, end).filter(|d| !d.is_weekend()).count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Whether any date in `[start, end]` is a Saturday or Sunday.
#[must_use]
pub fn includes_weekend(start: CalendarDate, end: CalendarDate) -> bool {
    days_between(start, end).any(CalendarDate::is_weekend)
}

/// Inclusive interval intersection test.
#[must_use]
pub fn ranges_overlap(
    a_start: CalendarDate,
    a_end: CalendarDate,
    b_start: CalendarDate,
    b_end: CalendarDate,
) -> bool {
    a_start <= b_end && b_start <= a_end
}

/// A validated, inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: CalendarDate,
    end: CalendarDate,
}

impl DateRange {
    /// Creates a new range.
    ///
    /// # Errors
    ///
    /// Returns an error if `end` is before `start`.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, DomainError> {
        if end < start {
            return Err(DomainError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parses both ends of a range from `YYYY-MM-DD` strings.
    ///
    /// # Errors
    ///
    /// Returns an error if either date fails to parse or the range is inverted.
    pub fn parse(start: &str, end: &str) -> Result<Self, DomainError> {
        Self::new(CalendarDate::parse(start)?, CalendarDate::parse(end)?)
    }

    /// Builds a range without checking ordering. Used to echo caller data back
    /// in rule violations.
    pub(crate) const fn from_bounds(start: CalendarDate, end: CalendarDate) -> Self {
        Self { start, end }
    }

    /// Returns the first day of the range.
    #[must_use]
    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    /// Returns the last day of the range.
    #[must_use]
    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// Number of calendar days in the range.
    #[must_use]
    pub fn day_count(&self) -> u32 {
        inclusive_day_count(self.start, self.end)
    }

    /// Number of workdays in the range.
    #[must_use]
    pub fn workdays(&self) -> u32 {
        count_workdays(self.start, self.end)
    }

    /// Whether the range touches a weekend.
    #[must_use]
    pub fn includes_weekend(&self) -> bool {
        includes_weekend(self.start, self.end)
    }

    /// Whether two ranges share at least one day.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        ranges_overlap(self.start, self.end, other.start, other.end)
    }

    /// Whether `other` lies entirely inside this range.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Iterates over every date in the range.
    #[must_use]
    pub const fn days(&self) -> Days {
        days_between(self.start, self.end)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
