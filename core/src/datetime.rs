// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use jiff::ToSpan;
use jiff::civil::{Date, Time};

/// Storage format of a calendar date, e.g. `2025-03-10`.
pub(crate) const STABLE_FORMAT_DATE: &str = "%Y-%m-%d";

/// Storage format of a time of day, e.g. `09:00:00`.
pub(crate) const STABLE_FORMAT_TIME: &str = "%H:%M:%S";

/// A calendar month of a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth(Date);

impl YearMonth {
    /// Creates a year-month, validating the month.
    ///
    /// # Errors
    ///
    /// Returns an error if the year or month is out of range.
    pub fn new(year: i16, month: i8) -> Result<Self, Box<dyn Error>> {
        let first = Date::new(year, month, 1)
            .map_err(|e| format!("Invalid year-month {year}-{month}: {e}"))?;
        Ok(Self(first))
    }

    /// The month containing the given date.
    #[must_use]
    pub fn of(date: Date) -> Self {
        Self(date.first_of_month())
    }

    /// The year.
    #[must_use]
    pub fn year(self) -> i16 {
        self.0.year()
    }

    /// The month, 1 to 12.
    #[must_use]
    pub fn month(self) -> i8 {
        self.0.month()
    }

    /// Day 1 of the month.
    #[must_use]
    pub fn first_day(self) -> Date {
        self.0
    }

    /// Number of days, accounting for leap years.
    #[must_use]
    pub fn days_in_month(self) -> i8 {
        self.0.days_in_month()
    }

    /// Weekday of day 1, 0 for Sunday through 6 for Saturday.
    #[must_use]
    pub fn first_weekday(self) -> i8 {
        self.0.weekday().to_sunday_zero_offset()
    }

    /// The given day of this month, `None` if out of range.
    #[must_use]
    pub fn day(self, day: i8) -> Option<Date> {
        Date::new(self.year(), self.month(), day).ok()
    }

    /// Iterates over every date of the month.
    pub fn days(self) -> impl Iterator<Item = Date> {
        (1..=self.days_in_month()).filter_map(move |d| self.day(d))
    }

    /// The previous month, `self` if already at the minimum supported date.
    #[must_use]
    pub fn prev(self) -> Self {
        self.0
            .checked_sub(1.month())
            .map_or(self, |d| Self(d.first_of_month()))
    }

    /// The next month, `self` if already at the maximum supported date.
    #[must_use]
    pub fn next(self) -> Self {
        self.0
            .checked_add(1.month())
            .map_or(self, |d| Self(d.first_of_month()))
    }

    /// Whether the given date falls in this month.
    #[must_use]
    pub fn contains(self, date: Date) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (y, m) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| format!("Invalid year-month, expected YYYY-MM: {s}"))?;
        let year: i16 = y.parse().map_err(|e| format!("Invalid year {y}: {e}"))?;
        let month: i8 = m.parse().map_err(|e| format!("Invalid month {m}: {e}"))?;
        Self::new(year, month)
    }
}

pub(crate) fn format_date(date: Date) -> String {
    date.strftime(STABLE_FORMAT_DATE).to_string()
}

pub(crate) fn format_time(time: Time) -> String {
    time.strftime(STABLE_FORMAT_TIME).to_string()
}

pub(crate) fn parse_date(s: &str) -> Result<Date, jiff::Error> {
    Date::strptime(STABLE_FORMAT_DATE, s)
}

pub(crate) fn parse_time(s: &str) -> Result<Time, jiff::Error> {
    Time::strptime(STABLE_FORMAT_TIME, s)
}
