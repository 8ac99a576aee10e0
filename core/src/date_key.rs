// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::YearMonth;
use crate::error::Error;
use crate::grid::{civil_from_days, days_from_civil};

/// Identifies the event list of one calendar day.
///
/// The month is the zero-based month index. Keys are always normalized, so two
/// keys are equal exactly when they name the same calendar day, and they order
/// chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct DateKey {
    year: i32,
    month: u32,
    day: u32,
}

impl DateKey {
    /// Creates the key of a day.
    ///
    /// Overflowing months and days roll over into the following months, day 0
    /// is the last day of the previous month. Keys beyond the `i32` year range
    /// saturate at its first or last day.
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        let ym = YearMonth::new(year, month);
        let days = days_from_civil(i64::from(ym.year()), ym.month_index() + 1, 1)
            + i64::from(day)
            - 1;

        let (year, month, day) = civil_from_days(days);
        match i32::try_from(year) {
            Ok(year) => Self {
                year,
                month: month - 1,
                day,
            },
            Err(_) if year < 0 => Self {
                year: i32::MIN,
                month: 0,
                day: 1,
            },
            Err(_) => Self {
                year: i32::MAX,
                month: 11,
                day: 31,
            },
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month index, 0 is January.
    pub fn month_index(&self) -> u32 {
        self.month
    }

    /// Day of the month, starting at 1.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// The key of a day within the given month.
    pub fn in_month(ym: YearMonth, day: u32) -> Self {
        Self::new(ym.year(), ym.month_index(), day)
    }

    /// The key of a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month0(), date.day())
    }

    /// The month this key belongs to.
    pub fn year_month(&self) -> YearMonth {
        YearMonth::new(self.year, self.month)
    }

    /// The calendar date of the key, or `None` when the date is out of the
    /// range chrono can represent.
    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, self.day)
    }

    /// Whether the day is before the date of `now`, see [`crate::is_past`].
    pub fn is_past(&self, now: NaiveDateTime) -> bool {
        match self.to_date() {
            Some(date) => date < now.date(),
            None => self.year_month().year() < now.year(),
        }
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

impl FromStr for DateKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidDateKey(s.to_string());

        // split from the right so that negative years keep their sign
        let mut parts = s.rsplitn(3, '-');
        let day = parts.next().ok_or_else(invalid)?;
        let month = parts.next().ok_or_else(invalid)?;
        let year = parts.next().ok_or_else(invalid)?;

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let day: u32 = day.parse().map_err(|_| invalid())?;
        if month > 11 || !(1..=YearMonth::new(year, month).days_in_month()).contains(&day) {
            return Err(invalid());
        }

        Ok(Self { year, month, day })
    }
}
