// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Names of the months, indexed by the zero-based month index.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A cell of the month grid, either an alignment blank or a day of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum GridCell {
    /// Placeholder before the first day, so that day 1 lands in its weekday column.
    Blank,

    /// A day of the month, starting at 1.
    Day(u32),
}

impl GridCell {
    /// The day number, or `None` for a blank.
    pub fn day(&self) -> Option<u32> {
        match self {
            GridCell::Blank => None,
            GridCell::Day(d) => Some(*d),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, GridCell::Blank)
    }
}

/// The first column of the grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// Weeks start on Sunday.
    #[default]
    Sunday,

    /// Weeks start on Monday.
    Monday,
}

impl WeekStart {
    /// Column headers, starting from the first day of the week.
    pub fn labels(self) -> [&'static str; 7] {
        let offset = self.offset();
        std::array::from_fn(|i| WEEKDAY_LABELS[(i + offset) % 7])
    }

    fn offset(self) -> usize {
        match self {
            WeekStart::Sunday => 0,
            WeekStart::Monday => 1,
        }
    }
}

/// A month of a year, with a zero-based month index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a month, carrying month indices past 11 into the following years.
    pub fn new(year: i32, month_index: u32) -> Self {
        Self::from_months(i64::from(year) * 12 + i64::from(month_index))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month index, 0 is January.
    pub fn month_index(&self) -> u32 {
        self.month
    }

    /// English name of the month.
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize]
    }

    pub fn next(self) -> Self {
        self.offset(1)
    }

    pub fn prev(self) -> Self {
        self.offset(-1)
    }

    /// Moves by `delta` months, crossing year boundaries as needed.
    pub fn offset(self, delta: i32) -> Self {
        Self::from_months(self.total_months() + i64::from(delta))
    }

    /// Number of days, following the proleptic Gregorian calendar.
    pub fn days_in_month(&self) -> u32 {
        match self.month {
            1 if is_leap_year(self.year) => 29,
            1 => 28,
            3 | 5 | 8 | 10 => 30,
            _ => 31,
        }
    }

    /// Weekday of the first day, 0 is Sunday.
    pub fn first_weekday(&self) -> u32 {
        let days = days_from_civil(i64::from(self.year), self.month + 1, 1);
        // 1970-01-01 was a Thursday
        (days + 4).rem_euclid(7) as u32
    }

    fn total_months(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month)
    }

    /// Saturates at the first and last month of the `i32` year range.
    fn from_months(total: i64) -> Self {
        match i32::try_from(total.div_euclid(12)) {
            Ok(year) => Self {
                year,
                month: total.rem_euclid(12) as u32,
            },
            Err(_) if total < 0 => Self {
                year: i32::MIN,
                month: 0,
            },
            Err(_) => Self {
                year: i32::MAX,
                month: 11,
            },
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}

/// Generates the cells of a month with weeks starting on Sunday.
///
/// The result holds the leading blanks followed by the days `1..=N`, there is
/// no trailing padding.
pub fn generate(year: i32, month_index: u32) -> Vec<GridCell> {
    generate_with(year, month_index, WeekStart::Sunday)
}

/// Generates the cells of a month for the given first day of the week.
pub fn generate_with(year: i32, month_index: u32, week_start: WeekStart) -> Vec<GridCell> {
    let ym = YearMonth::new(year, month_index);
    let leading = (ym.first_weekday() as usize + 7 - week_start.offset()) % 7;
    let days = ym.days_in_month();

    let mut cells = Vec::with_capacity(leading + days as usize);
    cells.extend(std::iter::repeat_n(GridCell::Blank, leading));
    cells.extend((1..=days).map(GridCell::Day));
    cells
}

/// Splits the grid into weeks, the last one may be short.
pub fn rows(cells: &[GridCell]) -> impl Iterator<Item = &[GridCell]> {
    cells.chunks(7)
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Days since 1970-01-01 of a proleptic Gregorian date, `month` is 1-based.
pub(crate) fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let yoe = year - era * 400;
    let mp = i64::from((month + 9) % 12);
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`], returns the year, the 1-based month and the day.
pub(crate) fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}
