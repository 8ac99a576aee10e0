// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDateTime;

use crate::DateKey;

/// Whether the day `(year, month_index, day)` is before the date of `now`.
///
/// The comparison has date granularity: today is never past, whatever the
/// time of day of `now`, and every earlier day always is. Past days can not be
/// selected, and saving into a day that turned past is rejected.
pub fn is_past(year: i32, month_index: u32, day: u32, now: NaiveDateTime) -> bool {
    DateKey::new(year, month_index, day).is_past(now)
}
