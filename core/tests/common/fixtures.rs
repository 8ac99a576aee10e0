// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use chrono::{NaiveDate, NaiveDateTime};

use evplan_core::{CalendarView, DateKey, Event, EventStore};

/// The fixed "today" of the tests: Saturday, 15 March 2025.
#[must_use]
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).expect("valid date")
}

/// Afternoon of [`test_today`].
#[must_use]
pub fn test_now() -> NaiveDateTime {
    at(2025, 3, 15, 14, 0)
}

/// Builds a local date time, the month is 1-based.
#[must_use]
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .expect("valid date time")
}

/// A key of March 2025.
#[must_use]
pub fn test_key(day: u32) -> DateKey {
    DateKey::new(2025, 2, day)
}

/// An event with the given name and a one hour span.
///
/// # Example
///
/// ```ignore
/// let event = test_event("Team Meeting");
/// ```
#[must_use]
pub fn test_event(name: &str) -> Event {
    Event::new(name, "09:00", "10:00", format!("{name} description"))
}

/// A store with the given names added to one day, in order.
#[must_use]
pub fn test_store(key: DateKey, names: &[&str]) -> EventStore {
    names
        .iter()
        .fold(EventStore::new(), |store, name| store.add(key, test_event(name)))
}

/// A view showing March 2025.
#[must_use]
pub fn test_view() -> CalendarView {
    CalendarView::new(test_today())
}
