// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use evplan_core::{DateKey, EventStore};

/// Asserts that the events of a day carry the expected names, in order.
///
/// # Panics
///
/// Panics if the names or their order differ.
pub fn assert_day_names(store: &EventStore, key: DateKey, expected: &[&str]) {
    let names: Vec<&str> = store.list_for(key).iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, expected, "Event names mismatch for {key}");
}

/// Asserts that no day of the store has an empty event list.
///
/// # Panics
///
/// Panics if a key maps to an empty list.
pub fn assert_store_invariant(store: &EventStore) {
    for (key, events) in store.days() {
        assert!(!events.is_empty(), "Day {key} is present but empty");
    }
}
