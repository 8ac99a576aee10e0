// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Past-date guard workflow tests.
//!
//! Selection of past days is inert, and a form left open until its day turns
//! past can no longer be saved.

use evplan_core::{DraftField, EditCursor, Error};

use crate::common::{at, test_key, test_now, test_view};

#[test]
fn past_days_of_current_month_are_inert() {
    let mut view = test_view();
    for day in 1..15 {
        assert!(!view.is_selectable(day, test_now()), "day {day}");
        assert!(!view.select_day(day, test_now()));
    }
    assert_eq!(view.selected(), None);
}

#[test]
fn today_is_selectable_until_midnight() {
    let mut view = test_view();
    assert!(view.select_day(15, at(2025, 3, 15, 23, 59)));
}

#[test]
fn whole_previous_month_is_inert() {
    let mut view = test_view();
    view.prev_month();
    assert!((1..=28).all(|day| !view.is_selectable(day, test_now())));
}

#[test]
fn long_open_form_is_rejected_silently() {
    // Arrange - open the form late in the evening
    let mut view = test_view();
    view.select_day(15, at(2025, 3, 15, 23, 58));
    view.begin_create().unwrap();
    view.update_draft(DraftField::Name, "Too late".to_string());

    // Act - save after midnight
    let saved = view.save(at(2025, 3, 16, 0, 1)).unwrap();

    // Assert
    assert!(!saved);
    assert!(view.store().is_empty());
    assert_eq!(view.cursor(), EditCursor::Creating);

    // the checked variant reports the rejection
    assert_eq!(
        view.try_save(at(2025, 3, 16, 0, 1)),
        Err(Error::PastDateRejected(test_key(15)))
    );

    // cancelling closes the form
    view.cancel();
    assert_eq!(view.cursor(), EditCursor::Idle);
}
