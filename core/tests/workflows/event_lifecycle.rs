// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end event lifecycle workflow tests.
//!
//! These tests validate complete workflows from event creation through
//! modification and deletion on a selected day.

use evplan_core::{DraftField, EditCursor, Error, Event};

use crate::common::{
    assert_day_names, assert_store_invariant, test_key, test_now, test_view,
};

#[test]
fn event_lifecycle_create_flow() {
    // Arrange
    let mut view = test_view();
    assert!(view.select_day(20, test_now()));

    // Act
    view.begin_create().unwrap();
    view.update_draft(DraftField::Name, "Team Meeting".to_string());
    view.update_draft(DraftField::Start, "10:00".to_string());
    view.update_draft(DraftField::End, "11:00".to_string());
    view.update_draft(DraftField::Description, "Weekly sync".to_string());
    let saved = view.save(test_now()).unwrap();

    // Assert
    assert!(saved);
    assert_eq!(
        view.selected_events(),
        &[Event::new("Team Meeting", "10:00", "11:00", "Weekly sync")]
    );
    assert_eq!(view.cursor(), EditCursor::Idle);
    assert_eq!(view.draft(), &Event::default());
}

#[test]
fn event_lifecycle_update_flow() {
    // Arrange
    let mut view = test_view();
    view.select_day(20, test_now());
    for name in ["First", "Second", "Third"] {
        view.begin_create().unwrap();
        view.update_draft(DraftField::Name, name.to_string());
        view.save(test_now()).unwrap();
    }

    // Act
    view.begin_edit(1).unwrap();
    view.update_draft(DraftField::Name, "Updated".to_string());
    view.save(test_now()).unwrap();

    // Assert - order and length are kept
    assert_day_names(view.store(), test_key(20), &["First", "Updated", "Third"]);
}

#[test]
fn event_lifecycle_delete_flow() {
    // Arrange
    let mut view = test_view();
    view.select_day(20, test_now());
    for name in ["First", "Second"] {
        view.begin_create().unwrap();
        view.update_draft(DraftField::Name, name.to_string());
        view.save(test_now()).unwrap();
    }

    // Act & Assert
    view.delete(0).unwrap();
    assert_day_names(view.store(), test_key(20), &["Second"]);

    view.delete(0).unwrap();
    assert!(!view.store().contains(test_key(20)));
    assert!(view.selected_events().is_empty());
    assert_store_invariant(view.store());
}

#[test]
fn event_lifecycle_delete_invalid_index() {
    // Arrange
    let mut view = test_view();
    view.select_day(20, test_now());
    view.begin_create().unwrap();
    view.save(test_now()).unwrap();
    let before = view.store().clone();

    // Act
    let err = view.delete(1).unwrap_err();

    // Assert
    assert_eq!(
        err,
        Error::IndexOutOfRange {
            key: test_key(20),
            index: 1,
            len: 1
        }
    );
    assert_eq!(view.store(), &before);
}

#[test]
fn event_lifecycle_days_are_independent() {
    // Arrange
    let mut view = test_view();

    // Act
    for (day, name) in [(20, "Twentieth"), (21, "Twenty-first"), (20, "Again")] {
        view.select_day(day, test_now());
        view.begin_create().unwrap();
        view.update_draft(DraftField::Name, name.to_string());
        view.save(test_now()).unwrap();
    }

    // Assert
    assert_day_names(view.store(), test_key(20), &["Twentieth", "Again"]);
    assert_day_names(view.store(), test_key(21), &["Twenty-first"]);
    assert_eq!(view.store().days_in(view.displayed()), vec![20, 21]);
}

#[test]
fn event_lifecycle_selecting_another_day_resets_form() {
    // Arrange
    let mut view = test_view();
    view.select_day(20, test_now());
    view.begin_create().unwrap();
    view.update_draft(DraftField::Name, "Unsaved".to_string());

    // Act
    view.select_day(22, test_now());

    // Assert
    assert_eq!(view.cursor(), EditCursor::Idle);
    assert_eq!(view.draft(), &Event::default());
    assert!(view.store().is_empty());
}
