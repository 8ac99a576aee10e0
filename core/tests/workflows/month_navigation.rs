// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Month navigation workflow tests.

use evplan_core::{DateKey, DraftField, GridCell, YearMonth};

use crate::common::{test_now, test_view};

#[test]
fn navigation_crosses_year_boundaries() {
    let mut view = test_view();
    for _ in 0..10 {
        view.next_month();
    }
    assert_eq!(view.displayed(), YearMonth::new(2026, 0));

    view.prev_month();
    assert_eq!(view.displayed(), YearMonth::new(2025, 11));
}

#[test]
fn navigation_drops_selection_but_keeps_events() {
    // Arrange
    let mut view = test_view();
    view.select_day(20, test_now());
    view.begin_create().unwrap();
    view.update_draft(DraftField::Name, "Kept".to_string());
    view.save(test_now()).unwrap();

    // Act
    view.next_month();
    view.prev_month();

    // Assert
    assert_eq!(view.selected(), None);
    assert!(view.selected_events().is_empty());
    assert_eq!(view.store().list_for(DateKey::new(2025, 2, 20)).len(), 1);

    view.select_day(20, test_now());
    assert_eq!(view.selected_events()[0].name, "Kept");
}

#[test]
fn navigation_regenerates_grid() {
    let mut view = test_view();
    view.change_month(-1);
    // February 2025 starts on a Saturday
    let grid = view.grid();
    assert_eq!(grid.iter().take_while(|c| c.is_blank()).count(), 6);
    assert_eq!(grid.last(), Some(&GridCell::Day(28)));
}

#[test]
fn navigation_keys_use_displayed_month() {
    let mut view = test_view();
    view.next_month();
    view.select_day(1, test_now());
    assert_eq!(view.selected_key(), Some(DateKey::new(2025, 3, 1)));
}
