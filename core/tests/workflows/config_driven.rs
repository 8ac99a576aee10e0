// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration-driven behavior workflow tests.

use evplan_core::{CalendarView, Config, GridCell, WeekStart};

use crate::common::test_today;

#[test]
fn config_week_start_monday_shifts_grid() {
    // Arrange
    let config: Config = toml::from_str(r#"week_start = "monday""#).unwrap();

    // Act
    let view = CalendarView::with_week_start(test_today(), config.week_start);

    // Assert - 2025-03-01 is a Saturday, the sixth column when weeks start on Monday
    let grid = view.grid();
    assert_eq!(grid.iter().take_while(|c| c.is_blank()).count(), 5);
    assert_eq!(grid[5], GridCell::Day(1));
    assert_eq!(view.week_start().labels()[0], "Mon");
}

#[test]
fn config_defaults_to_sunday() {
    let config = Config::default();
    assert_eq!(config.week_start, WeekStart::Sunday);

    let view = CalendarView::with_week_start(test_today(), config.week_start);
    assert_eq!(view.grid()[6], GridCell::Day(1));
}
