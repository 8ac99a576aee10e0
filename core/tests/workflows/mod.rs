// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the evplan-core crate.
//!
//! These tests drive the calendar view the way the user interface does:
//! navigating months, selecting days, and saving through the edit form.

mod config_driven;
mod event_lifecycle;
mod month_navigation;
mod past_dates;
