// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of the event planner: the month grid, the past-date guard, the event
//! store and the state of the calendar page.

mod config;
mod date_key;
mod error;
mod event;
mod grid;
mod guard;
mod store;
mod view;

pub use crate::config::{APP_NAME, Config};
pub use crate::date_key::DateKey;
pub use crate::error::Error;
pub use crate::event::{DraftField, Event};
pub use crate::grid::{GridCell, MONTH_NAMES, WeekStart, YearMonth, generate, generate_with, rows};
pub use crate::guard::is_past;
pub use crate::store::EventStore;
pub use crate::view::{CalendarView, EditCursor};
