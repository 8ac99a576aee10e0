// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface of the event planner.

mod cli;
mod cmd_calendar;
mod cmd_generate_completion;
mod cmd_home;
mod cmd_month;
mod config;
mod month_formatter;
mod tui;
mod util;

pub use crate::cli::{Cli, Commands, run};
