// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use evplan_core::{CalendarView, Config};

use crate::tui::run_calendar;
use crate::util::local_now;

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdCalendar;

impl CmdCalendar {
    pub const NAME: &str = "calendar";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .visible_alias("cal")
            .alias("tui")
            .about("Open the interactive calendar to plan your events")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdCalendar
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "opening calendar...");
        let view = CalendarView::with_week_start(local_now().date(), config.week_start);
        let view = run_calendar(view)?;

        let store = view.store();
        if !store.is_empty() {
            println!(
                "{} {} events planned over {} days, they are not kept after exit",
                "Note:".yellow(),
                store.event_count(),
                store.len()
            );
        }
        Ok(())
    }
}
