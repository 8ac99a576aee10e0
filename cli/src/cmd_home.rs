// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fmt::Write};

use chrono::NaiveDateTime;
use clap::{ArgMatches, Command};
use colored::Colorize;
use evplan_core::{Config, DateKey};

use crate::month_formatter::MonthFormatter;
use crate::util::local_now;

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdHome;

impl CmdHome {
    pub const NAME: &str = "home";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Show the landing page with the current month")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdHome
    }

    /// Show the banner and the current month.
    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing landing page...");
        print!("{}", Self::landing(config, local_now())?);
        Ok(())
    }

    fn landing(config: &Config, now: NaiveDateTime) -> Result<String, Box<dyn Error>> {
        let mut out = String::new();
        writeln!(out, "🗓️ {}", "Welcome to Event Planner".bold())?;
        writeln!(
            out,
            "{}",
            "Plan, organize, and stay ahead with your events in style.".italic()
        )?;
        writeln!(out)?;

        let ym = DateKey::from_date(now.date()).year_month();
        let formatter = MonthFormatter::new(now, config.week_start);
        write!(out, "{}", formatter.format(ym))?;
        writeln!(out)?;

        writeln!(
            out,
            "{} Run {} to plan your events",
            "►".green(),
            "evplan calendar".blue().bold()
        )?;
        Ok(out)
    }
}
