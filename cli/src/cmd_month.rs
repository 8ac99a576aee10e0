// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::{Datelike, NaiveDateTime};
use clap::{ArgMatches, Command, arg, value_parser};
use evplan_core::{Config, WeekStart, YearMonth};

use crate::month_formatter::MonthFormatter;
use crate::util::{ArgOutputFormat, local_now};

#[derive(Debug, Clone, Copy)]
pub struct CmdMonth {
    pub year: Option<i32>,

    /// The month, 1 for January.
    pub month: Option<u32>,

    /// Overrides the first day of the week of the config.
    pub week_start: Option<WeekStart>,

    pub output_format: ArgOutputFormat,
}

impl CmdMonth {
    pub const NAME: &str = "month";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Print the calendar grid of a month")
            .allow_negative_numbers(true)
            .arg(
                arg!([YEAR] "The year, defaults to the current year")
                    .value_parser(value_parser!(i32)),
            )
            .arg(
                arg!([MONTH] "The month from 1 to 12, defaults to the current month")
                    .value_parser(parse_month),
            )
            .arg(
                arg!(--"week-start" <DAY> "The first day of the week")
                    .value_parser(value_parser!(WeekStart)),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            year: matches.get_one("YEAR").copied(),
            month: matches.get_one("MONTH").copied(),
            week_start: matches.get_one("week-start").copied(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "printing month...");
        let now = local_now();
        let week_start = self.week_start.unwrap_or(config.week_start);
        let formatter =
            MonthFormatter::new(now, week_start).with_output_format(self.output_format);
        print!("{}", formatter.format(self.year_month(now)));
        Ok(())
    }

    fn year_month(&self, now: NaiveDateTime) -> YearMonth {
        let year = self.year.unwrap_or(now.year());
        let month_index = self.month.map_or(now.month0(), |m| m - 1);
        YearMonth::new(year, month_index)
    }
}

fn parse_month(s: &str) -> Result<u32, String> {
    clap_num::number_range(s, 1, 12)
}
