// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::NaiveDateTime;
use colored::Colorize;
use evplan_core::{DateKey, GridCell, WeekStart, YearMonth, generate_with, rows};

use crate::util::ArgOutputFormat;

/// Width of a day column, without the separator.
const CELL_WIDTH: usize = 2;

#[derive(Debug)]
pub struct MonthFormatter {
    now: NaiveDateTime,
    week_start: WeekStart,
    format: ArgOutputFormat,
}

impl MonthFormatter {
    pub fn new(now: NaiveDateTime, week_start: WeekStart) -> Self {
        Self {
            now,
            week_start,
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format(&self, ym: YearMonth) -> Display<'_> {
        Display {
            ym,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    ym: YearMonth,
    formatter: &'a MonthFormatter,
}

impl Display<'_> {
    fn cells(&self) -> Vec<GridCell> {
        generate_with(
            self.ym.year(),
            self.ym.month_index(),
            self.formatter.week_start,
        )
    }

    fn write_table(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = 7 * (CELL_WIDTH + 1) - 1;
        writeln!(f, "{:^width$}", self.ym.to_string().bold())?;

        let labels: Vec<_> = self
            .formatter
            .week_start
            .labels()
            .iter()
            .map(|label| label[..CELL_WIDTH].to_string())
            .collect();
        writeln!(f, "{}", labels.join(" ").italic())?;

        let cells = self.cells();
        for week in rows(&cells) {
            let line: Vec<_> = week.iter().map(|cell| self.stylize(*cell)).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }

    fn stylize(&self, cell: GridCell) -> String {
        let Some(day) = cell.day() else {
            return " ".repeat(CELL_WIDTH);
        };

        let text = format!("{day:>CELL_WIDTH$}");
        let key = DateKey::in_month(self.ym, day);
        let now = self.formatter.now;
        if key == DateKey::from_date(now.date()) {
            text.green().bold().to_string()
        } else if key.is_past(now) {
            text.dimmed().to_string()
        } else {
            text
        }
    }

    fn write_json(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = MonthJson {
            year: self.ym.year(),
            month_index: self.ym.month_index(),
            name: self.ym.name(),
            labels: self.formatter.week_start.labels(),
            cells: self.cells(),
        };
        let json = serde_json::to_string_pretty(&month).map_err(|_| fmt::Error)?;
        writeln!(f, "{json}")
    }
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            ArgOutputFormat::Table => self.write_table(f),
            ArgOutputFormat::Json => self.write_json(f),
        }
    }
}

#[derive(serde::Serialize)]
struct MonthJson {
    year: i32,
    month_index: u32,
    name: &'static str,
    labels: [&'static str; 7],
    cells: Vec<GridCell>,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 15)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_format_table() {
        colored::control::set_override(false);
        let formatter = MonthFormatter::new(now(), WeekStart::Sunday);
        let output = formatter.format(YearMonth::new(2025, 1)).to_string();
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines[0].trim(), "February 2025");
        assert_eq!(lines[1], "Su Mo Tu We Th Fr Sa");
        assert_eq!(lines[2], "                   1");
        assert_eq!(lines[3], " 2  3  4  5  6  7  8");
        assert_eq!(lines.len(), 2 + 5);
    }

    #[test]
    fn test_format_table_monday() {
        colored::control::set_override(false);
        let formatter = MonthFormatter::new(now(), WeekStart::Monday);
        let output = formatter.format(YearMonth::new(2025, 1)).to_string();
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines[1], "Mo Tu We Th Fr Sa Su");
        assert_eq!(lines[2], "                1  2");
    }

    #[test]
    fn test_format_json() {
        let formatter =
            MonthFormatter::new(now(), WeekStart::Sunday).with_output_format(ArgOutputFormat::Json);
        let output = formatter.format(YearMonth::new(2024, 1)).to_string();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["year"], 2024);
        assert_eq!(value["month_index"], 1);
        assert_eq!(value["name"], "February");
        assert_eq!(value["labels"][0], "Sun");

        let cells = value["cells"].as_array().unwrap();
        // 2024-02-01 is a Thursday
        assert!(cells[..4].iter().all(|c| c.is_null()));
        assert_eq!(cells[4], 1);
        assert_eq!(cells.len(), 4 + 29);
    }
}
