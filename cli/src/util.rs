// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Local, NaiveDateTime};
use clap::{Arg, ArgMatches, arg, value_parser};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

/// The local wall-clock time, the only place the CLI reads the clock.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Number of grapheme clusters in `s`.
pub fn grapheme_count(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Display width of the first `n` grapheme clusters of `s`.
pub fn width_of_graphemes(s: &str, n: usize) -> usize {
    s.graphemes(true).take(n).map(UnicodeWidthStr::width).sum()
}

/// Byte offset where the grapheme cluster at index `g_idx` starts, or the
/// length of `s` when out of bounds.
pub fn byte_offset_of_grapheme(s: &str, g_idx: usize) -> usize {
    s.grapheme_indices(true)
        .nth(g_idx)
        .map_or(s.len(), |(offset, _)| offset)
}

/// Byte range of the grapheme cluster at index `g_idx`, `None` if out of bounds.
pub fn byte_range_of_grapheme(s: &str, g_idx: usize) -> Option<std::ops::Range<usize>> {
    s.grapheme_indices(true)
        .nth(g_idx)
        .map(|(start, g)| start..start + g.len())
}
