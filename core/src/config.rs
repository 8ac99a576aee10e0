// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::WeekStart;

/// The name of the application.
pub const APP_NAME: &str = "evplan";

/// Configuration of the calendar core.
#[derive(Debug, Default, Clone, serde::Deserialize)]
pub struct Config {
    /// The first column of the month grid.
    #[serde(default)]
    pub week_start: WeekStart,
}
