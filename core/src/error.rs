// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

use crate::{DateKey, EditCursor};

/// Errors raised by the event store and the calendar view.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The index does not address an existing event of the day.
    #[error("index {index} is out of range for {key} ({len} events)")]
    IndexOutOfRange {
        key: DateKey,
        index: usize,
        len: usize,
    },

    /// The day is in the past and can no longer be modified.
    #[error("cannot modify past date {0}")]
    PastDateRejected(DateKey),

    /// The action needs a selected day.
    #[error("no day is selected")]
    NoDaySelected,

    /// The action is not allowed from the current edit cursor.
    #[error("cannot {action} while {from}")]
    InvalidTransition {
        from: EditCursor,
        action: &'static str,
    },

    /// A date key string could not be parsed.
    #[error("invalid date key: {0}")]
    InvalidDateKey(String),
}
