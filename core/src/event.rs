// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// An event of a calendar day.
///
/// An event has no identity besides its position in the list of its day.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Event {
    /// The name of the event.
    pub name: String,

    /// The start time of day, e.g. `09:30`. Stored as entered.
    pub start: String,

    /// The end time of day, e.g. `10:30`. Stored as entered.
    pub end: String,

    /// The description of the event.
    pub description: String,
}

impl Event {
    pub fn new(
        name: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            start: start.into(),
            end: end.into(),
            description: description.into(),
        }
    }

    /// The time span, formatted as `start - end`.
    pub fn time_span(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }

    /// Gets a field by name.
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Start => &self.start,
            DraftField::End => &self.end,
            DraftField::Description => &self.description,
        }
    }

    /// Sets a field by name.
    pub fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.name = value,
            DraftField::Start => self.start = value,
            DraftField::End => self.end = value,
            DraftField::Description => self.description = value,
        }
    }
}

/// The editable fields of an event draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Start,
    End,
    Description,
}

impl DraftField {
    /// All fields, in form order.
    pub const ALL: [DraftField; 4] = [
        DraftField::Name,
        DraftField::Start,
        DraftField::End,
        DraftField::Description,
    ];
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DraftField::Name => "Event Name",
            DraftField::Start => "Start",
            DraftField::End => "End",
            DraftField::Description => "Description",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_time_span() {
        let event = Event::new("Standup", "09:00", "09:15", "");
        assert_eq!(event.time_span(), "09:00 - 09:15");
    }

    #[test]
    fn sets_fields_by_name() {
        let mut event = Event::default();
        for (i, field) in DraftField::ALL.into_iter().enumerate() {
            event.set_field(field, format!("v{i}"));
        }
        assert_eq!(event, Event::new("v0", "v1", "v2", "v3"));
        assert_eq!(event.field(DraftField::End), "v2");
    }
}
