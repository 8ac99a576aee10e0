// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use crate::grid::{GridCell, WeekStart, YearMonth, generate_with};
use crate::{DateKey, DraftField, Error, Event, EventStore};

/// Where the add/edit form stands.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EditCursor {
    /// No form is open.
    #[default]
    Idle,

    /// The draft will be appended to the selected day.
    Creating,

    /// The draft will replace the event at this index of the selected day.
    EditingIndex(usize),
}

impl fmt::Display for EditCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditCursor::Idle => write!(f, "idle"),
            EditCursor::Creating => write!(f, "creating an event"),
            EditCursor::EditingIndex(i) => write!(f, "editing event {i}"),
        }
    }
}

/// State of the calendar page: displayed month, selected day, the form and
/// the event store.
///
/// The view never reads the clock, operations that depend on the current
/// time take it as `now`.
#[derive(Debug, Clone)]
pub struct CalendarView {
    displayed: YearMonth,
    selected: Option<u32>,
    cursor: EditCursor,
    draft: Event,
    store: EventStore,
    week_start: WeekStart,
}

impl CalendarView {
    /// Displays the month of `today`, with weeks starting on Sunday.
    pub fn new(today: NaiveDate) -> Self {
        Self::with_week_start(today, WeekStart::default())
    }

    pub fn with_week_start(today: NaiveDate, week_start: WeekStart) -> Self {
        let key = DateKey::from_date(today);
        Self {
            displayed: key.year_month(),
            selected: None,
            cursor: EditCursor::Idle,
            draft: Event::default(),
            store: EventStore::new(),
            week_start,
        }
    }

    pub fn displayed(&self) -> YearMonth {
        self.displayed
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn cursor(&self) -> EditCursor {
        self.cursor
    }

    /// The current store snapshot.
    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// The grid of the displayed month.
    pub fn grid(&self) -> Vec<GridCell> {
        generate_with(
            self.displayed.year(),
            self.displayed.month_index(),
            self.week_start,
        )
    }

    /// Moves the display by `delta` months and drops the selection.
    pub fn change_month(&mut self, delta: i32) {
        self.displayed = self.displayed.offset(delta);
        self.selected = None;
        self.reset_cursor();
        tracing::debug!(displayed = %self.displayed, "month changed");
    }

    pub fn next_month(&mut self) {
        self.change_month(1);
    }

    pub fn prev_month(&mut self) {
        self.change_month(-1);
    }

    /// Whether the day exists in the displayed month and is not past.
    pub fn is_selectable(&self, day: u32, now: NaiveDateTime) -> bool {
        (1..=self.displayed.days_in_month()).contains(&day)
            && !DateKey::in_month(self.displayed, day).is_past(now)
    }

    /// Selects a day of the displayed month, closing any open form.
    ///
    /// Past and nonexistent days are inert: nothing changes and `false` is
    /// returned.
    pub fn select_day(&mut self, day: u32, now: NaiveDateTime) -> bool {
        if !self.is_selectable(day, now) {
            tracing::debug!(day, "day is not selectable");
            return false;
        }

        self.selected = Some(day);
        self.reset_cursor();
        true
    }

    /// The key of the selected day.
    pub fn selected_key(&self) -> Option<DateKey> {
        self.selected.map(|day| DateKey::in_month(self.displayed, day))
    }

    /// The events of the selected day.
    pub fn selected_events(&self) -> &[Event] {
        match self.selected_key() {
            Some(key) => self.store.list_for(key),
            None => &[],
        }
    }

    /// Opens the form to add an event to the selected day.
    pub fn begin_create(&mut self) -> Result<(), Error> {
        self.check_idle("create an event")?;
        self.selected_key().ok_or(Error::NoDaySelected)?;

        self.cursor = EditCursor::Creating;
        self.draft = Event::default();
        Ok(())
    }

    /// Opens the form to edit the event at `index` of the selected day.
    pub fn begin_edit(&mut self, index: usize) -> Result<(), Error> {
        self.check_idle("edit an event")?;
        let key = self.selected_key().ok_or(Error::NoDaySelected)?;
        let event = self.store.get(key, index).ok_or_else(|| Error::IndexOutOfRange {
            key,
            index,
            len: self.store.list_for(key).len(),
        })?;

        self.draft = event.clone();
        self.cursor = EditCursor::EditingIndex(index);
        Ok(())
    }

    /// The event being drafted.
    pub fn draft(&self) -> &Event {
        &self.draft
    }

    /// The event being drafted, if a form is open.
    pub fn draft_mut(&mut self) -> Option<&mut Event> {
        match self.cursor {
            EditCursor::Idle => None,
            _ => Some(&mut self.draft),
        }
    }

    /// Updates a field of the draft, ignored when no form is open.
    pub fn update_draft(&mut self, field: DraftField, value: String) -> bool {
        match self.draft_mut() {
            Some(draft) => {
                draft.set_field(field, value);
                true
            }
            None => false,
        }
    }

    /// Commits the draft to the store and closes the form.
    ///
    /// Fails with [`Error::PastDateRejected`] if the selected day has become
    /// past, leaving the form open.
    pub fn try_save(&mut self, now: NaiveDateTime) -> Result<(), Error> {
        if self.cursor == EditCursor::Idle {
            return Err(Error::InvalidTransition {
                from: self.cursor,
                action: "save",
            });
        }

        let key = self.selected_key().ok_or(Error::NoDaySelected)?;
        if key.is_past(now) {
            return Err(Error::PastDateRejected(key));
        }

        // the draft stays in place if the store rejects it
        let next = match self.cursor {
            EditCursor::EditingIndex(i) => self.store.edit(key, i, self.draft.clone())?,
            _ => self.store.add(key, self.draft.clone()),
        };

        tracing::debug!(%key, cursor = %self.cursor, "event saved");
        self.store = next;
        self.reset_cursor();
        Ok(())
    }

    /// Like [`Self::try_save`], but a save into a past day is a silent no-op
    /// returning `false`.
    pub fn save(&mut self, now: NaiveDateTime) -> Result<bool, Error> {
        match self.try_save(now) {
            Ok(()) => Ok(true),
            Err(Error::PastDateRejected(key)) => {
                tracing::debug!(%key, "save into past date ignored");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Closes the form and clears the draft.
    pub fn cancel(&mut self) {
        self.reset_cursor();
    }

    /// Deletes the event at `index` of the selected day.
    pub fn delete(&mut self, index: usize) -> Result<(), Error> {
        let key = self.selected_key().ok_or(Error::NoDaySelected)?;
        self.store = self.store.delete(key, index)?;
        tracing::debug!(%key, index, "event deleted");
        Ok(())
    }

    fn check_idle(&self, action: &'static str) -> Result<(), Error> {
        match self.cursor {
            EditCursor::Idle => Ok(()),
            from => Err(Error::InvalidTransition { from, action }),
        }
    }

    fn reset_cursor(&mut self) {
        self.cursor = EditCursor::Idle;
        self.draft = Event::default();
    }
}
