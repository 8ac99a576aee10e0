// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use chrono::{Datelike, NaiveDateTime};
use evplan_core::{CalendarView, DateKey, Error};

use crate::tui::dispatcher::{Action, Dispatcher};

/// State shared by the components of the calendar page.
#[derive(Debug)]
pub struct CalendarStore {
    pub view: CalendarView,

    /// The time the guard checks against, refreshed on every key press.
    pub now: NaiveDateTime,

    /// Feedback of the last action, shown in the status line.
    pub message: Option<String>,
}

impl CalendarStore {
    pub fn new(view: CalendarView, now: NaiveDateTime) -> Self {
        Self {
            view,
            now,
            message: None,
        }
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| {
            that.borrow_mut().apply(action);
        }));
        dispatcher.register(callback);
    }

    pub fn refresh_now(&mut self, now: NaiveDateTime) {
        self.now = now;
    }

    /// The day of today, if today is in the displayed month.
    pub fn today_in_view(&self) -> Option<u32> {
        let today = DateKey::from_date(self.now.date());
        (today.year_month() == self.view.displayed()).then(|| self.now.day())
    }

    pub fn apply(&mut self, action: &Action) {
        self.message = None;
        match action {
            Action::ChangeMonth(delta) => self.view.change_month(*delta),
            // past days are inert, the grid already dims them
            Action::SelectDay(day) => {
                self.view.select_day(*day, self.now);
            }
            Action::BeginCreate => {
                let result = self.view.begin_create();
                self.report(result);
            }
            Action::BeginEdit(index) => {
                let result = self.view.begin_edit(*index);
                self.report(result);
            }
            Action::DeleteEvent(index) => {
                let result = self.view.delete(*index);
                self.report(result);
            }
            Action::UpdateDraft(field, value) => {
                self.view.update_draft(*field, value.clone());
            }
            // a day that became past while editing keeps the form open, silently
            Action::Save => {
                let result = self.view.save(self.now).map(|_| ());
                self.report(result);
            }
            Action::Cancel => self.view.cancel(),
        }
    }

    fn report(&mut self, result: Result<(), Error>) {
        if let Err(e) = result {
            tracing::debug!(error = %e, "calendar action failed");
            self.message = Some(e.to_string());
        }
    }
}
