// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use evplan_core::{DraftField, EditCursor};
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::Block;

use crate::tui::calendar_store::CalendarStore;
use crate::tui::component::{Component, Message};
use crate::tui::component_form::{Access, Form, FormItem, Input};
use crate::tui::dispatcher::{Action, Dispatcher};

/// The modal form editing the draft event.
pub struct EventEditor(Form<CalendarStore, Box<dyn FormItem<CalendarStore>>>);

impl EventEditor {
    pub const WIDTH: u16 = 48;

    pub fn new() -> Self {
        let items: Vec<Box<dyn FormItem<CalendarStore>>> = vec![
            Box::new(new_name()),
            Box::new(new_start()),
            Box::new(new_end()),
            Box::new(new_description()),
        ];
        Self(Form::new(items))
    }

    pub fn height(&self) -> u16 {
        self.0.height() + 2 // border
    }

    fn block(&self, store: &RefCell<CalendarStore>) -> Block<'static> {
        let title = match store.borrow().view.cursor() {
            EditCursor::EditingIndex(_) => " Edit Event ",
            _ => " Add Event ",
        };
        Block::bordered()
            .border_set(border::ROUNDED)
            .title(Line::from(title.bold()).centered())
            .title_bottom(instructions().centered())
    }
}

impl Component<CalendarStore> for EventEditor {
    fn render(&self, store: &RefCell<CalendarStore>, area: Rect, buf: &mut Buffer) {
        let block = self.block(store);
        let inner = block.inner(area);
        block.render(area, buf);
        self.0.render(store, inner, buf);
    }

    fn get_cursor_position(
        &self,
        store: &RefCell<CalendarStore>,
        area: Rect,
    ) -> Option<(u16, u16)> {
        self.0.get_cursor_position(store, self.block(store).inner(area))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<CalendarStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        if event.code == KeyCode::Esc {
            dispatcher.dispatch(Action::Cancel);
            return Some(Message::Handled);
        }

        let inner = self.block(store).inner(area);
        self.0.on_key(dispatcher, store, inner, event)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<CalendarStore>) {
        self.0.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<CalendarStore>) {
        self.0.deactivate(dispatcher, store);
    }
}

fn instructions() -> Line<'static> {
    Line::from(vec![
        " Save ".into(),
        "<Enter>".blue().bold(),
        " Next ".into(),
        "<Tab>".blue().bold(),
        " Cancel ".into(),
        "<Esc> ".blue().bold(),
    ])
}

macro_rules! new_input {
    ($fn: ident, $acc: ident, $field: expr) => {
        fn $fn() -> Input<CalendarStore, $acc> {
            Input::new($field.to_string())
        }

        struct $acc;

        impl Access<CalendarStore, String> for $acc {
            fn get(store: &RefCell<CalendarStore>) -> String {
                store.borrow().view.draft().field($field).to_owned()
            }

            fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
                dispatcher.dispatch(Action::UpdateDraft($field, value));
                true
            }
        }
    };
}

new_input!(new_name, NameAccess, DraftField::Name);
new_input!(new_start, StartAccess, DraftField::Start);
new_input!(new_end, EndAccess, DraftField::End);
new_input!(new_description, DescriptionAccess, DraftField::Description);
