// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, rc::Rc};

use evplan_core::CalendarView;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::*;

use crate::tui::calendar_page::CalendarPage;
use crate::tui::calendar_store::CalendarStore;
use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;
use crate::util::local_now;

/// Runs the interactive calendar until the user quits, returning the final
/// state of the view.
pub fn run_calendar(view: CalendarView) -> Result<CalendarView, Box<dyn Error>> {
    let store = Rc::new(RefCell::new(CalendarStore::new(view, local_now())));

    let mut terminal = ratatui::init();
    let result: Result<(), Box<dyn Error>> = {
        let mut dispatcher = Dispatcher::new();
        CalendarStore::register_to(store.clone(), &mut dispatcher);
        let mut page = CalendarPage::new(&store);
        let mut area = Rect::default();

        loop {
            if let Err(e) = terminal.draw(|frame| {
                area = frame.area();
                draw(&page, &store, frame);
            }) {
                break Err(e.into());
            }

            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    store.borrow_mut().refresh_now(local_now());
                    if let Some(Message::Exit) = page.on_key(&mut dispatcher, &store, area, key) {
                        break Ok(());
                    }
                }
                Ok(_) => {} // redraw on resize and ignore the others
                Err(e) => break Err(e.into()),
            }
        }
    }; // release dispatcher and page here to avoid borrow conflicts
    ratatui::restore();
    result?;

    let owned_store = Rc::try_unwrap(store)
        .map_err(|_| "Store still has references")?
        .into_inner();
    Ok(owned_store.view)
}

fn draw(page: &CalendarPage, store: &RefCell<CalendarStore>, frame: &mut Frame) {
    let area = frame.area();
    page.render(store, area, frame.buffer_mut());

    if let Some(position) = page.get_cursor_position(store, area) {
        frame.set_cursor_position(position);
    }
}
