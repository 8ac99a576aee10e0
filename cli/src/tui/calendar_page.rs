// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use evplan_core::{DateKey, EditCursor, GridCell, YearMonth, rows};
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::tui::calendar_store::CalendarStore;
use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::event_editor::EventEditor;

/// Width of a day column: two digits, the event marker and a gap.
const CELL_WIDTH: u16 = 4;
const GRID_WIDTH: u16 = 7 * CELL_WIDTH + 2;
const EVENT_MARKER: &str = "•";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Grid,
    Events,
}

/// The calendar page: the month grid, the events of the selected day and the
/// event editor on top of them while a form is open.
pub struct CalendarPage {
    /// The day the grid cursor is on.
    day: u32,
    focus: Focus,
    event_index: usize,
    editor: EventEditor,
}

struct Areas {
    header: Rect,
    grid: Rect,
    events: Rect,
    status: Rect,
}

impl CalendarPage {
    pub fn new(store: &RefCell<CalendarStore>) -> Self {
        Self {
            day: store.borrow().today_in_view().unwrap_or(1),
            focus: Focus::Grid,
            event_index: 0,
            editor: EventEditor::new(),
        }
    }

    fn block(&self) -> Block<'static> {
        Block::bordered()
            .border_set(border::ROUNDED)
            .title(Line::from(" Event Planner ".bold()).centered())
            .title_bottom(self.instructions().centered())
    }

    fn areas(&self, area: Rect) -> Areas {
        let inner = self.block().inner(area);
        let [header, body, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);
        let [grid, events] =
            Layout::horizontal([Constraint::Length(GRID_WIDTH), Constraint::Min(0)]).areas(body);
        Areas {
            header,
            grid,
            events,
            status,
        }
    }

    fn editor_area(&self, area: Rect) -> Rect {
        popup_area(area, EventEditor::WIDTH, self.editor.height())
    }

    fn is_editing(store: &RefCell<CalendarStore>) -> bool {
        store.borrow().view.cursor() != EditCursor::Idle
    }

    fn instructions(&self) -> Line<'static> {
        let keys: &[(&'static str, &'static str)] = match self.focus {
            Focus::Grid => &[
                ("Move", "<Arrows>"),
                ("Month", "<[ ]>"),
                ("Select", "<Enter>"),
                ("Events", "<Tab>"),
                ("Exit", "<q>"),
            ],
            Focus::Events => &[
                ("Add", "<a>"),
                ("Edit", "<e>"),
                ("Delete", "<d>"),
                ("Calendar", "<Tab>"),
                ("Exit", "<q>"),
            ],
        };

        let mut spans: Vec<Span<'static>> = Vec::new();
        for &(label, key) in keys {
            spans.push(format!(" {label} ").into());
            spans.push(key.blue().bold());
        }
        spans.push(" ".into());
        Line::from(spans)
    }

    fn render_header(&self, store: &CalendarStore, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            "◀ ".dark_gray(),
            Span::from(store.view.displayed().to_string()).bold(),
            " ▶".dark_gray(),
        ]);
        line.centered().render(area, buf);
    }

    fn render_grid(&self, store: &CalendarStore, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_set(border::ROUNDED)
            .border_style(focus_style(self.focus == Focus::Grid));
        let inner = block.inner(area);
        block.render(area, buf);

        let view = &store.view;
        let ym = view.displayed();
        let days_with_events = store.view.store().days_in(ym);
        let today = store.today_in_view();

        let labels = view
            .week_start()
            .labels()
            .iter()
            .map(|label| Span::from(format!("{:>2}  ", &label[..2])).italic())
            .collect::<Vec<_>>();
        let mut lines = vec![Line::from(labels)];

        let cells = view.grid();
        for week in rows(&cells) {
            let spans = week
                .iter()
                .flat_map(|cell| match cell {
                    GridCell::Blank => vec![Span::from("    ")],
                    GridCell::Day(day) => {
                        let marker = match days_with_events.contains(day) {
                            true => EVENT_MARKER,
                            false => " ",
                        };
                        let style = self.day_style(store, ym, *day, today);
                        vec![
                            Span::styled(format!("{day:>2}"), style),
                            Span::from(marker).yellow(),
                            Span::from(" "),
                        ]
                    }
                })
                .collect::<Vec<_>>();
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).render(inner, buf);
    }

    fn day_style(
        &self,
        store: &CalendarStore,
        ym: YearMonth,
        day: u32,
        today: Option<u32>,
    ) -> Style {
        let mut style = Style::new();
        if DateKey::in_month(ym, day).is_past(store.now) {
            style = style.dark_gray();
        } else if today == Some(day) {
            style = style.green().bold();
        }

        if store.view.selected() == Some(day) {
            style = style.reversed();
        }
        if self.focus == Focus::Grid && self.day == day {
            style = style.underlined().blue();
        }
        style
    }

    fn render_events(&self, store: &CalendarStore, area: Rect, buf: &mut Buffer) {
        let view = &store.view;
        let ym = view.displayed();
        let title = match view.selected() {
            Some(day) => format!(" Events on {} {}, {} ", ym.name(), day, ym.year()),
            None => " Events ".to_string(),
        };
        let block = Block::bordered()
            .border_set(border::ROUNDED)
            .border_style(focus_style(self.focus == Focus::Events))
            .title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = match view.selected() {
            None => vec![Line::from("Select a day to see its events".italic().dark_gray())],
            Some(_) if view.selected_events().is_empty() => {
                vec![Line::from("No events, press <a> to add one".italic().dark_gray())]
            }
            Some(_) => {
                let mut lines = Vec::new();
                for (i, event) in view.selected_events().iter().enumerate() {
                    let mut line = Line::from(vec![
                        format!("{}. ", i + 1).into(),
                        Span::from(event.time_span()).cyan(),
                        " ".into(),
                        Span::from(event.name.clone()).bold(),
                    ]);
                    if self.focus == Focus::Events && self.event_index == i {
                        line = line.reversed();
                    }
                    lines.push(line);

                    if !event.description.is_empty() {
                        let description = format!("   {}", event.description);
                        lines.push(Line::from(Span::from(description).dark_gray()));
                    }
                }
                lines
            }
        };
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }

    fn move_day(&mut self, store: &RefCell<CalendarStore>, delta: i32) {
        let days = store.borrow().view.displayed().days_in_month() as i32;
        self.day = (self.day as i32 + delta).clamp(1, days) as u32;
    }

    fn change_month(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<CalendarStore>,
        delta: i32,
    ) {
        dispatcher.dispatch(Action::ChangeMonth(delta));
        self.day = store.borrow().today_in_view().unwrap_or(1);
        self.focus = Focus::Grid;
        self.event_index = 0;
    }

    fn open_editor(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<CalendarStore>,
        action: Action,
    ) {
        dispatcher.dispatch(action);
        if Self::is_editing(store) {
            self.editor = EventEditor::new();
            self.editor.activate(dispatcher, store);
        }
    }

    fn on_grid_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<CalendarStore>,
        event: KeyEvent,
    ) -> Option<Message> {
        match event.code {
            KeyCode::Left | KeyCode::Char('h') => self.move_day(store, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_day(store, 1),
            KeyCode::Up | KeyCode::Char('k') => self.move_day(store, -7),
            KeyCode::Down | KeyCode::Char('j') => self.move_day(store, 7),
            KeyCode::Enter | KeyCode::Char(' ') => {
                dispatcher.dispatch(Action::SelectDay(self.day));
                if store.borrow().view.selected() == Some(self.day) {
                    self.focus = Focus::Events;
                    self.event_index = 0;
                }
            }
            _ => return None,
        }
        Some(Message::Handled)
    }

    fn on_events_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<CalendarStore>,
        event: KeyEvent,
    ) -> Option<Message> {
        let len = store.borrow().view.selected_events().len();
        match event.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.event_index = self.event_index.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') if self.event_index + 1 < len => {
                self.event_index += 1;
            }
            KeyCode::Char('a') => self.open_editor(dispatcher, store, Action::BeginCreate),
            KeyCode::Char('e') | KeyCode::Enter if len > 0 => {
                self.open_editor(dispatcher, store, Action::BeginEdit(self.event_index));
            }
            KeyCode::Char('d') | KeyCode::Delete if len > 0 => {
                dispatcher.dispatch(Action::DeleteEvent(self.event_index));
                self.event_index = self.event_index.min(len.saturating_sub(2));
            }
            KeyCode::Esc => self.focus = Focus::Grid,
            _ => return None,
        }
        Some(Message::Handled)
    }
}

impl Component<CalendarStore> for CalendarPage {
    fn render(&self, store: &RefCell<CalendarStore>, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let areas = self.areas(area);
        block.render(area, buf);

        {
            let store = store.borrow();
            self.render_header(&store, areas.header, buf);
            self.render_grid(&store, areas.grid, buf);
            self.render_events(&store, areas.events, buf);
            if let Some(message) = &store.message {
                Line::from(message.as_str().yellow()).render(areas.status, buf);
            }
        }

        if Self::is_editing(store) {
            let popup = self.editor_area(area);
            Clear.render(popup, buf);
            self.editor.render(store, popup, buf);
        }
    }

    fn get_cursor_position(
        &self,
        store: &RefCell<CalendarStore>,
        area: Rect,
    ) -> Option<(u16, u16)> {
        match Self::is_editing(store) {
            true => self.editor.get_cursor_position(store, self.editor_area(area)),
            false => None,
        }
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<CalendarStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        if Self::is_editing(store) {
            let popup = self.editor_area(area);
            let msg = self.editor.on_key(dispatcher, store, popup, event);
            return Some(msg.unwrap_or(Message::Handled));
        }

        let msg = match self.focus {
            Focus::Grid => self.on_grid_key(dispatcher, store, event),
            Focus::Events => self.on_events_key(dispatcher, store, event),
        };
        if msg.is_some() {
            return msg;
        }

        match event.code {
            KeyCode::PageUp | KeyCode::Char('[') => self.change_month(dispatcher, store, -1),
            KeyCode::PageDown | KeyCode::Char(']') => self.change_month(dispatcher, store, 1),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Grid if store.borrow().view.selected().is_some() => Focus::Events,
                    _ => Focus::Grid,
                };
            }
            KeyCode::Char('q') | KeyCode::Esc => return Some(Message::Exit),
            _ => return None,
        }
        Some(Message::Handled)
    }
}

fn focus_style(focused: bool) -> Style {
    match focused {
        true => Style::new().blue(),
        false => Style::new(),
    }
}

fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    area
}
