// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::util::{
    byte_offset_of_grapheme, byte_range_of_grapheme, grapheme_count, width_of_graphemes,
};

/// Height of a form item: title, value and the gap below.
const ITEM_HEIGHT: u16 = 3;

/// A vertical list of items, one of which is focused.
///
/// Enter dispatches [`Action::Save`].
pub struct Form<S, C: FormItem<S>> {
    items: Vec<C>,
    item_index: usize,
    _phantom: std::marker::PhantomData<S>,
}

impl<S, C: FormItem<S>> Form<S, C> {
    pub fn new(items: Vec<C>) -> Self {
        Self {
            items,
            item_index: 0,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Height needed to show every item.
    pub fn height(&self) -> u16 {
        ITEM_HEIGHT * self.items.len() as u16 + 2 // margin
    }

    fn layout(&self) -> Layout {
        Layout::vertical(self.items.iter().map(|_| Constraint::Max(ITEM_HEIGHT))).margin(1)
    }

    fn navigate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>, offset: isize) {
        if let Some(a) = self.items.get_mut(self.item_index) {
            a.deactivate(dispatcher, store);
        }

        let len = self.items.len() as isize;
        self.item_index = (self.item_index as isize + offset).rem_euclid(len) as usize;

        if let Some(a) = self.items.get_mut(self.item_index) {
            a.activate(dispatcher, store);
        }
    }
}

impl<S, C: FormItem<S>> Component<S> for Form<S, C> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let areas = self.layout().split(area);
        let last = self.items.len().saturating_sub(1);
        // draw the last item first, so the connector of an item overrides the gap above it
        for (i, (item, area)) in self.items.iter().zip(areas.iter()).enumerate().rev() {
            item_render(i == last, item, store, *area, buf);
            item.render(store, item_inner(*area), buf);
        }
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        let areas = self.layout().split(area);
        let item = self.items.get(self.item_index)?;
        let area = areas.get(self.item_index)?;
        item.get_cursor_position(store, *area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let areas = self.layout().split(area);
        if let (Some(item), Some(subarea)) =
            (self.items.get_mut(self.item_index), areas.get(self.item_index))
            && let Some(msg) = item.on_key(dispatcher, store, *subarea, event)
        {
            return Some(msg);
        };

        match event.code {
            KeyCode::Up | KeyCode::BackTab => {
                self.navigate(dispatcher, store, -1);
                Some(Message::CursorUpdated)
            }
            KeyCode::Down | KeyCode::Tab => {
                self.navigate(dispatcher, store, 1);
                Some(Message::CursorUpdated)
            }
            KeyCode::Enter => {
                dispatcher.dispatch(Action::Save);
                Some(Message::Handled)
            }
            _ => None,
        }
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        if let Some(item) = self.items.get_mut(self.item_index) {
            item.activate(dispatcher, store);
        }
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        if let Some(item) = self.items.get_mut(self.item_index) {
            item.deactivate(dispatcher, store);
        }
    }
}

pub trait FormItem<S>: Component<S> {
    fn item_title(&self, store: &RefCell<S>) -> &str;
    fn item_state(&self, store: &RefCell<S>) -> FormItemState;
}

impl<S> Component<S> for Box<dyn FormItem<S>> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        (**self).render(store, area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        (**self).get_cursor_position(store, area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        (**self).on_key(dispatcher, store, area, event)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        (**self).activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        (**self).deactivate(dispatcher, store);
    }
}

impl<S> FormItem<S> for Box<dyn FormItem<S>> {
    fn item_title(&self, store: &RefCell<S>) -> &str {
        (**self).item_title(store)
    }

    fn item_state(&self, store: &RefCell<S>) -> FormItemState {
        (**self).item_state(store)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormItemState {
    /// The item has focus.
    Active,

    /// The item does not have focus.
    Inactive,
}

/// Reads a value from the store and writes it back through the dispatcher.
pub trait Access<S, T: ToOwned> {
    fn get(store: &RefCell<S>) -> T;
    fn set(dispatcher: &mut Dispatcher, value: T) -> bool;
}

/// A single line text input, edited by grapheme clusters.
#[derive(Debug)]
pub struct Input<S, A: Access<S, String>> {
    title: String,
    active: bool,
    character_index: usize,
    _phantom_s: std::marker::PhantomData<S>,
    _phantom_a: std::marker::PhantomData<A>,
}

impl<S, A: Access<S, String>> Input<S, A> {
    pub fn new(title: impl ToString) -> Self {
        Self {
            title: title.to_string(),
            active: false,
            character_index: 0,
            _phantom_a: std::marker::PhantomData,
            _phantom_s: std::marker::PhantomData,
        }
    }
}

impl<S, A: Access<S, String>> Component<S> for Input<S, A> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let v = A::get(store);
        Paragraph::new(v.as_str()).render(area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        if !self.active {
            return None;
        }

        let v = A::get(store);
        let width = width_of_graphemes(v.as_str(), self.character_index);
        let x = area.x + (width as u16) + 2; // sider 1 + padding 1
        let y = area.y + 1; // title line
        Some((x, y))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        use KeyCode::*;
        if !self.active || !matches!(event.code, Left | Right | Home | End | Backspace | Char(_)) {
            return None;
        }

        let mut v = A::get(store);
        match event.code {
            Left if self.character_index > 0 => self.character_index -= 1,
            Right if self.character_index < grapheme_count(&v) => self.character_index += 1,
            Home => self.character_index = 0,
            End => self.character_index = grapheme_count(&v),
            Backspace if self.character_index > 0 => {
                if let Some(range) = byte_range_of_grapheme(&v, self.character_index - 1) {
                    v.replace_range(range, "");
                    if A::set(dispatcher, v) {
                        self.character_index -= 1;
                    }
                }
            }
            Char(c) => {
                let byte_index = byte_offset_of_grapheme(&v, self.character_index);
                let before = grapheme_count(&v);
                v.insert(byte_index, c);
                // a combining mark joins the previous cluster
                let after = grapheme_count(&v);
                if A::set(dispatcher, v) {
                    self.character_index += after - before;
                }
            }
            _ => {}
        };

        Some(Message::CursorUpdated)
    }

    fn activate(&mut self, _dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.active = true;
        self.character_index = grapheme_count(&A::get(store));
    }

    fn deactivate(&mut self, _dispatcher: &mut Dispatcher, _store: &RefCell<S>) {
        self.active = false;
        self.character_index = 0;
    }
}

impl<S, A: Access<S, String>> FormItem<S> for Input<S, A> {
    fn item_title(&self, _store: &RefCell<S>) -> &str {
        &self.title
    }

    fn item_state(&self, _store: &RefCell<S>) -> FormItemState {
        if self.active {
            FormItemState::Active
        } else {
            FormItemState::Inactive
        }
    }
}

const S_STEP_ACTIVE: &str = "◆";
const S_STEP_INACTIVE: &str = "◇";
const S_SIDER_CONNECTOR: &str = "│";
const S_SIDER_BOTTOM: &str = "└";

fn item_render<S>(
    is_last: bool,
    item: &impl FormItem<S>,
    store: &RefCell<S>,
    area: Rect,
    buf: &mut Buffer,
) {
    let state = item.item_state(store);
    let color = match state {
        FormItemState::Active => Color::Blue,
        FormItemState::Inactive => Color::Gray,
    };

    let area_title = Rect::new(area.x + 2, area.y, area.width.saturating_sub(2), 1);
    Clear.render(area_title, buf);
    Paragraph::new(item.item_title(store))
        .bold()
        .fg(color)
        .render(area_title, buf);

    if let Some(c) = buf.cell_mut((area.x, area.y)) {
        let symbol = match state {
            FormItemState::Active => S_STEP_ACTIVE,
            FormItemState::Inactive => S_STEP_INACTIVE,
        };
        c.set_symbol(symbol);
        c.set_fg(color);
    }

    for y in 1..area.height.saturating_sub(1) {
        if let Some(c) = buf.cell_mut((area.x, area.y + y)) {
            c.set_symbol(S_SIDER_CONNECTOR);
            c.set_fg(color);
        }
    }

    if let Some(c) = buf.cell_mut((area.x, area.y + area.height.saturating_sub(1))) {
        let symbol = if is_last {
            S_SIDER_BOTTOM
        } else {
            S_SIDER_CONNECTOR
        };
        c.set_symbol(symbol);
        c.set_fg(color);
    }
}

fn item_inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

#[cfg(test)]
mod tests {
    use ratatui::crossterm::event::KeyModifiers;

    use super::*;

    #[derive(Default)]
    struct TextStore {
        text: String,
        saved: bool,
    }

    struct TextAccess;

    thread_local! {
        static PENDING: RefCell<Option<String>> = const { RefCell::new(None) };
    }

    impl Access<TextStore, String> for TextAccess {
        fn get(store: &RefCell<TextStore>) -> String {
            store.borrow().text.clone()
        }

        fn set(_dispatcher: &mut Dispatcher, value: String) -> bool {
            PENDING.with(|p| *p.borrow_mut() = Some(value));
            true
        }
    }

    fn press(
        input: &mut Input<TextStore, TextAccess>,
        store: &RefCell<TextStore>,
        code: KeyCode,
    ) {
        let mut dispatcher = Dispatcher::new();
        let event = KeyEvent::new(code, KeyModifiers::NONE);
        input.on_key(&mut dispatcher, store, Rect::new(0, 0, 20, 3), event);
        if let Some(v) = PENDING.with(|p| p.borrow_mut().take()) {
            store.borrow_mut().text = v;
        }
    }

    #[test]
    fn test_input_typing() {
        let store = RefCell::new(TextStore::default());
        let mut input = Input::<TextStore, TextAccess>::new("Name");
        input.activate(&mut Dispatcher::new(), &store);

        for c in "held".chars() {
            press(&mut input, &store, KeyCode::Char(c));
        }
        press(&mut input, &store, KeyCode::Left);
        press(&mut input, &store, KeyCode::Char('l'));
        press(&mut input, &store, KeyCode::End);
        press(&mut input, &store, KeyCode::Backspace);
        press(&mut input, &store, KeyCode::Char('o'));
        assert_eq!(store.borrow().text, "hello");
    }

    #[test]
    fn test_input_inactive_ignores_keys() {
        let store = RefCell::new(TextStore::default());
        let mut input = Input::<TextStore, TextAccess>::new("Name");
        press(&mut input, &store, KeyCode::Char('x'));
        assert_eq!(store.borrow().text, "");
    }

    #[test]
    fn test_input_cursor_position() {
        let store = RefCell::new(TextStore {
            text: "中a".to_string(),
            saved: false,
        });
        let mut input = Input::<TextStore, TextAccess>::new("Name");
        let area = Rect::new(4, 2, 20, 3);
        assert_eq!(input.get_cursor_position(&store, area), None);

        input.activate(&mut Dispatcher::new(), &store);
        assert_eq!(input.get_cursor_position(&store, area), Some((4 + 3 + 2, 3)));
    }

    #[test]
    fn test_form_enter_saves() {
        let store = std::rc::Rc::new(RefCell::new(TextStore::default()));
        let mut dispatcher = Dispatcher::new();
        let that = store.clone();
        dispatcher.register(std::rc::Rc::new(RefCell::new(move |action: &Action| {
            if *action == Action::Save {
                that.borrow_mut().saved = true;
            }
        })));

        let items: Vec<Box<dyn FormItem<TextStore>>> =
            vec![Box::new(Input::<TextStore, TextAccess>::new("Name"))];
        let mut form = Form::new(items);
        form.activate(&mut dispatcher, &store);

        let event = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let msg = form.on_key(&mut dispatcher, &store, Rect::new(0, 0, 30, 10), event);
        assert_eq!(msg, Some(Message::Handled));
        assert!(store.borrow().saved);
    }

    #[test]
    fn test_form_renders_titles() {
        let store = RefCell::new(TextStore {
            text: "value".to_string(),
            saved: false,
        });
        let items: Vec<Box<dyn FormItem<TextStore>>> = vec![
            Box::new(Input::<TextStore, TextAccess>::new("First")),
            Box::new(Input::<TextStore, TextAccess>::new("Second")),
        ];
        let form = Form::new(items);
        let area = Rect::new(0, 0, 20, form.height());
        let mut buf = Buffer::empty(area);
        form.render(&store, area, &mut buf);

        let line = |y: u16| -> String {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect()
        };
        assert!(line(1).contains("First"));
        assert!(line(2).contains("value"));
        assert!(line(4).contains("Second"));
        assert!(line(6).contains(S_SIDER_BOTTOM));
    }
}
