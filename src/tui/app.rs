use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use uuid::Uuid;

use crate::api::TodozApi;
use crate::commands::move_item::Direction;
use crate::error::TodozError;
use crate::model::Item;
use crate::store::TodoStore;

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Navigate the list; single-key commands.
    List,
    /// Text entry for a new item.
    Add,
    /// Text entry replacing the text of an existing item.
    Edit { id: Uuid },
}

pub struct App<S: TodoStore> {
    pub api: TodozApi<S>,
    pub items: Vec<Item>,
    pub cursor: usize,
    pub mode: Mode,
    pub input: String,
    pub error: Option<TodozError>,
    pub should_quit: bool,
}

impl<S: TodoStore> App<S> {
    pub fn new(api: TodozApi<S>) -> Self {
        let mut app = Self {
            api,
            items: Vec::new(),
            cursor: 0,
            mode: Mode::List,
            input: String::new(),
            error: None,
            should_quit: false,
        };
        app.reload();
        app
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Once a store operation has failed the session freezes into an
        // error display; quitting is the only way out.
        if self.error.is_some() {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                self.should_quit = true;
            }
            return;
        }

        match self.mode {
            Mode::List => self.handle_list_key(key),
            Mode::Add | Mode::Edit { .. } => self.handle_input_key(key),
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,

            KeyCode::Up if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_current(Direction::Up);
            }
            KeyCode::Down if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_current(Direction::Down);
            }

            KeyCode::Up | KeyCode::Char('k') => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < self.items.len() {
                    self.cursor += 1;
                }
            }

            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_current(),

            KeyCode::Char('K') => self.move_current(Direction::Up),
            KeyCode::Char('J') => self.move_current(Direction::Down),

            KeyCode::Char('a') => {
                self.input.clear();
                self.mode = Mode::Add;
            }
            KeyCode::Char('e') => {
                if let Some(item) = self.items.get(self.cursor) {
                    self.input = item.text.clone();
                    self.mode = Mode::Edit { id: item.id };
                }
            }
            KeyCode::Char('d') => self.delete_current(),
            KeyCode::Char('r') => self.reload(),

            _ => {}
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input.clear();
                self.mode = Mode::List;
            }
            KeyCode::Enter => self.confirm_input(),
            // pop() removes a whole scalar value, so multi-byte text
            // survives repeated backspacing
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
            }
            _ => {}
        }
    }

    fn confirm_input(&mut self) {
        if !self.input.is_empty() {
            let text = std::mem::take(&mut self.input);
            let outcome = match self.mode {
                Mode::Add => self.api.add(text).map(|_| true),
                Mode::Edit { id } => self.api.edit(id, text).map(|_| false),
                Mode::List => return,
            };
            match outcome {
                Ok(cursor_to_end) => {
                    self.reload();
                    if cursor_to_end && !self.items.is_empty() {
                        self.cursor = self.items.len() - 1;
                    }
                }
                Err(e) => {
                    self.error = Some(e);
                    return;
                }
            }
        }
        self.input.clear();
        self.mode = Mode::List;
    }

    fn toggle_current(&mut self) {
        let Some(item) = self.items.get(self.cursor) else {
            return;
        };
        let id = item.id;
        match self.api.toggle(id) {
            // Optimistic in-memory flip; no full reload for a toggle
            Ok(_) => {
                if let Some(item) = self.items.get_mut(self.cursor) {
                    item.done = !item.done;
                }
            }
            Err(e) => self.error = Some(e),
        }
    }

    fn delete_current(&mut self) {
        let Some(item) = self.items.get(self.cursor) else {
            return;
        };
        let id = item.id;
        if let Err(e) = self.api.delete(id) {
            self.error = Some(e);
            return;
        }
        self.reload();
    }

    fn move_current(&mut self, direction: Direction) {
        if self.items.is_empty() {
            return;
        }
        let at_edge = match direction {
            Direction::Up => self.cursor == 0,
            Direction::Down => self.cursor + 1 >= self.items.len(),
        };
        if at_edge {
            return;
        }
        let id = self.items[self.cursor].id;
        if let Err(e) = self.api.move_item(id, direction) {
            self.error = Some(e);
            return;
        }
        self.reload();
        if self.error.is_none() {
            // The cursor follows the item it moved
            match direction {
                Direction::Up => self.cursor -= 1,
                Direction::Down => self.cursor += 1,
            }
            self.clamp_cursor();
        }
    }

    fn reload(&mut self) {
        match self.api.list() {
            Ok(result) => {
                self.items = result.items;
                self.clamp_cursor();
            }
            Err(e) => self.error = Some(e),
        }
    }

    fn clamp_cursor(&mut self) {
        if self.items.is_empty() {
            self.cursor = 0;
        } else if self.cursor >= self.items.len() {
            self.cursor = self.items.len() - 1;
        }
    }
}
