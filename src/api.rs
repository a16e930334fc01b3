//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for all todoz operations, regardless of the UI in
//! front of it (one-shot CLI or interactive session).
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (1-based display positions → stable item ids)
//! - **Returns structured types** (`Result<CmdResult>`), never prints
//!
//! `TodozApi<S: TodoStore>` is generic over the storage backend:
//! production uses `TodozApi<FileStore>`, tests use
//! `TodozApi<InMemoryStore>`.

use crate::commands;
use crate::commands::move_item::Direction;
use crate::commands::StoreLocation;
use crate::error::{Result, TodozError};
use crate::store::TodoStore;
use uuid::Uuid;

pub struct TodozApi<S: TodoStore> {
    store: S,
}

impl<S: TodoStore> TodozApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add(&mut self, text: String) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, text)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn edit(&mut self, id: Uuid, text: String) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, text)
    }

    pub fn edit_at(&mut self, index: usize, text: String) -> Result<commands::CmdResult> {
        let id = self.resolve_index(index)?;
        self.edit(id, text)
    }

    pub fn toggle(&mut self, id: Uuid) -> Result<commands::CmdResult> {
        commands::toggle::run(&mut self.store, id)
    }

    pub fn toggle_at(&mut self, index: usize) -> Result<commands::CmdResult> {
        let id = self.resolve_index(index)?;
        self.toggle(id)
    }

    pub fn delete(&mut self, id: Uuid) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn delete_at(&mut self, index: usize) -> Result<commands::CmdResult> {
        let id = self.resolve_index(index)?;
        self.delete(id)
    }

    pub fn undo(&mut self) -> Result<commands::CmdResult> {
        commands::undo::run(&mut self.store)
    }

    pub fn move_item(&mut self, id: Uuid, direction: Direction) -> Result<commands::CmdResult> {
        commands::move_item::run(&mut self.store, id, direction)
    }

    pub fn status(&self, location: &StoreLocation) -> Result<commands::CmdResult> {
        commands::status::run(&self.store, location)
    }

    /// Resolve a 1-based display position against the current ordered list.
    fn resolve_index(&self, index: usize) -> Result<Uuid> {
        let items = commands::list::run(&self.store)?.items;
        if index == 0 || index > items.len() {
            return Err(TodozError::IndexOutOfRange(index));
        }
        Ok(items[index - 1].id)
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api_with(texts: &[&str]) -> TodozApi<InMemoryStore> {
        let mut api = TodozApi::new(InMemoryStore::new());
        for text in texts {
            api.add((*text).into()).unwrap();
        }
        api
    }

    #[test]
    fn indexes_are_one_based() {
        let mut api = api_with(&["first", "second"]);
        let result = api.toggle_at(1).unwrap();
        assert!(result.messages[0].content.contains("first"));
    }

    #[test]
    fn index_zero_is_out_of_range() {
        let mut api = api_with(&["only"]);
        let err = api.delete_at(0).unwrap_err();
        assert!(matches!(err, TodozError::IndexOutOfRange(0)));
    }

    #[test]
    fn index_past_the_end_is_out_of_range() {
        let mut api = api_with(&["only"]);
        let err = api.edit_at(2, "text".into()).unwrap_err();
        assert!(matches!(err, TodozError::IndexOutOfRange(2)));
    }

    #[test]
    fn index_resolution_follows_display_order() {
        let mut api = api_with(&["a", "b", "c"]);
        // Move "c" to the top, then index 1 must address it
        let c = api.list().unwrap().items[2].clone();
        api.move_item(c.id, Direction::Up).unwrap();
        api.move_item(c.id, Direction::Up).unwrap();

        let result = api.delete_at(1).unwrap();
        assert!(result.messages[0].content.contains("c"));
    }
}
