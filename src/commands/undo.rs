use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodozError};
use crate::model::Item;
use crate::store::TodoStore;
use uuid::Uuid;

/// Restore the most recently deleted item.
///
/// The restored item gets a fresh id and is appended to the end of the
/// active order; the original id and position are not reinstated.
pub fn run<S: TodoStore>(store: &mut S) -> Result<CmdResult> {
    let mut state = store.load()?;
    let index = state
        .latest_deleted_index()
        .ok_or(TodozError::NothingToUndo)?;

    let record = state.deleted.remove(index);
    let item = Item {
        id: Uuid::new_v4(),
        text: record.text,
        done: record.done,
        position: state.next_position(),
    };
    state.items.push(item.clone());
    store.commit(&state)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Restored: {}", item.text)));
    result.items.push(item);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, delete, list};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn delete_then_undo_round_trips() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "buy milk".into()).unwrap();
        add::run(&mut store, "walk dog".into()).unwrap();
        let milk = list::run(&store).unwrap().items[0].clone();

        delete::run(&mut store, milk.id).unwrap();
        let texts: Vec<_> = list::run(&store)
            .unwrap()
            .items
            .into_iter()
            .map(|i| i.text)
            .collect();
        assert_eq!(texts, vec!["walk dog"]);

        run(&mut store).unwrap();
        let items = list::run(&store).unwrap().items;
        assert_eq!(items.len(), 2);
        // Restored at the end of the current order, not its old slot
        assert_eq!(items[0].text, "walk dog");
        assert_eq!(items[1].text, "buy milk");
        assert_eq!(items[1].done, milk.done);
        assert_ne!(items[1].id, milk.id);
    }

    #[test]
    fn undo_on_empty_log_fails_and_changes_nothing() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "task".into()).unwrap();

        let err = run(&mut store).unwrap_err();
        assert!(matches!(err, TodozError::NothingToUndo));
        assert_eq!(list::run(&store).unwrap().items.len(), 1);
    }

    #[test]
    fn undo_restores_only_the_most_recent_deletion() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "first".into()).unwrap();
        add::run(&mut store, "second".into()).unwrap();
        let items = list::run(&store).unwrap().items;
        delete::run(&mut store, items[0].id).unwrap();
        delete::run(&mut store, items[1].id).unwrap();

        let result = run(&mut store).unwrap();
        assert_eq!(result.items[0].text, "second");

        let remaining = store.load().unwrap();
        assert_eq!(remaining.deleted.len(), 1);
        assert_eq!(remaining.deleted[0].text, "first");
    }

    #[test]
    fn undo_preserves_the_done_flag() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "task".into()).unwrap();
        let id = list::run(&store).unwrap().items[0].id;
        crate::commands::toggle::run(&mut store, id).unwrap();
        delete::run(&mut store, id).unwrap();

        run(&mut store).unwrap();
        assert!(list::run(&store).unwrap().items[0].done);
    }
}
