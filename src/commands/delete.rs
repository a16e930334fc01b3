use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodozError};
use crate::model::DeletedItem;
use crate::store::TodoStore;
use uuid::Uuid;

/// Move an item from the active list into the deleted log.
///
/// Snapshot and removal land in one commit, so the item is never in both
/// sets and never in neither.
pub fn run<S: TodoStore>(store: &mut S, id: Uuid) -> Result<CmdResult> {
    let mut state = store.load()?;
    let index = state
        .items
        .iter()
        .position(|item| item.id == id)
        .ok_or(TodozError::ItemNotFound(id))?;

    let item = state.items.remove(index);
    state.deleted.push(DeletedItem::from_item(&item));
    store.commit(&state)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Deleted: {}", item.text)));
    result.items.push(item);
    Ok(result)
}
