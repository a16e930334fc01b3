use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::TodoStore;
use uuid::Uuid;

/// Flip the done flag of the item with the given id.
///
/// Missing ids no-op successfully, same as [`update`](crate::commands::update).
pub fn run<S: TodoStore>(store: &mut S, id: Uuid) -> Result<CmdResult> {
    let mut state = store.load()?;
    let toggled = match state.find_item_mut(id) {
        Some(item) => {
            item.done = !item.done;
            Some(item.clone())
        }
        None => None,
    };

    let mut result = CmdResult::default();
    if let Some(item) = toggled {
        store.commit(&state)?;
        let status = if item.done { "done" } else { "undone" };
        result.add_message(CmdMessage::success(format!(
            "Marked '{}' as {}",
            item.text, status
        )));
        result.items.push(item);
    }
    Ok(result)
}
