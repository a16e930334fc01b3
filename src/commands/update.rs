use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::TodoStore;
use uuid::Uuid;

/// Replace the text of the item with the given id.
///
/// A missing id updates nothing and still reports success, mirroring an
/// UPDATE that affects zero rows.
pub fn run<S: TodoStore>(store: &mut S, id: Uuid, text: String) -> Result<CmdResult> {
    let mut state = store.load()?;
    let updated = match state.find_item_mut(id) {
        Some(item) => {
            item.text = text;
            Some(item.clone())
        }
        None => None,
    };

    let mut result = CmdResult::default();
    if let Some(item) = updated {
        store.commit(&state)?;
        result.add_message(CmdMessage::success(format!("Updated: {}", item.text)));
        result.items.push(item);
    }
    Ok(result)
}
