use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Item;
use crate::store::TodoStore;

pub fn run<S: TodoStore>(store: &mut S, text: String) -> Result<CmdResult> {
    let mut state = store.load()?;
    let item = Item::new(text, state.next_position());
    state.items.push(item.clone());
    store.commit(&state)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Added: {}", item.text)));
    result.items.push(item);
    Ok(result)
}
