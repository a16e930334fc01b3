use crate::commands::{CmdMessage, CmdResult, StoreLocation};
use crate::error::Result;
use crate::store::TodoStore;

/// Report which store this invocation resolves to and how full it is.
pub fn run<S: TodoStore>(store: &S, location: &StoreLocation) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let label = match location {
        StoreLocation::Project(_) => "LOCAL",
        StoreLocation::Home(_) => "GLOBAL",
    };
    result.add_message(CmdMessage::info(format!(
        "Using {} todo store: {}",
        label,
        location.data_file().display()
    )));

    if location.data_file().exists() {
        let state = store.load()?;
        result.add_message(CmdMessage::info(format!(
            "Total todos: {}",
            state.items.len()
        )));
    } else {
        result.add_message(CmdMessage::warning("Store file does not exist yet."));
    }

    Ok(result)
}
