use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::TodoStore;

pub fn run<S: TodoStore>(store: &S) -> Result<CmdResult> {
    let state = store.load()?;
    Ok(CmdResult::default().with_items(state.ordered_items()))
}
