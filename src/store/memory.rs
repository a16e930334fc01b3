use super::TodoStore;
use crate::error::Result;
use crate::model::StoreState;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    state: StoreState,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoStore for InMemoryStore {
    fn load(&self) -> Result<StoreState> {
        Ok(self.state.clone())
    }

    fn commit(&mut self, state: &StoreState) -> Result<()> {
        self.state = state.clone();
        Ok(())
    }
}
