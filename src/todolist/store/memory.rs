use super::DataStore;
use crate::error::Result;
use crate::model::TodoList;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    list: TodoList,
    saves: usize,
}

impl InMemoryStore {
    pub fn with_list(list: TodoList) -> Self {
        Self { list, saves: 0 }
    }

    /// Number of times `save` has been called.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<TodoList> {
        Ok(self.list.clone())
    }

    fn save(&mut self, list: &TodoList) -> Result<()> {
        self.list = list.clone();
        self.saves += 1;
        Ok(())
    }
}
