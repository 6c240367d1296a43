//! # Storage Layer
//!
//! The [`DataStore`] trait is the only way the rest of the crate reads or
//! writes the todo list. The whole list is loaded at the start of a command
//! and written back wholesale after a mutation.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single JSON file, `storage/todos.json` by default.
//!   The file (and its directory) is created holding `[]` on first load.
//! - [`memory::InMemoryStore`]: no persistence, used by tests.
//!
//! There is no locking and no atomic rename: two processes writing the same
//! file race, and the last writer wins.

use crate::error::Result;
use crate::model::TodoList;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Load the full list in storage order.
    fn load(&self) -> Result<TodoList>;

    /// Replace the stored list with `list`.
    fn save(&mut self, list: &TodoList) -> Result<()>;
}
