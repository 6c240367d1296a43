//! # Command Layer
//!
//! Every todo operation is a plain function that takes the list by value and
//! hands it back, or fails with a [`TodoError`](crate::error::TodoError)
//! without anything having been persisted. Loading and saving is the API's
//! job, so nothing here touches storage.
//!
//! Ids are positional: id `n` is the todo at index `n`. They arrive as `i64`
//! so that a negative id coming from the command line is reported as out of
//! range instead of failing to parse.

use crate::model::TodoList;

pub mod add;
pub mod delete;
pub mod done;
pub mod helpers;

#[derive(Debug, Default)]
pub struct CmdResult {
    /// The list after the command ran.
    pub listed_todos: TodoList,
}

impl CmdResult {
    pub fn with_listed_todos(mut self, list: TodoList) -> Self {
        self.listed_todos = list;
        self
    }
}
