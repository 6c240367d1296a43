use crate::error::{Result, TodoError};
use crate::model::{Todo, TodoList};
use tracing::debug;

pub fn run(mut list: TodoList, title: &str) -> Result<TodoList> {
    if title.is_empty() {
        return Err(TodoError::Validation("Title required".to_string()));
    }

    list.push(Todo::new(title));
    debug!(id = list.len() - 1, title, "added todo");
    Ok(list)
}
