use crate::error::{Result, TodoError};
use crate::model::{Todo, TodoList};

/// Checks that `id` points at an element of `list` and returns it as an index.
pub fn validate_id(list: &TodoList, id: i64) -> Result<usize> {
    if id < 0 {
        return Err(TodoError::Range("ID must be at least 0".to_string()));
    }
    match usize::try_from(id) {
        Ok(index) if index < list.len() => Ok(index),
        _ => Err(TodoError::Range("ID not found".to_string())),
    }
}

pub fn find_by_id(list: &TodoList, id: i64) -> Result<&Todo> {
    let index = validate_id(list, id)?;
    list.get(index).ok_or(TodoError::NotFound(id))
}

/// Replaces the todo at `id` with `todo`.
pub fn update_by_id(mut list: TodoList, todo: Todo, id: i64) -> Result<TodoList> {
    let index = validate_id(&list, id)?;
    list.replace(index, todo);
    Ok(list)
}
