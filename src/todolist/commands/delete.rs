use crate::error::Result;
use crate::model::TodoList;
use tracing::debug;

use super::helpers::validate_id;

/// Removes the todo at `id`. Every later todo moves up one position.
pub fn run(mut list: TodoList, id: i64) -> Result<TodoList> {
    let index = validate_id(&list, id)?;
    let removed = list.remove(index);
    debug!(id, title = %removed.title, "deleted todo");
    Ok(list)
}
