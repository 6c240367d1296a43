use crate::error::Result;
use crate::model::TodoList;
use tracing::debug;

use super::helpers::{find_by_id, update_by_id};

/// Marks the todo at `id` as done. Marking a done todo again is a no-op.
pub fn run(list: TodoList, id: i64) -> Result<TodoList> {
    let mut todo = find_by_id(&list, id)?.clone();
    todo.status = true;
    debug!(id, title = %todo.title, "marked todo done");
    update_by_id(list, todo, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TodoError;
    use crate::model::Todo;

    #[test]
    fn only_target_changes() {
        let before = TodoList::from(vec![Todo::new("A"), Todo::new("B"), Todo::new("C")]);
        let after = run(before.clone(), 1).unwrap();

        assert!(after.get(1).unwrap().status);
        assert_eq!(after.get(0), before.get(0));
        assert_eq!(after.get(2), before.get(2));
        assert_eq!(after.get(1).unwrap().id, before.get(1).unwrap().id);
    }

    #[test]
    fn already_done_stays_done() {
        let list = run(TodoList::from(vec![Todo::new("A")]), 0).unwrap();
        let list = run(list, 0).unwrap();
        assert!(list.get(0).unwrap().status);
    }

    #[test]
    fn out_of_range() {
        let list = TodoList::from(vec![Todo::new("A")]);
        assert!(matches!(run(list.clone(), 1), Err(TodoError::Range(_))));
        assert!(matches!(run(list, -1), Err(TodoError::Range(_))));
    }
}
