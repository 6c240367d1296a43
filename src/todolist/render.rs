use crate::model::{Todo, TodoList};

pub const EMPTY_MESSAGE: &str = "No todo available";

/// Renders one line per todo, `ID: <id> | title: <title> | status: <Done|Pending>`.
pub fn render(list: &TodoList) -> String {
    render_with(list, |todo| todo.status_label().to_string())
}

/// Like [`render`], with the status column produced by `status`.
pub fn render_with<F>(list: &TodoList, status: F) -> String
where
    F: Fn(&Todo) -> String,
{
    if list.is_empty() {
        return format!("{}\n", EMPTY_MESSAGE);
    }

    let mut out = String::new();
    for (index, todo) in list.iter().enumerate() {
        out.push_str(&format!(
            "ID: {} | title: {} | status: {}\n",
            index,
            todo.title,
            status(todo)
        ));
    }
    out
}
