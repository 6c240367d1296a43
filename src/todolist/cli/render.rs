use colored::control::SHOULD_COLORIZE;
use colored::Colorize;
use todolist::model::{Todo, TodoList};
use todolist::render::{render, render_with};

pub const UNKNOWN_COMMAND: &str =
    "Unknown command. Please provide a valid command. See available command using --help flag";

pub(super) fn print_todos(list: &TodoList) {
    if SHOULD_COLORIZE.should_colorize() {
        print!("{}", render_with(list, colored_status));
    } else {
        print!("{}", render(list));
    }
}

fn colored_status(todo: &Todo) -> String {
    let label = todo.status_label();
    if todo.status {
        label.green().to_string()
    } else {
        label.yellow().to_string()
    }
}
