//! # Todo CLI
//!
//! The binary only invokes `cli::run()` and turns an error into exit code 1.
//! Everything else lives in the `todolist` library or in `cli/`.

use todolist::error::TodoError;

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        match e {
            TodoError::MissingCommand => println!("{}", e),
            _ => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}
