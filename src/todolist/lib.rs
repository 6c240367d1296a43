//! # Todolist Architecture
//!
//! A todo list kept in a single JSON file, driven from the command line.
//! The library holds everything but the terminal; the `todo` binary is a thin
//! client over it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, sets up logging, prints, exits         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - load, run one command, save                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Functions from an owned TodoList to a TodoList           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ids
//!
//! The id a user types is the todo's position in the list, starting at 0.
//! Deleting a todo renumbers everything after it. Each record also stores a
//! UUID that never changes, for anything reading the file directly.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: add, done, delete and the id helpers
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Todo` and `TodoList`
//! - [`render`]: Plain-text listing
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod render;
pub mod store;
