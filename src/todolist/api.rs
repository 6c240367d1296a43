//! # API Facade
//!
//! [`TodoApi`] is the single entry point for the CLI. Each method loads the
//! list from the store, runs one command over it, saves the result when the
//! command changed it, and hands back a [`CmdResult`].
//!
//! A failed command returns before `save`, so the stored list is untouched.
//!
//! `TodoApi<S: DataStore>` is generic over storage: `FileStore` in
//! production, `InMemoryStore` in tests.

use crate::commands;
use crate::error::Result;
use crate::store::DataStore;

pub struct TodoApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> TodoApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_todo(&mut self, title: &str) -> Result<commands::CmdResult> {
        let list = commands::add::run(self.store.load()?, title)?;
        self.store.save(&list)?;
        Ok(CmdResult::default().with_listed_todos(list))
    }

    pub fn list_todos(&self) -> Result<commands::CmdResult> {
        Ok(CmdResult::default().with_listed_todos(self.store.load()?))
    }

    pub fn mark_done(&mut self, id: i64) -> Result<commands::CmdResult> {
        let list = commands::done::run(self.store.load()?, id)?;
        self.store.save(&list)?;
        Ok(CmdResult::default().with_listed_todos(list))
    }

    pub fn delete_todo(&mut self, id: i64) -> Result<commands::CmdResult> {
        let list = commands::delete::run(self.store.load()?, id)?;
        self.store.save(&list)?;
        Ok(CmdResult::default().with_listed_todos(list))
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::CmdResult;
