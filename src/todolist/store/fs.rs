use super::DataStore;
use crate::error::{Result, TodoError};
use crate::model::TodoList;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const EMPTY_LIST: &str = "[]";

pub const DEFAULT_STORAGE_DIR: &str = "storage";
pub const DEFAULT_DATA_FILE: &str = "todos.json";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<root>/storage/todos.json`.
    pub fn under(root: &Path) -> Self {
        Self::new(root.join(DEFAULT_STORAGE_DIR).join(DEFAULT_DATA_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the data file holding an empty list if it does not exist yet.
    fn ensure_file(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(TodoError::Io)?;
            }
        }
        fs::write(&self.path, EMPTY_LIST).map_err(TodoError::Io)?;
        info!(path = %self.path.display(), "created empty todo file");
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<TodoList> {
        self.ensure_file()?;

        let content = fs::read_to_string(&self.path).map_err(TodoError::Io)?;
        if content.trim().is_empty() {
            debug!(path = %self.path.display(), "todo file is blank, treating as empty");
            return Ok(TodoList::new());
        }

        let list: TodoList = serde_json::from_str(&content).map_err(TodoError::Serialization)?;
        debug!(path = %self.path.display(), count = list.len(), "loaded todos");
        Ok(list)
    }

    fn save(&mut self, list: &TodoList) -> Result<()> {
        self.ensure_file()?;

        let content = serde_json::to_string(list).map_err(TodoError::Serialization)?;

        fs::write(&self.path, content).map_err(TodoError::Io)?;
        debug!(path = %self.path.display(), count = list.len(), "saved todos");
        Ok(())
    }
}
