use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single task record.
///
/// The on-disk keys are capitalized (`Title`, `Status`) so files written by
/// earlier versions of the tool keep loading. `Id` and `CreatedAt` are filled
/// in when missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Todo {
    pub title: String,
    /// `true` once the todo is done.
    pub status: bool,
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Todo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: false,
            id: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.status {
            "Done"
        } else {
            "Pending"
        }
    }
}

/// Ordered todos. Position in the list is the id shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList(Vec<Todo>);

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Todo> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.0.iter()
    }

    pub(crate) fn push(&mut self, todo: Todo) {
        self.0.push(todo);
    }

    pub(crate) fn replace(&mut self, index: usize, todo: Todo) {
        self.0[index] = todo;
    }

    pub(crate) fn remove(&mut self, index: usize) -> Todo {
        self.0.remove(index)
    }
}

impl From<Vec<Todo>> for TodoList {
    fn from(todos: Vec<Todo>) -> Self {
        Self(todos)
    }
}

impl FromIterator<Todo> for TodoList {
    fn from_iter<I: IntoIterator<Item = Todo>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for TodoList {
    type Item = Todo;
    type IntoIter = std::vec::IntoIter<Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
