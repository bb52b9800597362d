//! Frontend Models
//!
//! Task entities and the shape they take in local storage.

use serde::{Deserialize, Serialize};

/// Session-scoped task identifier.
///
/// Allocated when a task enters the list and never persisted; list position
/// is the only thing that survives a reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u32);

/// A single to-do entry
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

impl Task {
    /// The edit control is only live for unchecked tasks
    pub fn is_editable(&self) -> bool {
        !self.completed
    }
}

/// Persisted task entry (`{ "text": ..., "completed": ... }`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredTask {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl StoredTask {
    #[cfg(test)]
    pub fn new(text: impl Into<String>, completed: bool) -> Self {
        Self {
            text: text.into(),
            completed,
        }
    }
}

impl From<&Task> for StoredTask {
    fn from(task: &Task) -> Self {
        Self {
            text: task.text.clone(),
            completed: task.completed,
        }
    }
}
