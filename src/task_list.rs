//! Task List State
//!
//! Ordered task sequence plus the session-scoped edit marker. All mutation
//! rules live here; the controller only adds side effects (input field,
//! persistence, celebration).

use crate::models::{StoredTask, Task, TaskId};
use crate::progress::{Layout, Progress};

/// Result of submitting the input field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Blank input, nothing changed
    Ignored,
    /// New task appended at the end
    Appended(TaskId),
    /// Text written into the task that was being edited
    Committed(TaskId),
}

/// A task removed by `delete`
#[derive(Debug, Clone, PartialEq)]
pub struct Removed {
    pub task: Task,
    /// The removed task was the edit target; the pending edit is gone
    pub abandoned_edit: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u32,
    editing: Option<TaskId>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a list from persisted entries, in stored order
    #[cfg(test)]
    pub fn from_stored(entries: impl IntoIterator<Item = StoredTask>) -> Self {
        let mut list = Self::new();
        list.restore_all(entries);
        list
    }

    /// Replay persisted entries at the end of the list
    pub fn restore_all(&mut self, entries: impl IntoIterator<Item = StoredTask>) {
        for entry in entries {
            self.restore(entry.text, entry.completed);
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Task currently receiving the next submit, if any
    pub fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    pub fn is_editing(&self, id: TaskId) -> bool {
        self.editing == Some(id)
    }

    fn allocate_id(&mut self) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        id
    }

    fn push(&mut self, text: String, completed: bool) -> TaskId {
        let id = self.allocate_id();
        self.tasks.push(Task { id, text, completed });
        id
    }

    /// User submit: trims, ignores blank input, commits a pending edit in
    /// place or appends a fresh unchecked task.
    pub fn submit(&mut self, raw: &str) -> AddOutcome {
        let text = raw.trim();
        if text.is_empty() {
            return AddOutcome::Ignored;
        }

        if let Some(id) = self.editing.take() {
            if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
                task.text = text.to_string();
                return AddOutcome::Committed(id);
            }
            // Edit target vanished underneath us; fall through to append.
        }

        AddOutcome::Appended(self.push(text.to_string(), false))
    }

    /// Append a persisted entry as-is (no trimming, no validation)
    pub fn restore(&mut self, text: impl Into<String>, completed: bool) -> TaskId {
        self.push(text.into(), completed)
    }

    /// Mark `id` as the edit target and hand back its text for the input
    /// field. Completed and unknown tasks are refused.
    pub fn begin_edit(&mut self, id: TaskId) -> Option<String> {
        let task = self.get(id)?;
        if !task.is_editable() {
            return None;
        }
        let text = task.text.clone();
        self.editing = Some(id);
        Some(text)
    }

    /// Drop the pending edit. Returns whether one existed.
    pub fn cancel_edit(&mut self) -> bool {
        self.editing.take().is_some()
    }

    /// Set the completed flag. Returns `true` when this abandoned a pending
    /// edit (a checked task can't stay the edit target).
    pub fn set_completed(&mut self, id: TaskId, completed: bool) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.completed = completed;
        if completed && self.editing == Some(id) {
            self.editing = None;
            return true;
        }
        false
    }

    pub fn delete(&mut self, id: TaskId) -> Option<Removed> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        let task = self.tasks.remove(index);
        let abandoned_edit = self.editing == Some(id);
        if abandoned_edit {
            self.editing = None;
        }
        Some(Removed { task, abandoned_edit })
    }

    pub fn progress(&self) -> Progress {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        Progress::new(completed, self.tasks.len())
    }

    pub fn layout(&self) -> Layout {
        Layout::from_len(self.tasks.len())
    }

    /// Snapshot in display order for persistence
    pub fn to_stored(&self) -> Vec<StoredTask> {
        self.tasks.iter().map(StoredTask::from).collect()
    }
}
