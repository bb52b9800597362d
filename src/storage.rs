//! Task Persistence
//!
//! The whole list is stored as one JSON array under a fixed key, rewritten
//! after every mutation and read once at startup.

#[cfg(test)]
use std::sync::Mutex;

use serde_json::Value;

use crate::error::StorageError;
use crate::models::StoredTask;

/// Load/save seam for the persisted task list
pub trait TaskStore {
    /// Stored entries in display order. Missing or unreadable data is an
    /// empty list.
    fn load(&self) -> Vec<StoredTask>;
    /// Overwrite the stored list
    fn save(&self, tasks: &[StoredTask]) -> Result<(), StorageError>;
}

/// Parse a raw stored value. Absent, `null` and corrupt values all yield an
/// empty list. Entries are converted one at a time so a single malformed
/// entry can't take the rest of the list with it.
pub fn decode(raw: Option<&str>) -> Vec<StoredTask> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str::<Option<Vec<Value>>>(raw) {
        Ok(entries) => entries
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| decode_entry(index, entry))
            .collect(),
        Err(e) => {
            log::warn!("Discarding unreadable task list: {}", e);
            Vec::new()
        }
    }
}

/// One stored entry. Well-formed objects deserialize directly; objects with
/// mistyped fields are coerced; anything that isn't an object is skipped.
fn decode_entry(index: usize, entry: Value) -> Option<StoredTask> {
    if !entry.is_object() {
        log::warn!("Skipping task entry {}: not an object ({})", index, entry);
        return None;
    }
    match serde_json::from_value::<StoredTask>(entry.clone()) {
        Ok(task) => Some(task),
        Err(e) => {
            log::warn!("Coercing task entry {}: {}", index, e);
            Some(StoredTask {
                text: coerce_text(entry.get("text")),
                completed: entry.get("completed").is_some_and(truthy),
            })
        }
    }
}

fn coerce_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Loose truthiness for a mistyped `completed` flag
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub fn encode(tasks: &[StoredTask]) -> Result<String, StorageError> {
    Ok(serde_json::to_string(tasks)?)
}

/// In-memory store holding the raw JSON string, for host-side tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryTaskStore {
    raw: Mutex<Option<String>>,
}

#[cfg(test)]
impl MemoryTaskStore {
    pub fn with_raw(raw: &str) -> Self {
        Self { raw: Mutex::new(Some(raw.to_string())) }
    }

    /// Last JSON written by `save`
    pub fn raw(&self) -> Option<String> {
        self.raw.lock().ok().and_then(|raw| raw.clone())
    }
}

#[cfg(test)]
impl TaskStore for MemoryTaskStore {
    fn load(&self) -> Vec<StoredTask> {
        decode(self.raw().as_deref())
    }

    fn save(&self, tasks: &[StoredTask]) -> Result<(), StorageError> {
        let json = encode(tasks)?;
        if let Ok(mut raw) = self.raw.lock() {
            *raw = Some(json);
        }
        Ok(())
    }
}

/// `window.localStorage` backed store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalTaskStore {
    key: String,
}

impl LocalTaskStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl TaskStore for LocalTaskStore {
    fn load(&self) -> Vec<StoredTask> {
        let raw = match self.storage() {
            Ok(storage) => storage.get_item(&self.key).ok().flatten(),
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        };
        let tasks = decode(raw.as_deref());
        log::debug!("Loaded {} tasks from '{}'", tasks.len(), self.key());
        tasks
    }

    fn save(&self, tasks: &[StoredTask]) -> Result<(), StorageError> {
        let json = encode(tasks)?;
        self.storage()?
            .set_item(&self.key, &json)
            .map_err(|e| StorageError::Write {
                key: self.key.clone(),
                message: format!("{:?}", e),
            })
    }
}
