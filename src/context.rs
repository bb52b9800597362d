//! Task List Controller
//!
//! Copyable handle provided via Leptos Context API. Runs user intents against
//! the store, then persists and recomputes progress.

use std::sync::Arc;

use leptos::html;
use leptos::prelude::*;

use crate::celebration;
use crate::config::AppConfig;
use crate::models::TaskId;
use crate::storage::TaskStore;
use crate::store::{AppStore, AppStateStoreFields};
use crate::task_list::AddOutcome;

#[derive(Clone, Copy)]
pub struct TaskListController {
    store: AppStore,
    /// The shared text input, focused when an edit starts
    input_ref: NodeRef<html::Input>,
    config: StoredValue<AppConfig>,
    tasks: StoredValue<Arc<dyn TaskStore + Send + Sync>>,
}

impl TaskListController {
    pub fn new(store: AppStore, config: AppConfig, tasks: Arc<dyn TaskStore + Send + Sync>) -> Self {
        Self {
            store,
            input_ref: NodeRef::new(),
            config: StoredValue::new(config),
            tasks: StoredValue::new(tasks),
        }
    }

    pub fn input_ref(&self) -> NodeRef<html::Input> {
        self.input_ref
    }

    /// Replay the persisted list. Runs once at startup.
    pub fn restore(&self) {
        let entries = self.tasks.with_value(|tasks| tasks.load());
        let count = entries.len();
        self.store.list().update(|list| list.restore_all(entries));
        log::info!("Restored {} tasks", count);
        self.recompute();
    }

    pub fn set_draft(&self, text: String) {
        self.store.draft().set(text);
    }

    /// Submit the input field: commit the pending edit or append a new task
    pub fn add_from_input(&self) {
        let draft = self.store.draft().get_untracked();
        let outcome = self
            .store
            .list()
            .try_update(|list| list.submit(&draft))
            .unwrap_or(AddOutcome::Ignored);
        match outcome {
            AddOutcome::Ignored => return,
            AddOutcome::Appended(id) => log::debug!("Appended task {}", id.0),
            AddOutcome::Committed(id) => log::debug!("Committed edit to task {}", id.0),
        }
        self.store.draft().set(String::new());
        self.after_mutation();
    }

    pub fn begin_edit(&self, id: TaskId) {
        let Some(text) = self.store.list().try_update(|list| list.begin_edit(id)).flatten() else {
            return;
        };
        self.store.draft().set(text);
        if let Some(input) = self.input_ref.get_untracked() {
            let _ = input.focus();
        }
    }

    pub fn cancel_edit(&self) {
        if self.store.list().try_update(|list| list.cancel_edit()).unwrap_or(false) {
            self.store.draft().set(String::new());
        }
    }

    pub fn set_completed(&self, id: TaskId, completed: bool) {
        let abandoned = self
            .store
            .list()
            .try_update(|list| list.set_completed(id, completed))
            .unwrap_or(false);
        if abandoned {
            self.store.draft().set(String::new());
        }
        self.after_mutation();
    }

    pub fn delete(&self, id: TaskId) {
        let Some(removed) = self.store.list().try_update(|list| list.delete(id)).flatten() else {
            return;
        };
        if removed.abandoned_edit {
            self.store.draft().set(String::new());
        }
        log::debug!("Deleted task {}", removed.task.id.0);
        self.after_mutation();
    }

    fn after_mutation(&self) {
        self.persist();
        self.recompute();
    }

    fn persist(&self) {
        let tasks = self.store.list().with_untracked(|list| list.to_stored());
        if let Err(e) = self.tasks.with_value(|store| store.save(&tasks)) {
            log::warn!("Failed to persist tasks: {}", e);
        }
    }

    /// Progress check that may fire the celebration
    fn recompute(&self) {
        let progress = self.store.list().with_untracked(|list| list.progress());
        let fire = self
            .store
            .gate()
            .try_update(|gate| gate.observe(&progress))
            .unwrap_or(false);
        if fire {
            celebration::launch(self.config.with_value(|c| c.celebration.clone()));
        }
    }
}

/// Get the controller from context
pub fn use_controller() -> TaskListController {
    use_context::<TaskListController>().expect("TaskListController should be provided")
}
