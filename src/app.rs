//! Task List App
//!
//! Root component: builds the store, provides the controller and restores
//! the persisted list.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{EmptyState, ProgressPanel, TaskForm, TaskListView};
use crate::config::AppConfig;
use crate::context::TaskListController;
use crate::progress::CelebrationGate;
use crate::storage::LocalTaskStore;
use crate::store::{AppState, AppStateStoreFields};
use crate::task_list::TaskList;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let gate = CelebrationGate::new(config.celebration.policy);
    let store = Store::new(AppState::new(TaskList::new(), gate));
    let tasks = Arc::new(LocalTaskStore::new(config.storage_key.clone()));
    let controller = TaskListController::new(store, config, tasks);

    // Provide context to all children
    provide_context(store);
    provide_context(controller);

    controller.restore();

    let layout = Memo::new(move |_| store.list().with(|list| list.layout()));

    view! {
        <div class="container">
            <ProgressPanel />
            <TaskForm />
            <EmptyState visible=Signal::derive(move || layout.get().show_placeholder) />
            <div
                class="todos-container"
                style=move || format!("width: {};", layout.get().container_width)
            >
                <TaskListView />
            </div>
        </div>
    }
}
