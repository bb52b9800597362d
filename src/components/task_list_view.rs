//! Task List View Component

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::store::{use_app_store, AppStateStoreFields};

/// Ordered task list
#[component]
pub fn TaskListView() -> impl IntoView {
    let store = use_app_store();

    let tasks = move || store.list().with(|list| list.tasks().to_vec());

    view! {
        <ul id="task-list">
            <For
                each=tasks
                // Every mutable field is part of the key so edits and toggles re-render the row
                key=|task| (task.id, task.text.clone(), task.completed)
                children=move |task| view! { <TaskRow task=task /> }
            />
        </ul>
    }
}
