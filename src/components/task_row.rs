//! Task Row Component
//!
//! One list entry: checkbox, text, edit and delete controls.

use leptos::prelude::*;

use crate::context::use_controller;
use crate::models::Task;
use crate::store::{use_app_store, AppStateStoreFields};

/// Space-separated row classes, e.g. `"completed editing"`
fn row_class(completed: bool, editing: bool) -> String {
    let mut classes = Vec::new();
    if completed { classes.push("completed"); }
    if editing { classes.push("editing"); }
    classes.join(" ")
}

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let store = use_app_store();
    let controller = use_controller();

    let id = task.id;
    let completed = task.completed;
    let editable = task.is_editable();
    let is_editing = move || store.list().with(|list| list.is_editing(id));

    view! {
        <li class=move || row_class(completed, is_editing())>
            <input
                type="checkbox"
                class="checkbox"
                prop:checked=completed
                on:change=move |ev| controller.set_completed(id, event_target_checked(&ev))
            />
            <span>{task.text}</span>
            <div class="task-buttons">
                <button
                    class="edit-btn"
                    disabled=!editable
                    style=if editable { "opacity: 1; pointer-events: auto;" } else { "opacity: 0.5; pointer-events: none;" }
                    on:click=move |_| controller.begin_edit(id)
                >
                    <i class="fa-solid fa-pen"></i>
                </button>
                <button class="delete-btn" on:click=move |_| controller.delete(id)>
                    <i class="fa-solid fa-trash"></i>
                </button>
            </div>
        </li>
    }
}
