//! Task Form Component
//!
//! Input field and submit button. Doubles as the editor for an existing task.

use leptos::prelude::*;

use crate::context::use_controller;
use crate::store::{use_app_store, AppStateStoreFields};

/// Add / edit form (click or Enter submits)
#[component]
pub fn TaskForm() -> impl IntoView {
    let store = use_app_store();
    let controller = use_controller();

    let is_editing = move || store.list().with(|list| list.editing().is_some());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        controller.add_from_input();
    };

    view! {
        <form class="input-area" on:submit=submit>
            <input
                type="text"
                id="task-input"
                placeholder="Add a new task"
                node_ref=controller.input_ref()
                prop:value=move || store.draft().get()
                on:input=move |ev| controller.set_draft(event_target_value(&ev))
            />
            <button type="submit" id="add-task-btn">
                {move || if is_editing() { "Save" } else { "Add" }}
            </button>
            <Show when=is_editing>
                <button type="button" class="cancel-btn" on:click=move |_| controller.cancel_edit()>
                    "Cancel"
                </button>
            </Show>
        </form>
    }
}
