//! Progress Panel Component
//!
//! Completion bar and `completed / total` counter.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ProgressPanel() -> impl IntoView {
    let store = use_app_store();

    let progress = Memo::new(move |_| store.list().with(|list| list.progress()));

    view! {
        <div class="stats-container">
            <div class="details">
                <h3>"Keep it up!"</h3>
                <div id="progress-bar">
                    <div id="progress" style=move || progress.get().bar_width()></div>
                </div>
            </div>
            <div class="stats-numbers">
                <p id="numbers">{move || progress.get().counter()}</p>
            </div>
        </div>
    }
}
