//! Empty State Component

use leptos::prelude::*;

/// Placeholder graphic shown while the list is empty
#[component]
pub fn EmptyState(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <img
            class="empty-image"
            src="public/empty.svg"
            alt="No tasks yet"
            style=move || if visible.get() { "display: block;" } else { "display: none;" }
        />
    }
}
