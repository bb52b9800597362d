//! Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::progress::CelebrationGate;
use crate::task_list::TaskList;

/// Session state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Ordered tasks and the edit marker
    pub list: TaskList,
    /// Contents of the input field
    pub draft: String,
    /// Tracks all-complete transitions across recomputations
    pub gate: CelebrationGate,
}

impl AppState {
    pub fn new(list: TaskList, gate: CelebrationGate) -> Self {
        Self {
            list,
            draft: String::new(),
            gate,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
