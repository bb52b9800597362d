//! UI Components
//!
//! Leptos components for the task list page.

mod task_form;
mod task_row;
mod task_list_view;
mod progress_panel;
mod empty_state;

pub use task_form::TaskForm;
pub use task_row::TaskRow;
pub use task_list_view::TaskListView;
pub use progress_panel::ProgressPanel;
pub use empty_state::EmptyState;
