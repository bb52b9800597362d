//! Task List Frontend Entry Point

mod models;
mod task_list;
mod progress;
mod config;
mod error;
mod storage;
mod logging;
mod celebration;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::load();
    logging::init(config.level_filter());
    mount_to_body(move || view! { <App config=config.clone() /> });
}
