//! Ops Dashboard Frontend Entry Point

mod api;
mod app;
mod board;
mod components;
mod config;
mod context;
mod delete_flow;
mod error;
mod fetch;
mod format;
mod lifecycle;
mod markdown;
mod mirror;
mod models;
mod notify;
mod paging;
mod permissions;
mod store;
mod task_form;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = AppConfig::load();
    let level = loaded.as_ref().map(AppConfig::level_filter).unwrap_or(log::LevelFilter::Info);
    if let Err(e) = console_logger::init_logger(level, console_logger::DEFAULT_CAPACITY) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }

    let config = loaded.unwrap_or_else(|e| {
        log::error!("[CONFIG] {}; using defaults", e);
        AppConfig::default()
    });

    mount_to_body(move || view! { <App config=config /> });
}
