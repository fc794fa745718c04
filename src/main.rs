//! Todo & Followers Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod fetch;
mod models;
mod route;
mod store;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

const LOG_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Info
};

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(LOG_LEVEL) {
        web_sys::console::warn_1(&format!("console logger not installed: {e}").into());
    }
    log::info!("mounting app");
    mount_to_body(App);
}
