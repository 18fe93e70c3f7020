//! Recipe Box Frontend Entry Point

mod models;
mod commands;
mod config;
mod context;
mod store;
mod storage;
mod components;
mod app;
mod markdown;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = config::load_config();
    if let Err(err) = console_logger::init(config.log_level_filter(), config.log_capacity) {
        web_sys::console::warn_1(&format!("[APP] Logger already installed: {}", err).into());
    }
    log::info!("[APP] Starting, api base {}", config.api_base);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
