//! Config loading
//!
//! The page may embed `<script id="recipe-box-config" type="application/json">`
//! with any subset of `AppConfig` fields.

use leptos::prelude::*;
use recipe_core::AppConfig;

const CONFIG_ELEMENT_ID: &str = "recipe-box-config";

pub fn load_config() -> AppConfig {
    let raw = document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());

    let mut config = match raw.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => AppConfig::from_json(raw).unwrap_or_else(|err| {
            // Logger is not installed yet
            web_sys::console::warn_1(&format!("[CONFIG] Ignoring malformed config: {}", err).into());
            AppConfig::default()
        }),
        None => AppConfig::default(),
    };

    // reqwest needs an absolute URL
    if config.api_base.is_empty() {
        config.api_base = window().location().origin().unwrap_or_default();
    }
    config
}
