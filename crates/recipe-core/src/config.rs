//! Application configuration
//!
//! Every field has a default so a partial (or absent) config object is valid.

use serde::{Deserialize, Serialize};

/// Runtime settings for the Recipe Box page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Backend origin; empty means "same origin as the page"
    pub api_base: String,
    /// Local storage key holding the shopping list
    pub shopping_list_key: String,
    /// Local storage key holding the theme class
    pub theme_key: String,
    /// How long a "tap again to remove" stays armed
    pub removal_window_ms: u64,
    /// How long a toast stays visible
    pub toast_ms: u64,
    /// `log` level filter name (error, warn, info, debug, trace)
    pub log_level: String,
    /// Number of recent log lines kept in memory
    pub log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            shopping_list_key: "shoppingList".to_string(),
            theme_key: "theme".to_string(),
            removal_window_ms: 2000,
            toast_ms: 2500,
            log_level: "info".to_string(),
            log_capacity: 200,
        }
    }
}

impl AppConfig {
    /// Parse a JSON config object, falling back to defaults field by field
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Join the API base with a path like `/recipes/`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
