//! Application Context
//!
//! Shared state provided via Leptos Context API. The shopping session (pending
//! removal + shopping mode) lives here rather than in module globals.

use leptos::prelude::*;
use recipe_core::shopping::ShoppingListEngine;
use recipe_core::{ApiError, AppConfig};
use recipe_core::shopping::ShoppingSession;

use crate::commands::ApiClient;
use crate::models::{Modal, Toast, ToastKind, View};
use crate::storage::BrowserStorage;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload recipes from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload recipes from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Toast currently shown
    pub toast: RwSignal<Option<Toast>>,
    /// Open modal, if any
    pub modal: RwSignal<Option<Modal>>,
    /// Recipes or shopping list
    pub view: RwSignal<View>,
    /// Shopping mode flag and pending-removal guard
    pub session: RwSignal<ShoppingSession>,
    config: StoredValue<AppConfig>,
    toast_seq: StoredValue<u32>,
}

impl AppContext {
    pub fn new(config: AppConfig, reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        let session = ShoppingSession::new(config.removal_window_ms);
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            toast: RwSignal::new(None),
            modal: RwSignal::new(None),
            view: RwSignal::new(View::default()),
            session: RwSignal::new(session),
            config: StoredValue::new(config),
            toast_seq: StoredValue::new(0),
        }
    }

    /// Trigger a reload of recipes
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn api(&self) -> ApiClient {
        self.config.with_value(ApiClient::new)
    }

    /// Engine over the configured local storage slot
    pub fn shopping(&self) -> ShoppingListEngine<BrowserStorage> {
        let key = self.config.with_value(|c| c.shopping_list_key.clone());
        ShoppingListEngine::new(BrowserStorage::new(key))
    }

    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        self.toast_seq.update_value(|n| *n += 1);
        let id = self.toast_seq.get_value();
        self.toast.set(Some(Toast {
            id,
            kind,
            message: message.into(),
        }));
    }

    /// Surface a failed backend call. Transport failures read as "Server error".
    pub fn report(&self, err: &ApiError, failure_message: &str) {
        log::error!("[API] {}: {}", failure_message, err);
        match err {
            ApiError::Unauthorized => {
                let _ = window().location().set_href("/login");
            }
            err if err.is_transport() => self.notify(ToastKind::Warn, "Server error"),
            _ => self.notify(ToastKind::Error, failure_message),
        }
    }

    pub fn open_modal(&self, modal: Modal) {
        self.modal.set(Some(modal));
    }

    pub fn close_modal(&self) {
        self.modal.set(None);
    }

    pub fn shopping_mode(&self) -> bool {
        self.session.with(|s| s.shopping_mode)
    }

    pub fn toggle_shopping_mode(&self) {
        self.session.update(|s| {
            s.toggle_shopping_mode();
        });
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
