//! Visibility Toggle Component
//!
//! Public/private switch with optimistic update and rollback.

use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_core::{toggle_visibility, ApiError, RecipeId, VisibilityControl, VisibilityOutcome};

use crate::context::{use_app_context, AppContext};
use crate::models::ToastKind;
use crate::store::{store_set_public, use_app_store};

/// The switch as seen by the toggle protocol
struct SwitchControl {
    checked: RwSignal<bool>,
    ctx: AppContext,
}

impl VisibilityControl for SwitchControl {
    fn set_public(&self, is_public: bool) {
        self.checked.set(is_public);
    }

    fn notify_failure(&self, message: &str) {
        self.ctx.notify(ToastKind::Error, message);
    }
}

#[component]
pub fn VisibilityToggle(recipe_id: RecipeId, is_public: bool) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let checked = RwSignal::new(is_public);
    let (in_flight, set_in_flight) = signal(false);

    let on_change = move |_| {
        if in_flight.get_untracked() {
            return;
        }
        let previous = checked.get_untracked();
        let requested = !previous;
        set_in_flight.set(true);

        spawn_local(async move {
            let control = SwitchControl { checked, ctx };
            let outcome = toggle_visibility(&ctx.api(), &control, recipe_id, previous, requested).await;
            match outcome {
                VisibilityOutcome::Committed(value) => {
                    ctx.notify(
                        ToastKind::Success,
                        if value { "Recipe is now public" } else { "Recipe is now private" },
                    );
                    store_set_public(&store, recipe_id, value);
                }
                VisibilityOutcome::RolledBack(ApiError::Unauthorized) => {
                    ctx.report(&ApiError::Unauthorized, "Failed to change visibility");
                }
                VisibilityOutcome::RolledBack(_) => {}
            }
            set_in_flight.set(false);
        });
    };

    view! {
        <label class="visibility-switch">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                prop:disabled=move || in_flight.get()
                on:change=on_change
            />
            {move || if checked.get() { "Public" } else { "Private" }}
        </label>
    }
}
