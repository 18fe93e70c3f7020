//! Toast Component
//!
//! Shows the context toast and hides it after the configured delay. A newer
//! toast replaces the pending hide timer.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app_context();
    let toast_ms = ctx.config().toast_ms;
    let hide_timer = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        let Some(id) = ctx.toast.with(|t| t.as_ref().map(|t| t.id)) else {
            return;
        };
        let timeout = Timeout::new(toast_ms as u32, move || {
            if ctx.toast.with_untracked(|t| t.as_ref().map(|t| t.id)) == Some(id) {
                ctx.toast.set(None);
            }
        });
        // Dropping the previous Timeout cancels it
        hide_timer.set_value(Some(timeout));
    });

    view! {
        {move || ctx.toast.get().map(|toast| {
            let class = format!("toast {} show", toast.kind.as_class());
            view! { <div id="toast" class=class>{toast.message}</div> }
        })}
    }
}
